pub mod export;
pub mod output;

pub use export::{export_document, ExportDocument};
pub use output::{create_writer, AssessmentReport, HistoryView, OutputFormat, OutputWriter};
