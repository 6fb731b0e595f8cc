// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod record;
pub mod risk;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    FactorResult, Gender, HealthInput, HealthRecord, HeartcheckError, RawInput, Result,
    RiskAssessment, RiskFactor, RiskLevel, SCORE_CAP,
};

pub use crate::risk::{
    analyze_trend, evaluate_risk, simulated_percentage, simulated_percentage_with, Trend,
    TrendDirection, MSG_DISCLAIMER, MSG_POSITIVE,
};

pub use crate::record::{assemble_record, assemble_record_at};

pub use crate::storage::{JsonFileRepository, MemoryRepository, RecordRepository};

pub use crate::io::{create_writer, export_document, ExportDocument, OutputFormat, OutputWriter};
