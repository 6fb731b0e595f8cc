pub mod assess;
pub mod export;
pub mod history;
pub mod purge;
