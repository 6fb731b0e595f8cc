use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "heartcheck")]
#[command(about = "Heart disease risk calculator with history tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding saved records (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a health profile and print the assessment
    Assess {
        /// Path to a JSON health profile (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// User id to save the record under (computed but not saved when omitted)
        #[arg(short, long, env = "HEARTCHECK_USER")]
        user: Option<String>,

        /// Seed for the simulated prediction jitter (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the simulated prediction line
        #[arg(long)]
        no_prediction: bool,
    },

    /// Show saved records, newest first, with the latest trend
    History {
        /// User id whose records to show
        #[arg(short, long, env = "HEARTCHECK_USER")]
        user: String,

        /// Records per page (defaults to config history_limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Export all of a user's records as a JSON document
    Export {
        /// User id whose records to export
        #[arg(short, long, env = "HEARTCHECK_USER")]
        user: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every saved record for a user
    Purge {
        /// User id whose records to delete
        #[arg(short, long, env = "HEARTCHECK_USER")]
        user: String,

        /// Confirm the deletion (the command refuses without it)
        #[arg(long)]
        yes: bool,
    },
}
