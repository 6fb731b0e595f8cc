use anyhow::Result;
use clap::Parser;
use heartcheck::cli::{Cli, Commands};
use heartcheck::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Assess {
            input,
            format,
            output,
            user,
            seed,
            no_prediction,
        } => commands::assess::run(commands::assess::AssessOptions {
            input,
            format,
            output,
            user,
            seed,
            no_prediction,
            data_dir,
        }),
        Commands::History {
            user,
            limit,
            format,
        } => commands::history::run(commands::history::HistoryOptions {
            user,
            limit,
            format,
            data_dir,
        }),
        Commands::Export { user, output } => {
            commands::export::run(commands::export::ExportOptions {
                user,
                output,
                data_dir,
            })
        }
        Commands::Purge { user, yes } => commands::purge::run(commands::purge::PurgeOptions {
            user,
            yes,
            data_dir,
        }),
    }
}
