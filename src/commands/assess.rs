use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::get_config;
use crate::core::RawInput;
use crate::io::output::{create_writer, AssessmentReport};
use crate::io::OutputFormat;
use crate::record::assemble_record;
use crate::risk::{evaluate_risk, simulated_percentage, simulated_percentage_with};
use crate::storage::{JsonFileRepository, RecordRepository};

pub struct AssessOptions {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub user: Option<String>,
    pub seed: Option<u64>,
    pub no_prediction: bool,
    pub data_dir: Option<PathBuf>,
}

pub fn run(options: AssessOptions) -> Result<()> {
    let raw = read_raw_input(options.input.as_deref())?;
    let input = raw.validate()?;
    let assessment = evaluate_risk(&input);

    let simulated_percent = if options.no_prediction {
        None
    } else {
        Some(match options.seed {
            Some(seed) => simulated_percentage_with(
                assessment.total_score,
                input.age,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => simulated_percentage(assessment.total_score, input.age),
        })
    };

    let report = AssessmentReport {
        assessment: assessment.clone(),
        simulated_percent,
    };
    write_report(options.format, options.output.as_deref(), &report)?;

    // Persistence happens after the result is written; a failed save is
    // reported but never rolls the displayed assessment back.
    match &options.user {
        Some(user) => {
            let record = assemble_record(&input, &assessment);
            let data_dir = get_config().resolve_data_dir(options.data_dir.as_deref());
            let save = JsonFileRepository::open(data_dir)
                .and_then(|mut repo| repo.save(user, record));
            if let Err(e) = save {
                log::error!("failed to save record for {user}: {e}");
                eprintln!("warning: failed to save your results: {e}");
            }
        }
        None => log::info!("no user id given; result not saved"),
    }

    Ok(())
}

fn read_raw_input(path: Option<&std::path::Path>) -> Result<RawInput> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read profile {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&content).context("profile is not valid JSON")
}

fn write_report(
    format: OutputFormat,
    output: Option<&std::path::Path>,
    report: &AssessmentReport,
) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    create_writer(format, sink).write_assessment(report)
}
