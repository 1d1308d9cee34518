mod exam;
mod report;

use clap::Parser;
use exam::stats::Summary;
use exam::Exam;
use log::{info, warn};
use report::{write_report, ReportError};
use std::path::PathBuf;
use std::process;

/// Builds a color-coded spreadsheet out of exam question results.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// A file with the following structure:
    /// `<category>` followed by lines of `<question number> <your answer> <correct answer>`,
    /// where the category is one of כמותי, מילולי, אנגלית and the rest are integers
    input: PathBuf,

    /// Name of the target excel file, without extension. A new file is created on each run
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<Summary, failure::Error> {
    let exam = Exam::from_path(&cli.input)?;
    if exam.is_empty() {
        warn!("{} contains no records", cli.input.display());
    } else {
        info!("parsed {} records from {}", exam.len(), cli.input.display());
    }
    let summary = write_report(&cli.output, &exam)?;
    Ok(summary)
}

fn failure_message(err: &failure::Error) -> String {
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::OutputLocked { path }) => format!(
            "Whoops! Looks like {} is already open. Close it and try again.",
            path
        ),
        _ => format!("Something went wrong: {}", err),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => println!("{}", summary),
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            process::exit(1);
        }
    }
}
