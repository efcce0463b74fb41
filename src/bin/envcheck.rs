use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use envcheck::EnvReport;

#[derive(Parser, Debug)]
#[command(
    name = "envcheck",
    version,
    about = "Print a fixed diagnostic report of the host environment"
)]
struct Cli {}

fn main() -> ExitCode {
    init_logging();
    let _cli = Cli::parse();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("envcheck error: {err:?}");
            ExitCode::from(1)
        }
    }
}

// Logging stays on stderr: stdout carries only the nine report lines.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let report = EnvReport::capture()?;
    tracing::debug!("environment snapshot captured");
    report.print();
    Ok(())
}
