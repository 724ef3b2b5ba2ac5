//! Public address guard.
//! Classifies IP addresses as public, private or invalid and prints a report.

mod cli;
mod data;
mod display;
mod domain;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, OutputFormat};
use data::AddressCollector;
use display::ReportFormatter;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log)?;

    let collector = build_collector(&cli, std::io::stdin().is_terminal());
    if collector.is_empty() {
        anyhow::bail!("No addresses given; pass ADDRESS arguments, --file, --interfaces or pipe a list on stdin");
    }

    let inputs = match collector.collect_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            let error_output = ReportFormatter::create_error_output(e);
            println!("{}", serde_json::to_string(&error_output)?);
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(count = inputs.len(), "collected addresses");

    let formatter = ReportFormatter::new();
    let report = formatter.format(&inputs);

    for entry in report.entries.iter().filter(|entry| entry.status.is_some()) {
        info!(
            input = %entry.input.trim(),
            source = %entry.source,
            status = ?entry.status,
            "address rejected"
        );
    }
    debug!(
        total = report.summary.total,
        public = report.summary.public,
        private = report.summary.private,
        invalid = report.summary.invalid,
        "classification complete"
    );

    match cli.format {
        OutputFormat::Json => println!("{}", formatter.render_json(&report)?),
        OutputFormat::Text => println!("{}", formatter.render_text(&report)),
    }

    Ok(ExitCode::from(exit_status(cli.strict, report.summary.all_public())))
}

/// Configures sources from arguments
/// Stdin is only read when nothing else was given and it is not a terminal
fn build_collector(cli: &Cli, stdin_is_terminal: bool) -> AddressCollector {
    let explicit_sources = !cli.addresses.is_empty() || !cli.files.is_empty() || cli.interfaces;

    AddressCollector::new()
        .with_arguments(cli.addresses.clone())
        .with_files(cli.files.clone())
        .with_interfaces(cli.interfaces)
        .with_stdin(!explicit_sources && !stdin_is_terminal)
}

/// 2 when `--strict` and anything was rejected, otherwise 0
fn exit_status(strict: bool, all_public: bool) -> u8 {
    if strict && !all_public { 2 } else { 0 }
}
