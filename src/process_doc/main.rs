use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use process_doc::api::ProcessApi;
use process_doc::commands::{CmdMessage, MessageLevel};
use process_doc::config::{ProcessConfig, CONFIG_DIRNAME};
use process_doc::error::Result;
use process_doc::logging::init_cli_logger;
use process_doc::model::{ProcessRequest, ReportOutcome};
use process_doc::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, OutputFormat};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_cli_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIRNAME));
    let mut config = ProcessConfig::load(&config_dir)?;
    if let Some(root) = cli.output_root {
        config.output_root = root;
    }
    if cli.strict_prefix {
        config.require_prefix = true;
    }

    let mut api = ProcessApi::new(FileStore::new(), config);
    let request = ProcessRequest::new(cli.input_file, cli.user_folder)
        .with_name_from_input(cli.name_from_input);

    let result = api.process(&request)?;
    print_messages(&result.messages, cli.verbose > 0);
    if let Some(report) = &result.report {
        print_report(report, cli.output)?;
    }
    Ok(())
}

/// Messages go to stderr so stdout carries only the result.
fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Warning => {
                eprintln!("{} {}", "Warning:".yellow(), message.content.yellow())
            }
        }
    }
}

fn print_report(report: &ReportOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("Output PDF saved at: {}", report.output.display()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
