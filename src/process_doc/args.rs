use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "process_doc", version)]
#[command(about = "Copy or fabricate a per-user PDF analysis report", long_about = None)]
pub struct Cli {
    /// Document to process; `.pdf` files are copied, anything else gets a placeholder
    #[arg(value_name = "input_file")]
    pub input_file: PathBuf,

    /// User folder name, conventionally `input_<id>`
    #[arg(value_name = "user_folder")]
    pub user_folder: String,

    /// Root directory for per-user output folders [default: public]
    #[arg(long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Directory holding config.json [default: .process_doc]
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Name the report after the input (analysis_report_<stem>.pdf)
    #[arg(long)]
    pub name_from_input: bool,

    /// Reject user folders without the `input_` prefix
    #[arg(long)]
    pub strict_prefix: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_args() {
        let cli = Cli::try_parse_from(["process_doc", "in.pdf", "input_42"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.pdf"));
        assert_eq!(cli.user_folder, "input_42");
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.name_from_input);
    }

    #[test]
    fn test_missing_user_folder() {
        let err = Cli::try_parse_from(["process_doc", "in.pdf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "process_doc",
            "-vv",
            "--output",
            "json",
            "--output-root",
            "reports",
            "--strict-prefix",
            "--name-from-input",
            "in.txt",
            "input_1",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.output_root, Some(PathBuf::from("reports")));
        assert!(cli.strict_prefix);
        assert!(cli.name_from_input);
    }
}
