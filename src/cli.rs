//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - Top-level arguments and global flags
//! - [`Command`] - `parse` and `summary` subcommands
//! - [`FormatArg`] / [`PrecedenceArg`] - value enums mapped onto library types

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::format::OutputFormat;
use crate::platform::PlatformPrecedence;

/// Turn pasted social-media comments into clean batches for sentiment analysis.
#[derive(Parser, Debug, Clone)]
#[command(name = "commentpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    commentpack parse comments.txt
    commentpack parse comments.txt -f text
    cat pasted.txt | commentpack parse - -o batch.json
    commentpack parse comments.txt --platforms Reddit,Twitch --precedence last
    commentpack summary results.json")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse comment lines into {platform, username, text} records
    Parse(ParseArgs),

    /// Summarize analysis results per platform
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Input text file, or '-' for stdin
    pub input: String,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format [default: from the output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Comma-separated platform catalog, in matching order
    #[arg(long, value_name = "LIST")]
    pub platforms: Option<String>,

    /// JSON parser configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Which catalog entry wins when a line mentions several
    #[arg(long, value_enum)]
    pub precedence: Option<PrecedenceArg>,

    /// Keep only comments from this platform
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Keep only comments by this user
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Keep records whose text is empty
    #[arg(long)]
    pub keep_empty: bool,
}

impl ParseArgs {
    /// Resolves the output format.
    ///
    /// An explicit `--format` wins. Otherwise the extension of `--output`
    /// decides, and JSON is used for stdout or an unrecognized extension.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }

        match self.output.as_deref().map(OutputFormat::from_path) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                warn!(error = %e, "writing JSON");
                OutputFormat::Json
            }
            None => OutputFormat::Json,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// JSON array of analysis results
    pub input: String,

    /// Print the per-platform summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    #[value(alias = "ndjson")]
    Jsonl,
    Csv,
    #[value(alias = "txt")]
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrecedenceArg {
    First,
    Last,
}

impl From<PrecedenceArg> for PlatformPrecedence {
    fn from(precedence: PrecedenceArg) -> PlatformPrecedence {
        match precedence {
            PrecedenceArg::First => PlatformPrecedence::First,
            PrecedenceArg::Last => PlatformPrecedence::Last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from([
            "commentpack",
            "-vv",
            "parse",
            "in.txt",
            "-f",
            "txt",
            "--precedence",
            "last",
            "--platforms",
            "Reddit,Twitch",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Command::Parse(args) = cli.command else {
            panic!("expected parse subcommand");
        };
        assert_eq!(args.input, "in.txt");
        assert_eq!(args.format, Some(FormatArg::Text));
        assert_eq!(args.output_format(), OutputFormat::Text);
        assert_eq!(args.precedence, Some(PrecedenceArg::Last));
        assert_eq!(args.platforms.as_deref(), Some("Reddit,Twitch"));
        assert!(!args.keep_empty);
    }

    fn parse_args(argv: &[&str]) -> ParseArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::Parse(args) = cli.command else {
            panic!("expected parse subcommand");
        };
        args
    }

    #[test]
    fn test_output_format_from_extension() {
        let args = parse_args(&["commentpack", "parse", "in.txt", "-o", "batch.csv"]);
        assert_eq!(args.format, None);
        assert_eq!(args.output_format(), OutputFormat::Csv);

        let args = parse_args(&["commentpack", "parse", "in.txt", "-o", "review.txt"]);
        assert_eq!(args.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_explicit_wins() {
        let args = parse_args(&["commentpack", "parse", "in.txt", "-o", "batch.csv", "-f", "jsonl"]);
        assert_eq!(args.output_format(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_output_format_defaults_to_json() {
        assert_eq!(
            parse_args(&["commentpack", "parse", "in.txt"]).output_format(),
            OutputFormat::Json
        );
        assert_eq!(
            parse_args(&["commentpack", "parse", "in.txt", "-o", "batch.dat"]).output_format(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_summary_subcommand() {
        let cli = Cli::try_parse_from(["commentpack", "summary", "results.json", "--json"]).unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary subcommand");
        };
        assert_eq!(args.input, "results.json");
        assert!(args.json);
    }

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Jsonl), OutputFormat::Jsonl);
        assert_eq!(
            PlatformPrecedence::from(PrecedenceArg::First),
            PlatformPrecedence::First
        );
    }
}
