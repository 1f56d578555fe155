//! # commentpack CLI
//!
//! Command-line interface for the commentpack library.

use std::io::{self, Read};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};

use commentpack::analysis::{DashboardTotals, purchase_intent_count, results_from_json, summarize};
use commentpack::cli::{Cli, Command, ParseArgs, SummaryArgs};
use commentpack::config::ParserConfig;
use commentpack::core::{BatchStats, FilterConfig, apply_filters, count_lines};
use commentpack::format::{OutputFormat, to_format_string, write_to_format};
use commentpack::parser::LineCommentParser;
use commentpack::platform::PlatformCatalog;
use commentpack::{CommentpackError, ParsedComment};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CommentpackError> {
    match command {
        Command::Parse(args) => run_parse(&args),
        Command::Summary(args) => run_summary(&args),
    }
}

fn run_parse(args: &ParseArgs) -> Result<(), CommentpackError> {
    let total_start = Instant::now();

    let parser = LineCommentParser::with_config(build_config(args)?)?;
    info!(
        platforms = ?parser.config().platforms.names(),
        precedence = %parser.config().precedence,
        "parser ready"
    );

    let content = read_input(&args.input)?;
    let total_lines = count_lines(&content);

    let parse_start = Instant::now();
    let comments = if args.keep_empty {
        parser.parse_lines(&content)
    } else {
        parser.parse_batch(&content)
    };
    let stats = BatchStats::from_records(total_lines, &comments);
    debug!(elapsed = ?parse_start.elapsed(), "parsing finished");

    let mut filter_config = FilterConfig::new();
    if let Some(ref platform) = args.platform {
        filter_config = filter_config.with_platform(platform.clone());
    }
    if let Some(ref user) = args.user {
        filter_config = filter_config.with_username(user.clone());
    }
    let comments = apply_filters(comments, &filter_config);

    let format = args.output_format();
    emit(&comments, args.output.as_deref(), format)?;

    eprintln!("📊 Summary:");
    eprintln!("   Lines:     {}", stats.total_lines);
    eprintln!(
        "   Kept:      {} ({:.1}% discarded)",
        stats.kept,
        stats.discard_ratio()
    );
    for (platform, count) in &stats.by_platform {
        eprintln!("   {:<10} {}", format!("{platform}:"), count);
    }
    if filter_config.is_active() {
        eprintln!("   Filtered:  {}", comments.len());
    }
    if let Some(ref output) = args.output {
        eprintln!("✅ {} written to {}", format, output);
    }
    debug!(elapsed = ?total_start.elapsed(), "done");

    Ok(())
}

fn build_config(args: &ParseArgs) -> Result<ParserConfig, CommentpackError> {
    let mut config = match args.config {
        Some(ref path) => ParserConfig::from_json_file(path)?,
        None => ParserConfig::new(),
    };

    if let Some(ref list) = args.platforms {
        config = config.with_platforms(PlatformCatalog::from_list(list)?);
    }
    if let Some(precedence) = args.precedence {
        config = config.with_precedence(precedence.into());
    }

    Ok(config)
}

fn read_input(input: &str) -> Result<String, CommentpackError> {
    if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn emit(
    comments: &[ParsedComment],
    output: Option<&str>,
    format: OutputFormat,
) -> Result<(), CommentpackError> {
    match output {
        Some(path) => write_to_format(comments, path, format),
        None => {
            let rendered = to_format_string(comments, format)?;
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
            Ok(())
        }
    }
}

fn run_summary(args: &SummaryArgs) -> Result<(), CommentpackError> {
    let content = read_input(&args.input)?;
    let results = results_from_json(&content)?;
    let summaries = summarize(&results);
    info!(results = results.len(), platforms = summaries.len(), "summarized analysis results");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{:<12} {:>8} {:>9} {:>9}", "Platform", "Total", "Positive", "Negative");
    for summary in &summaries {
        println!(
            "{:<12} {:>8} {:>9} {:>9}",
            summary.platform,
            summary.total_comments,
            summary.positive_comments,
            summary.negative_comments
        );
    }

    let totals = DashboardTotals::from_summaries(&summaries);
    println!(
        "{:<12} {:>8} {:>9} {:>9}",
        "All", totals.total_comments, totals.positive_comments, totals.negative_comments
    );
    println!();
    println!("Positive share:  {:.1}%", totals.positive_ratio());
    println!("Purchase intent: {}", purchase_intent_count(&results));

    Ok(())
}
