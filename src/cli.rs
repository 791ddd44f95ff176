//! Command-line interface components.

use crate::config::{ExtractConfig, TupleSchema};
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, LOG_TARGET, tuple_layout};
use crate::extractor::LocationExtractor;
use crate::models::ExtractionStats;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "dump_locations")]
#[command(about = "Extract location records from the value tuples of a SQL dump into JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the SQL dump file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output path for the JSON document
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Exact number of fields a tuple must have
    #[arg(long, default_value_t = tuple_layout::ARITY)]
    pub arity: usize,

    /// Field index of the location name
    #[arg(long, default_value_t = tuple_layout::NAME_INDEX)]
    pub name_index: usize,

    /// Field index of the location category
    #[arg(long, default_value_t = tuple_layout::TYPE_INDEX)]
    pub type_index: usize,

    /// Field index of the latitude
    #[arg(long, default_value_t = tuple_layout::LAT_INDEX)]
    pub lat_index: usize,

    /// Field index of the longitude
    #[arg(long, default_value_t = tuple_layout::LNG_INDEX)]
    pub lng_index: usize,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Disable the reading progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors and the final count
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Tuple layout assembled from the index flags
    pub fn tuple_schema(&self) -> TupleSchema {
        TupleSchema {
            arity: self.arity,
            name_index: self.name_index,
            type_index: self.type_index,
            lat_index: self.lat_index,
            lng_index: self.lng_index,
        }
    }

    /// Extraction settings derived from the arguments
    pub fn extract_config(&self) -> ExtractConfig {
        let mut config = ExtractConfig::default().with_schema(self.tuple_schema());
        if self.pretty {
            config = config.with_pretty();
        }
        // Debug output would tear through the bar, so verbose runs go without one
        if !(self.no_progress || self.quiet || self.verbose) {
            config = config.with_progress();
        }
        config
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run one extraction as described by the arguments
pub fn run(args: &Args) -> Result<ExtractionStats> {
    let config = args.extract_config();
    config
        .validate()
        .context("Invalid tuple layout arguments")?;

    let extractor = LocationExtractor::new(args.input.clone(), args.output.clone())?
        .with_config(config);

    let stats = extractor.extract().with_context(|| {
        format!(
            "Failed to extract locations from {}",
            extractor.input_path().display()
        )
    })?;

    print_summary(&stats, args.quiet);
    Ok(stats)
}

/// Report the final count on stdout
pub fn print_summary(stats: &ExtractionStats, quiet: bool) {
    println!(
        "Extracted {} locations to {}",
        stats.records_extracted.to_string().bright_white().bold(),
        stats.output_path.display().to_string().bright_cyan()
    );

    if quiet {
        return;
    }

    println!(
        "  {} {} lines, {} tuples",
        "Read:".bright_cyan(),
        stats.lines_read,
        stats.tuple_lines
    );
    if stats.tuples_rejected() > 0 {
        println!(
            "  {} {} wrong field count, {} bad coordinates, {} missing fields",
            "Skipped:".bright_yellow(),
            stats.arity_mismatches,
            stats.invalid_coordinates,
            stats.index_out_of_range
        );
    }
    if stats.fallback_decoded_lines > 0 {
        println!(
            "  {} {} lines decoded as ISO-8859-1",
            "Fallback:".bright_yellow(),
            stats.fallback_decoded_lines
        );
    }
    println!(
        "  {} {}ms",
        "Time:".bright_cyan(),
        stats.processing_time_ms
    );
}
