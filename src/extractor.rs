//! Extraction pipeline.
//!
//! Drives the dump through line decoding, tuple tokenizing and record
//! projection, keeps accepted records in input order, and writes the
//! output document once at the end. Per-line anomalies are counted and
//! skipped. Only file-level I/O failures abort a run.

use crate::config::ExtractConfig;
use crate::constants::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use crate::error::{ExtractError, Result};
use crate::models::{ExtractionStats, LocationRecord};
use crate::projector::{Rejection, project};
use crate::source::DumpLineReader;
use crate::tokenizer::tokenize;
use crate::writer::write_locations;

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Records accepted from a dump together with the counters for the run
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<LocationRecord>,
    pub stats: ExtractionStats,
}

impl Extraction {
    fn apply(
        &mut self,
        line_number: usize,
        outcome: std::result::Result<LocationRecord, Rejection>,
    ) {
        match outcome {
            Ok(record) => {
                self.stats.records_extracted += 1;
                self.records.push(record);
            }
            Err(rejection) => {
                debug!("Skipping tuple on line {}: {}", line_number, rejection);
                match rejection {
                    Rejection::ArityMismatch { .. } => self.stats.arity_mismatches += 1,
                    Rejection::InvalidCoordinate { .. } => self.stats.invalid_coordinates += 1,
                    Rejection::IndexOutOfRange { .. } => self.stats.index_out_of_range += 1,
                }
            }
        }
    }
}

/// Extracts location records from one dump file into one JSON document
#[derive(Debug)]
pub struct LocationExtractor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: ExtractConfig,
}

impl LocationExtractor {
    /// Create a new extractor
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Result<Self> {
        if !input_path.is_file() {
            return Err(ExtractError::InputNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            output_path,
            config: ExtractConfig::default(),
        })
    }

    /// Configure the extractor
    pub fn with_config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Main extraction entry point
    pub fn extract(&self) -> Result<ExtractionStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        info!(
            "Extracting locations from {} into {}",
            self.input_path.display(),
            self.output_path.display()
        );

        let file = File::open(&self.input_path)?;
        let progress = self.progress_bar(file.metadata()?.len());
        let reader = BufReader::new(progress.wrap_read(file));

        let mut extraction = extract_from_reader(reader, &self.config)?;
        progress.finish_and_clear();

        write_locations(&self.output_path, &extraction.records, self.config.pretty)?;

        extraction.stats.output_path = self.output_path.clone();
        extraction.stats.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Extracted {} records from {} tuple lines in {}ms",
            extraction.stats.records_extracted,
            extraction.stats.tuple_lines,
            extraction.stats.processing_time_ms
        );
        Ok(extraction.stats)
    }

    fn progress_bar(&self, total_bytes: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total_bytes);
        match ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars(PROGRESS_CHARS)),
            Err(e) => warn!("Invalid progress template: {}", e),
        }
        pb.set_message("reading dump");
        pb
    }
}

/// Run the tokenize and project pipeline over any line-oriented reader.
///
/// Nothing is written. The returned stats carry no output path or timing.
pub fn extract_from_reader<R: BufRead>(reader: R, config: &ExtractConfig) -> Result<Extraction> {
    let mut extraction = Extraction::default();

    for line in DumpLineReader::new(reader) {
        let line = line?;
        extraction.stats.lines_read += 1;
        if line.fallback {
            extraction.stats.fallback_decoded_lines += 1;
        }

        let Some(fields) = tokenize(&line.text) else {
            continue;
        };
        extraction.stats.tuple_lines += 1;

        let outcome = project(&fields, &config.schema);
        extraction.apply(line.number, outcome);
    }

    if extraction.stats.fallback_decoded_lines > 0 {
        warn!(
            "{} lines were not valid UTF-8 and were decoded as ISO-8859-1",
            extraction.stats.fallback_decoded_lines
        );
    }

    Ok(extraction)
}
