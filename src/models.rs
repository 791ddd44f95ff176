//! Core data structures for dump extraction.
//!
//! Defines the projected location record and the statistics reported at
//! the end of a run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw fields of one value tuple, in column order
pub type FieldSequence = Vec<String>;

/// A location projected from one value tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub category: String,
}

/// Processing statistics
#[derive(Debug, Default, Clone)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub tuple_lines: usize,
    pub records_extracted: usize,
    pub arity_mismatches: usize,
    pub invalid_coordinates: usize,
    pub index_out_of_range: usize,
    pub fallback_decoded_lines: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ExtractionStats {
    /// Total number of tuple lines that did not produce a record
    pub fn tuples_rejected(&self) -> usize {
        self.arity_mismatches + self.invalid_coordinates + self.index_out_of_range
    }
}
