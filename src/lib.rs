//! SQL Dump Location Extractor
//!
//! Pulls location records out of the value tuples of a SQL dump and
//! writes them as a single JSON document.
//!
//! This library provides tools for:
//! - Reading dump lines with a UTF-8 to ISO-8859-1 decoding fallback
//! - Splitting value tuples into fields with quote and escape tracking
//! - Projecting fixed field positions into typed location records
//! - Writing the result set atomically as JSON

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;
pub mod projector;
pub mod source;
pub mod tokenizer;
pub mod writer;

pub use config::{ExtractConfig, TupleSchema};
pub use error::{ExtractError, Result};
pub use extractor::{Extraction, LocationExtractor, extract_from_reader};
pub use models::{ExtractionStats, FieldSequence, LocationRecord};
pub use projector::{Rejection, project};
pub use tokenizer::tokenize;
