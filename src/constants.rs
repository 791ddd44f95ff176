//! Application constants for the dump extractor
//!
//! Default paths, the positional layout of the source table, and console
//! templates used throughout the crate.

// =============================================================================
// Paths
// =============================================================================

/// Dump file read when no input path is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "dump.sql";

/// Output document written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "full_locations.json";

// =============================================================================
// Tuple Layout
// =============================================================================

/// Positional layout of the locations table in the dump
///
/// These indices describe the column order of the exported table. A dump
/// taken from a different schema version needs different values, which is
/// why they are only defaults for [`crate::config::TupleSchema`].
pub mod tuple_layout {
    /// Number of columns every value tuple must carry
    pub const ARITY: usize = 31;

    /// Column holding the location category
    pub const TYPE_INDEX: usize = 14;

    /// Column holding the display name
    pub const NAME_INDEX: usize = 15;

    /// Column holding the latitude in decimal degrees
    pub const LAT_INDEX: usize = 18;

    /// Column holding the longitude in decimal degrees
    pub const LNG_INDEX: usize = 19;
}

// =============================================================================
// Tuple Syntax
// =============================================================================

/// Opening delimiter of a value tuple line
pub const TUPLE_OPEN: char = '(';

/// Terminator of a tuple followed by further tuples
pub const TUPLE_CONTINUES: &str = "),";

/// Terminator of the last tuple of a statement
pub const TUPLE_ENDS: &str = ");";

/// SQL string literal delimiter
pub const QUOTE: char = '\'';

/// Escape character used inside string literals
pub const ESCAPE: char = '\\';

/// Separator between values in a tuple
pub const FIELD_SEPARATOR: char = ',';

// =============================================================================
// Console
// =============================================================================

/// Progress bar template for byte-based reading progress
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta}) {msg}";

/// Progress bar fill characters
pub const PROGRESS_CHARS: &str = "#>-";

/// Log target used for the default `EnvFilter` directive
pub const LOG_TARGET: &str = "dump_locations";
