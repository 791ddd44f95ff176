//! Value tuple tokenizer.
//!
//! Recognises lines of a dump that hold a single value tuple such as
//! `(12,'Lyon, FR','it\'s',45.76),` and splits them into raw fields.
//! Splitting is a single left-to-right pass tracking two flags: whether
//! the scanner is inside a single-quoted literal and whether the previous
//! character was an unconsumed backslash. Quote state only changes on an
//! unescaped quote, and escape state lasts for exactly one character.
//!
//! Fields are returned with surrounding whitespace and one pair of SQL
//! string delimiters removed. Escape sequences are left untouched.

use crate::constants::{
    ESCAPE, FIELD_SEPARATOR, QUOTE, TUPLE_CONTINUES, TUPLE_ENDS, TUPLE_OPEN,
};
use crate::models::FieldSequence;

/// Split a dump line into its tuple fields.
///
/// Returns `None` when the line is not shaped like a value tuple. That is
/// the common case for comments, statement headers and blank lines, and
/// is not an error.
pub fn tokenize(line: &str) -> Option<FieldSequence> {
    tuple_interior(line).map(split_fields)
}

/// Whether the trimmed line starts with `(` and ends with `),` or `);`
pub fn is_tuple_candidate(line: &str) -> bool {
    tuple_interior(line).is_some()
}

/// Text between the opening `(` and the two-character terminator
fn tuple_interior(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(TUPLE_OPEN) {
        return None;
    }
    if !(trimmed.ends_with(TUPLE_CONTINUES) || trimmed.ends_with(TUPLE_ENDS)) {
        return None;
    }

    // Both delimiters are ASCII and cannot overlap: the shortest match is "(),".
    Some(&trimmed[TUPLE_OPEN.len_utf8()..trimmed.len() - TUPLE_ENDS.len()])
}

/// Split a tuple interior on top-level commas.
///
/// Always yields one more field than there are commas outside quotes.
pub fn split_fields(interior: &str) -> FieldSequence {
    let mut scanner = FieldScanner::new();
    for c in interior.chars() {
        scanner.push(c);
    }
    scanner.finish()
}

/// Two-flag state machine behind [`split_fields`]
struct FieldScanner {
    fields: FieldSequence,
    current: String,
    in_quotes: bool,
    escaped: bool,
}

impl FieldScanner {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            current: String::new(),
            in_quotes: false,
            escaped: false,
        }
    }

    fn push(&mut self, c: char) {
        if c == ESCAPE && !self.escaped {
            self.escaped = true;
            self.current.push(c);
            return;
        }

        if c == QUOTE && !self.escaped {
            self.in_quotes = !self.in_quotes;
        }

        if c == FIELD_SEPARATOR && !self.in_quotes {
            self.fields.push(finalize_field(&self.current));
            self.current.clear();
        } else {
            self.current.push(c);
        }

        self.escaped = false;
    }

    fn finish(mut self) -> FieldSequence {
        self.fields.push(finalize_field(&self.current));
        self.fields
    }
}

/// Trim whitespace, then drop at most one leading and one trailing quote
fn finalize_field(raw: &str) -> String {
    let field = raw.trim();
    let field = field.strip_prefix(QUOTE).unwrap_or(field);
    let field = field.strip_suffix(QUOTE).unwrap_or(field);
    field.to_string()
}
