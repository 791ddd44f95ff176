//! Projection of tokenized tuples into location records.
//!
//! A tuple is projected only when it has exactly the configured arity and
//! both coordinate fields parse as finite numbers. Anything else yields a
//! [`Rejection`] that the caller counts and discards.

use crate::config::TupleSchema;
use crate::models::LocationRecord;
use thiserror::Error;

/// Why a tuple did not produce a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("expected {expected} fields, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("field index {index} out of range for {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{axis} is not a finite number: {value:?}")]
    InvalidCoordinate { axis: &'static str, value: String },
}

/// Project a field sequence into a location record
pub fn project(fields: &[String], schema: &TupleSchema) -> Result<LocationRecord, Rejection> {
    if fields.len() != schema.arity {
        return Err(Rejection::ArityMismatch {
            expected: schema.arity,
            found: fields.len(),
        });
    }

    let name = field_at(fields, schema.name_index)?;
    let category = field_at(fields, schema.type_index)?;
    let lat = parse_coordinate("lat", field_at(fields, schema.lat_index)?)?;
    let lng = parse_coordinate("lng", field_at(fields, schema.lng_index)?)?;

    Ok(LocationRecord {
        name: name.to_string(),
        lat,
        lng,
        category: category.to_string(),
    })
}

fn field_at(fields: &[String], index: usize) -> Result<&str, Rejection> {
    fields
        .get(index)
        .map(String::as_str)
        .ok_or(Rejection::IndexOutOfRange {
            index,
            len: fields.len(),
        })
}

fn parse_coordinate(axis: &'static str, value: &str) -> Result<f64, Rejection> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| Rejection::InvalidCoordinate {
            axis,
            value: value.to_string(),
        })
}
