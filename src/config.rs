//! Configuration management and validation.
//!
//! Provides the positional layout of the dumped table and the settings
//! for a single extraction run.

use crate::constants::tuple_layout;
use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Positional layout of a value tuple in the source table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupleSchema {
    /// Exact number of fields a tuple must have to be projected
    pub arity: usize,

    /// Field holding the location name
    pub name_index: usize,

    /// Field holding the location category
    pub type_index: usize,

    /// Field holding the latitude
    pub lat_index: usize,

    /// Field holding the longitude
    pub lng_index: usize,
}

impl Default for TupleSchema {
    fn default() -> Self {
        Self {
            arity: tuple_layout::ARITY,
            name_index: tuple_layout::NAME_INDEX,
            type_index: tuple_layout::TYPE_INDEX,
            lat_index: tuple_layout::LAT_INDEX,
            lng_index: tuple_layout::LNG_INDEX,
        }
    }
}

impl TupleSchema {
    /// Named indices, in the order they are checked
    pub fn indices(&self) -> [(&'static str, usize); 4] {
        [
            ("name", self.name_index),
            ("type", self.type_index),
            ("lat", self.lat_index),
            ("lng", self.lng_index),
        ]
    }

    /// Ensure every designated index lies inside the tuple
    pub fn validate(&self) -> Result<()> {
        if self.arity == 0 {
            return Err(ExtractError::configuration("arity must be at least 1"));
        }

        for (label, index) in self.indices() {
            if index >= self.arity {
                return Err(ExtractError::configuration(format!(
                    "{} index {} is outside a tuple of {} fields",
                    label, index, self.arity
                )));
            }
        }

        if self.lat_index == self.lng_index {
            return Err(ExtractError::configuration(format!(
                "lat and lng share index {}",
                self.lat_index
            )));
        }

        debug!("Tuple schema validated: {:?}", self);
        Ok(())
    }
}

/// Settings for one extraction run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Layout used to project tuples into records
    pub schema: TupleSchema,

    /// Pretty-print the output document
    pub pretty: bool,

    /// Show a byte progress bar while reading the dump
    pub show_progress: bool,
}

impl ExtractConfig {
    /// Use a custom tuple layout
    pub fn with_schema(mut self, schema: TupleSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Enable pretty-printed output
    pub fn with_pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Enable the reading progress bar
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.schema.validate()
    }
}
