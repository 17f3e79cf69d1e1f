// js8path-data Library
// Reception report schemas, band classification, keying and validation

pub mod bands;
pub mod error;
pub mod options;
pub mod report;
pub mod schema;
pub mod time_utils;
pub mod validate;

#[cfg(test)]
mod fixtures;

pub use bands::{classify_band, BandRange, UnknownBandFn, DEFAULT_BAND_TABLE, UNKNOWN_BAND};
pub use error::{Error, Result, ValidationError, Violation};
pub use options::{ReportConfig, ReportOptions, UnknownBandPolicy};
pub use report::{build_key, ensure_band, ensure_key, ReceptionReport};
pub use schema::{patterns::STRING_PATTERNS, SchemaDefs, SchemaDocument};
pub use validate::{filter_valid, validate_or_fail, SchemaPredicate, Validator};
