//! Options for band and key computation
//!
//! [`ReportOptions`] is what the computation functions take. [`ReportConfig`]
//! is its serializable mirror, for loading options from a JSON file; every
//! field has a default so a config only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bands::{BandRange, UnknownBandFn, DEFAULT_BAND_TABLE};
use crate::error::{Error, Result};

pub const DEFAULT_KEY_FIELD: &str = "_key";
pub const DEFAULT_KEY_SEPARATOR: &str = "|";
/// Schema properties whose type cannot carry a key string
pub const NON_STRING_FIELDS: &[&str] = &["freqHz", "sNR"];

pub const DEFAULT_KEY_FIELDS: &[&str] = &[
    "timestamp",
    "band",
    "rxCall",
    "txCall",
    "rxGrid",
    "txGrid",
    "reportedBy",
    "srcType",
];

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Recompute band and key even when already populated (default false)
    pub force: bool,
    /// Ordered band ranges, first match wins (default [`DEFAULT_BAND_TABLE`])
    pub band_table: Vec<BandRange>,
    /// Called when no range matches (default returns `"??"`)
    pub unknown_handler: UnknownBandFn,
    /// Field the key is stored under (default `_key`). A schema property
    /// name overwrites that property; `freqHz` and `sNR` cannot hold a key.
    pub key_field: String,
    /// Fields forming the key, in order (default [`DEFAULT_KEY_FIELDS`])
    pub key_fields: Vec<String>,
    /// Joins key components (default `|`)
    pub separator: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            force: false,
            band_table: DEFAULT_BAND_TABLE.to_vec(),
            unknown_handler: UnknownBandFn::sentinel(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            key_fields: DEFAULT_KEY_FIELDS.iter().map(|f| f.to_string()).collect(),
            separator: DEFAULT_KEY_SEPARATOR.to_string(),
        }
    }
}

impl ReportOptions {
    /// Defaults with `force` set
    pub fn forced() -> Self {
        Self {
            force: true,
            ..Default::default()
        }
    }
}

/// How to label frequencies outside every band range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownBandPolicy {
    /// `"??"`
    #[default]
    Sentinel,
    /// Whole MHz, e.g. `"19MHz"`
    Megahertz,
}

impl UnknownBandPolicy {
    pub fn handler(self) -> UnknownBandFn {
        match self {
            UnknownBandPolicy::Sentinel => UnknownBandFn::sentinel(),
            UnknownBandPolicy::Megahertz => UnknownBandFn::megahertz(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub force: bool,
    pub band_table: Vec<BandRange>,
    pub unknown_band: UnknownBandPolicy,
    pub key_field: String,
    pub key_fields: Vec<String>,
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let opts = ReportOptions::default();
        Self {
            force: opts.force,
            band_table: opts.band_table,
            unknown_band: UnknownBandPolicy::default(),
            key_field: opts.key_field,
            key_fields: opts.key_fields,
            separator: opts.separator,
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if NON_STRING_FIELDS.contains(&config.key_field.as_str()) {
            return Err(Error::Config(format!(
                "keyField {:?} cannot hold a key string",
                config.key_field
            )));
        }
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!(
            "Loaded report config from {} ({} band ranges, key fields {:?})",
            path.display(),
            config.band_table.len(),
            config.key_fields
        );
        Ok(config)
    }

    pub fn into_options(self) -> ReportOptions {
        ReportOptions {
            force: self.force,
            band_table: self.band_table,
            unknown_handler: self.unknown_band.handler(),
            key_field: self.key_field,
            key_fields: self.key_fields,
            separator: self.separator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ReportOptions::default();
        assert!(!opts.force);
        assert_eq!(opts.key_field, "_key");
        assert_eq!(opts.separator, "|");
        assert_eq!(opts.key_fields.len(), 8);
        assert_eq!(opts.band_table.len(), DEFAULT_BAND_TABLE.len());
        assert_eq!(opts.unknown_handler.call(1), "??");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = ReportConfig::from_json("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ReportConfig::from_json(
            r#"{
                "force": true,
                "separator": ";",
                "unknownBand": "megahertz",
                "bandTable": [{"band": "0m", "hzMin": 0, "hzMax": 10}]
            }"#,
        )
        .unwrap();
        let opts = config.into_options();
        assert!(opts.force);
        assert_eq!(opts.separator, ";");
        assert_eq!(opts.key_field, "_key");
        assert_eq!(opts.band_table, vec![BandRange::new("0m", 0, 10)]);
        assert_eq!(opts.unknown_handler.call(7_078_000), "7MHz");
    }

    #[test]
    fn test_unknown_config_field_ignored() {
        assert!(ReportConfig::from_json(r#"{"colour": "blue"}"#).is_ok());
    }

    #[test]
    fn test_non_string_key_field_rejected() {
        let err = ReportConfig::from_json(r#"{"keyField": "freqHz"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(ReportConfig::from_json(r#"{"keyField": "band"}"#).is_ok());
    }
}
