// Amateur Radio Band Classification
// Reference: ARRL Band Plan, JS8Call dial frequencies
//
// Maps a frequency in Hz to a band label using a priority-ordered table of
// inclusive ranges. The first matching range wins, so narrow JS8 segments are
// listed before the whole-band ranges (suffixed with `!`) that contain them.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Returned by the default unknown-band handler
pub const UNKNOWN_BAND: &str = "??";

/// One inclusive frequency range and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandRange {
    #[serde(alias = "band")]
    pub label: Cow<'static, str>,
    pub hz_min: u64,
    pub hz_max: u64,
}

impl BandRange {
    pub const fn new(label: &'static str, hz_min: u64, hz_max: u64) -> Self {
        Self {
            label: Cow::Borrowed(label),
            hz_min,
            hz_max,
        }
    }

    pub fn contains(&self, freq_hz: u64) -> bool {
        (self.hz_min..=self.hz_max).contains(&freq_hz)
    }
}

/// Default band table, most precise ranges first
pub const DEFAULT_BAND_TABLE: &[BandRange] = &[
    BandRange::new("2200m", 135_700, 137_800),
    BandRange::new("600m", 472_000, 479_000),
    BandRange::new("160m", 1_842_000, 1_845_000),
    BandRange::new("160m!", 1_800_000, 2_000_000),
    BandRange::new("80m", 3_578_000, 3_581_000),
    BandRange::new("80m!", 3_500_000, 4_000_000),
    BandRange::new("60m", 5_060_000, 5_450_000),
    BandRange::new("40m", 7_078_000, 7_081_000),
    BandRange::new("40m!", 7_000_000, 7_300_000),
    BandRange::new("30m", 10_130_000, 10_133_000),
    BandRange::new("30m!", 10_100_000, 10_150_000),
    BandRange::new("20m", 14_078_000, 14_081_000),
    BandRange::new("20m!", 14_000_000, 14_350_000),
    BandRange::new("17m", 18_104_000, 18_107_000),
    BandRange::new("17m!", 18_068_000, 18_168_000),
    BandRange::new("15m", 21_078_000, 21_081_000),
    BandRange::new("15m!", 21_000_000, 21_450_000),
    BandRange::new("12m", 24_922_000, 24_925_000),
    BandRange::new("12m!", 24_890_000, 24_990_000),
    BandRange::new("11m", 26_960_000, 27_410_000),
    BandRange::new("10m", 28_078_000, 28_081_000),
    BandRange::new("10m!", 28_000_000, 29_700_000),
    BandRange::new("6m", 50_318_000, 50_321_000),
    BandRange::new("6m!", 50_000_000, 54_000_000),
    BandRange::new("2m", 144_178_000, 144_181_000),
    BandRange::new("2m!", 144_000_000, 148_000_000),
    BandRange::new("1.25m", 222_000_000, 225_000_000),
    BandRange::new("70cm", 420_000_000, 450_000_000),
];

/// Fallback invoked with the frequency when no range matches
#[derive(Clone)]
pub struct UnknownBandFn(Arc<dyn Fn(u64) -> String + Send + Sync>);

impl UnknownBandFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Always returns [`UNKNOWN_BAND`]
    pub fn sentinel() -> Self {
        Self::new(|_| UNKNOWN_BAND.to_string())
    }

    /// Coarse label from the whole-MHz part, e.g. 7_500_000 -> "7MHz"
    pub fn megahertz() -> Self {
        Self::new(|freq_hz| format!("{}MHz", freq_hz / 1_000_000))
    }

    pub fn call(&self, freq_hz: u64) -> String {
        (self.0)(freq_hz)
    }
}

impl Default for UnknownBandFn {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl fmt::Debug for UnknownBandFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnknownBandFn(..)")
    }
}

/// Label of the first range in `table` containing `freq_hz`,
/// or whatever `unknown` returns when none does
pub fn classify_band(freq_hz: u64, table: &[BandRange], unknown: &UnknownBandFn) -> String {
    match table.iter().find(|range| range.contains(freq_hz)) {
        Some(range) => range.label.to_string(),
        None => unknown.call(freq_hz),
    }
}

/// Classify against the default table with the `"??"` fallback
pub fn default_band(freq_hz: u64) -> String {
    classify_band(freq_hz, DEFAULT_BAND_TABLE, &UnknownBandFn::sentinel())
}
