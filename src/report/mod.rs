// Reception Report
// One station hearing another: who, where, on what frequency, how well.
//
// Fields the schema names are typed. Anything else a producer sends (the
// derived key among them) is carried in `extra` so it survives a round trip.

pub mod key;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use key::{build_key, ensure_band, ensure_key};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceptionReport {
    /// ISO-8601 UTC, `YYYY-MM-DDTHH:MM:SSZ`
    pub timestamp: String,
    /// Receiver frequency in Hz
    pub freq_hz: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<String>,
    /// Signal to noise ratio in dB; the field is always present, the value may be null
    #[serde(rename = "sNR")]
    pub snr: Option<i64>,
    pub rx_call: String,
    pub rx_grid: String,
    pub tx_call: String,
    pub tx_grid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_type: Option<String>,
    /// Opaque source-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReceptionReport {
    /// Band if set and non-empty
    pub fn band(&self) -> Option<&str> {
        self.band.as_deref().filter(|b| !b.is_empty())
    }

    /// Value of a field as it appears in a key component.
    /// Strings verbatim, numbers in decimal, absent or null as "",
    /// objects and arrays as compact JSON.
    pub fn field_text(&self, name: &str) -> String {
        match name {
            "timestamp" => self.timestamp.clone(),
            "freqHz" => self.freq_hz.to_string(),
            "band" => self.band.clone().unwrap_or_default(),
            "sNR" => self.snr.map(|s| s.to_string()).unwrap_or_default(),
            "rxCall" => self.rx_call.clone(),
            "rxGrid" => self.rx_grid.clone(),
            "txCall" => self.tx_call.clone(),
            "txGrid" => self.tx_grid.clone(),
            "reportedBy" => self.reported_by.clone().unwrap_or_default(),
            "srcType" => self.src_type.clone().unwrap_or_default(),
            "srcData" => self.src_data.as_ref().map(value_text).unwrap_or_default(),
            other => self.extra.get(other).map(value_text).unwrap_or_default(),
        }
    }

    /// A non-schema field such as the derived key, if set and non-empty
    pub fn extra_str(&self, name: &str) -> Option<&str> {
        self.extra
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// True when the field holds a value: not absent, null, "", false or 0
    pub fn is_field_set(&self, name: &str) -> bool {
        let text_set = |s: &str| !s.is_empty();
        match name {
            "timestamp" => text_set(&self.timestamp),
            "freqHz" => self.freq_hz != 0,
            "band" => self.band().is_some(),
            "sNR" => self.snr.is_some_and(|s| s != 0),
            "rxCall" => text_set(&self.rx_call),
            "rxGrid" => text_set(&self.rx_grid),
            "txCall" => text_set(&self.tx_call),
            "txGrid" => text_set(&self.tx_grid),
            "reportedBy" => self.reported_by.as_deref().is_some_and(text_set),
            "srcType" => self.src_type.as_deref().is_some_and(text_set),
            "srcData" => self.src_data.as_ref().is_some_and(value_is_set),
            other => self.extra.get(other).is_some_and(value_is_set),
        }
    }

    /// Store a key string under `name`. Schema properties are overwritten in
    /// place; `freqHz` and `sNR` cannot hold a string and return false.
    pub fn set_key_field(&mut self, name: &str, key: String) -> bool {
        match name {
            "freqHz" | "sNR" => return false,
            "timestamp" => self.timestamp = key,
            "band" => self.band = Some(key),
            "rxCall" => self.rx_call = key,
            "rxGrid" => self.rx_grid = key,
            "txCall" => self.tx_call = key,
            "txGrid" => self.tx_grid = key,
            "reportedBy" => self.reported_by = Some(key),
            "srcType" => self.src_type = Some(key),
            "srcData" => self.src_data = Some(Value::String(key)),
            other => {
                self.extra.insert(other.to_string(), Value::String(key));
            }
        }
        true
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

fn value_is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
