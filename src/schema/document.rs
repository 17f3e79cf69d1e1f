// Schema Document
// Typed form of the JSON-Schema subset used by the report schemas.
// Serializes to the exact keyword set the schema engine consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// JSON-Schema primitive type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

/// The `type` keyword: a single type or a list of alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    One(JsonType),
    AnyOf(Vec<JsonType>),
}

impl From<JsonType> for TypeSpec {
    fn from(t: JsonType) -> Self {
        TypeSpec::One(t)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaDocument>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaDocument>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Keywords not modeled above, e.g. `additionalProperties` or `format`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SchemaDocument {
    /// A titled property with a type
    pub fn property(title: &str, description: &str, kind: impl Into<TypeSpec>) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// A `$ref` to another document by identifier
    pub fn ref_to(id: &str) -> Self {
        Self {
            reference: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// True for top-level documents that can be registered by identifier
    pub fn is_top_level(&self) -> bool {
        self.schema.is_some() && self.id.is_some()
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_spec_serialization() {
        let one = serde_json::to_value(TypeSpec::One(JsonType::String)).unwrap();
        assert_eq!(one, json!("string"));

        let many =
            serde_json::to_value(TypeSpec::AnyOf(vec![JsonType::Integer, JsonType::Null])).unwrap();
        assert_eq!(many, json!(["integer", "null"]));
    }

    #[test]
    fn test_keywords_renamed() {
        let doc = SchemaDocument::ref_to("http://example.com/a.json");
        assert_eq!(doc.to_value().unwrap(), json!({"$ref": "http://example.com/a.json"}));

        let prop = SchemaDocument::property("Freq", "Hz", JsonType::Integer).with_minimum(0);
        assert_eq!(
            prop.to_value().unwrap(),
            json!({"title": "Freq", "description": "Hz", "type": "integer", "minimum": 0})
        );
    }

    #[test]
    fn test_unmodeled_keywords_kept() {
        let raw = json!({
            "$id": "http://example.com/custom.json",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "when": { "type": "string", "format": "date-time" }
            }
        });
        let doc: SchemaDocument = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.extra.get("additionalProperties"), Some(&json!(false)));
        assert_eq!(doc.to_value().unwrap(), raw);
    }
}
