// Schema Definitions
// Reception Report schemas and supporting general-purpose schemas
//
// Documents are grouped by namespace (`general`, `reports`). Identifiers are
// stable across versions: receptionReportList refers to receptionReport by
// `$id`, never by inlining it.

pub mod document;
pub mod patterns;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
pub use document::{JsonType, SchemaDocument, TypeSpec};

pub const SCHEMA_ID_PREFIX: &str = "http://schemas.js8path.net/js8path/data";
pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

pub const RECEPTION_REPORT: &str = "receptionReport";
pub const RECEPTION_REPORT_LIST: &str = "receptionReportList";

/// Fields every accepted Reception Report must carry (sNR may be null)
pub const REQUIRED_REPORT_FIELDS: &[&str] = &[
    "timestamp", "freqHz", "sNR",
    "rxCall", "rxGrid",
    "txCall", "txGrid",
];

/// Build the `$id` for a document in a namespace
pub fn schema_id(namespace: &str, name: &str) -> String {
    format!("{}/{}/{}.json", SCHEMA_ID_PREFIX, namespace, name)
}

/// The full definition tree, keyed by namespace then schema name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefs {
    pub general: BTreeMap<String, SchemaDocument>,
    pub reports: BTreeMap<String, SchemaDocument>,
}

impl Default for SchemaDefs {
    fn default() -> Self {
        Self::standard()
    }
}

impl SchemaDefs {
    /// The published js8path-data schema set
    pub fn standard() -> Self {
        let mut general = BTreeMap::new();
        general.insert(
            "positiveIntegerString".to_string(),
            top_level(
                "general",
                "positiveIntegerString",
                "Positive Integer String",
                "A positive integer string",
                JsonType::String,
            )
            .with_pattern(patterns::POSITIVE_INTEGER_STRING),
        );
        general.insert(
            "integerString".to_string(),
            top_level(
                "general",
                "integerString",
                "Integer String",
                "An integer string",
                JsonType::String,
            )
            .with_pattern(patterns::INTEGER_STRING),
        );

        let mut reports = BTreeMap::new();
        let mut list = top_level(
            "reports",
            RECEPTION_REPORT_LIST,
            "Reception Report List",
            "List of Reception Reports",
            JsonType::Array,
        );
        list.items = Some(Box::new(SchemaDocument::ref_to(&schema_id(
            "reports",
            RECEPTION_REPORT,
        ))));
        reports.insert(RECEPTION_REPORT_LIST.to_string(), list);
        reports.insert(RECEPTION_REPORT.to_string(), reception_report());

        Self { general, reports }
    }

    /// Look up a document by namespace and name
    pub fn get(&self, namespace: &str, name: &str) -> Option<&SchemaDocument> {
        match namespace {
            "general" => self.general.get(name),
            "reports" => self.reports.get(name),
            _ => None,
        }
    }

    pub fn reception_report(&self) -> Option<&SchemaDocument> {
        self.reports.get(RECEPTION_REPORT)
    }

    pub fn reception_report_list(&self) -> Option<&SchemaDocument> {
        self.reports.get(RECEPTION_REPORT_LIST)
    }

    /// Flat list of every document declaring a top-level identifier,
    /// used to register them all with the schema engine
    pub fn schema_list(&self) -> Vec<&SchemaDocument> {
        self.general
            .values()
            .chain(self.reports.values())
            .filter(|doc| doc.is_top_level())
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the definition tree as pretty JSON for external distribution
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        log::info!("Wrote schema definitions to {}", path.display());
        Ok(())
    }
}

fn top_level(
    namespace: &str,
    name: &str,
    title: &str,
    description: &str,
    kind: JsonType,
) -> SchemaDocument {
    SchemaDocument {
        schema: Some(JSON_SCHEMA_DRAFT.to_string()),
        id: Some(schema_id(namespace, name)),
        ..SchemaDocument::property(title, description, kind)
    }
}

fn reception_report() -> SchemaDocument {
    use JsonType::{Array, Integer, Null, Object, String as Str};

    let props: Vec<(&str, SchemaDocument)> = vec![
        (
            "timestamp",
            SchemaDocument::property("report timestamp", "ISO-8601 timestamp of report", Str)
                .with_pattern(patterns::ISO_UTC_TIMESTAMP),
        ),
        (
            "freqHz",
            SchemaDocument::property(
                "Frequency (Hz)",
                "The frequency of the receiver in Hertz",
                Integer,
            )
            .with_minimum(0),
        ),
        (
            "band",
            SchemaDocument::property("Band", "The name of the amateur radio band", Str),
        ),
        (
            "sNR",
            SchemaDocument::property(
                "sNR",
                "Signal to Noise ratio in decibels, if reported",
                TypeSpec::AnyOf(vec![Integer, Null]),
            ),
        ),
        (
            "rxCall",
            SchemaDocument::property("Receiver Callsign", "The callsign of the receiver", Str)
                .with_pattern(patterns::CALLSIGN),
        ),
        (
            "rxGrid",
            SchemaDocument::property(
                "Receiver Grid",
                "The maidenhead locator of the receiver",
                Str,
            )
            .with_pattern(patterns::MAIDENHEAD),
        ),
        (
            "txCall",
            SchemaDocument::property("Sender Callsign", "The callsign of the sender", Str)
                .with_pattern(patterns::CALLSIGN),
        ),
        (
            "txGrid",
            SchemaDocument::property("Sender Grid", "The maidenhead locator of the sender", Str)
                .with_pattern(patterns::MAIDENHEAD),
        ),
        (
            "reportedBy",
            SchemaDocument::property(
                "Reported By",
                "The call (or other identifier) for who created the reception report",
                TypeSpec::AnyOf(vec![Str, Null]),
            ),
        ),
        (
            "srcType",
            SchemaDocument::property(
                "Data Source Type",
                "Code for the source of the data",
                TypeSpec::AnyOf(vec![Str, Null]),
            ),
        ),
        (
            "srcData",
            SchemaDocument::property(
                "Source Data",
                "Raw source dataCode for the source of the data",
                TypeSpec::AnyOf(vec![Object, Array, Str, Null]),
            ),
        ),
    ];

    let mut doc = top_level(
        "reports",
        RECEPTION_REPORT,
        "Reception Report",
        "Data about one reception report from the query results",
        Object,
    );
    doc.properties = Some(
        props
            .into_iter()
            .map(|(name, prop)| (name.to_string(), prop))
            .collect(),
    );
    doc.required = Some(REQUIRED_REPORT_FIELDS.iter().map(|f| f.to_string()).collect());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_list_contains_all_top_level_documents() {
        let defs = SchemaDefs::standard();
        let ids: Vec<&str> = defs
            .schema_list()
            .iter()
            .filter_map(|d| d.id.as_deref())
            .collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.contains(&"http://schemas.js8path.net/js8path/data/reports/receptionReport.json"));
        assert!(ids.contains(&"http://schemas.js8path.net/js8path/data/general/integerString.json"));
    }

    #[test]
    fn test_list_refers_to_report_by_id() {
        let defs = SchemaDefs::standard();
        let list = defs.reception_report_list().unwrap();
        let items = list.items.as_ref().unwrap();
        assert_eq!(items.reference.as_deref(), defs.reception_report().unwrap().id.as_deref());
        assert!(items.properties.is_none());
    }

    #[test]
    fn test_required_fields() {
        let defs = SchemaDefs::standard();
        let report = defs.reception_report().unwrap();
        let required = report.required.as_ref().unwrap();
        assert_eq!(required.len(), 7);
        assert!(required.iter().any(|f| f == "sNR"));
        assert!(!required.iter().any(|f| f == "band"));
    }

    #[test]
    fn test_export_namespaces() {
        let value = serde_json::to_value(SchemaDefs::standard()).unwrap();
        let top: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(top, vec!["general", "reports"]);
        let report = &value["reports"]["receptionReport"];
        assert_eq!(report["$schema"], JSON_SCHEMA_DRAFT);
        assert_eq!(report["type"], "object");
        assert_eq!(report["properties"]["sNR"]["type"], serde_json::json!(["integer", "null"]));
        assert_eq!(report["properties"]["freqHz"]["minimum"], 0);
        assert_eq!(
            value["reports"]["receptionReportList"]["items"]["$ref"],
            "http://schemas.js8path.net/js8path/data/reports/receptionReport.json"
        );
    }

    #[test]
    fn test_json_round_trip_keeps_keywords() {
        let defs = SchemaDefs::standard();
        let json = defs.to_json_pretty().unwrap();
        let back = SchemaDefs::from_json(&json).unwrap();
        assert_eq!(back, defs);
        for (orig, parsed) in defs.schema_list().iter().zip(back.schema_list()) {
            assert_eq!(orig.id, parsed.id);
            assert_eq!(orig.kind, parsed.kind);
            assert_eq!(orig.pattern, parsed.pattern);
            assert_eq!(orig.required, parsed.required);
        }
    }
}
