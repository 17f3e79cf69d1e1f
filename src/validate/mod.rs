// Validators
// Compiled schema predicates for Reception Reports and Reception Report Lists
//
// A `Validator` is built once by the application and reused; compiled
// schemas are never mutated after construction.

pub mod filter;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::{Error, Result, ValidationError, Violation};
use crate::report::ReceptionReport;
use crate::schema::{SchemaDefs, SchemaDocument, RECEPTION_REPORT, RECEPTION_REPORT_LIST};

pub use filter::filter_valid;

pub const INVALID_REPORT: &str = "Invalid receptionReport";
pub const INVALID_REPORT_LIST: &str = "Invalid receptionReportList";

/// Anything that can judge a JSON value.
///
/// `Ok` with an empty list means the value is valid. `Err` is reserved for
/// failures of the predicate itself and is never treated as a verdict.
pub trait SchemaPredicate {
    fn violations(&self, data: &Value) -> Result<Vec<Violation>>;
}

impl<F> SchemaPredicate for F
where
    F: Fn(&Value) -> Result<Vec<Violation>>,
{
    fn violations(&self, data: &Value) -> Result<Vec<Violation>> {
        self(data)
    }
}

/// One compiled schema document
pub struct CompiledSchema {
    id: String,
    schema: JSONSchema,
}

impl CompiledSchema {
    /// Compile `doc`, registering `registry` so `$ref`s by identifier resolve
    pub fn compile(doc: &SchemaDocument, registry: &[&SchemaDocument]) -> Result<Self> {
        let id = doc.id.clone().unwrap_or_default();
        let mut options = JSONSchema::options();
        options.with_draft(Draft::Draft7);
        for registered in registry {
            if let Some(reg_id) = &registered.id {
                options.with_document(reg_id.clone(), registered.to_value()?);
            }
        }

        let value = doc.to_value()?;
        let schema = options.compile(&value).map_err(|e| Error::SchemaCompile {
            id: id.clone(),
            message: e.to_string(),
        })?;
        log::debug!("Compiled schema {}", id);
        Ok(Self { id, schema })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_valid(&self, data: &Value) -> bool {
        self.schema.is_valid(data)
    }
}

impl SchemaPredicate for CompiledSchema {
    fn violations(&self, data: &Value) -> Result<Vec<Violation>> {
        match self.schema.validate(data) {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.map(to_violation).collect()),
        }
    }
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema").field("id", &self.id).finish()
    }
}

fn to_violation(err: jsonschema::ValidationError<'_>) -> Violation {
    let schema_path = err.schema_path.to_string();
    let keyword = schema_path.rsplit('/').next().unwrap_or_default().to_string();
    Violation {
        keyword,
        instance_path: err.instance_path.to_string(),
        schema_path,
        message: err.to_string(),
    }
}

/// Fail with a `ValidationError` carrying `message` if `predicate` rejects `data`
pub fn check<P>(data: &Value, predicate: &P, message: &str) -> Result<()>
where
    P: SchemaPredicate + ?Sized,
{
    let violations = predicate.violations(data)?;
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(message, violations).into())
    }
}

/// Return `data` if it passes `predicate`.
/// With `enabled` false the data is returned unchecked.
pub fn validate_or_fail<P>(data: Value, predicate: &P, message: &str, enabled: bool) -> Result<Value>
where
    P: SchemaPredicate + ?Sized,
{
    if enabled {
        check(&data, predicate, message)?;
    }
    Ok(data)
}

#[derive(Debug)]
pub struct Validator {
    defs: SchemaDefs,
    report: CompiledSchema,
    report_list: CompiledSchema,
}

impl Validator {
    /// Compile the standard schema set
    pub fn new() -> Result<Self> {
        Self::with_defs(SchemaDefs::standard())
    }

    pub fn with_defs(defs: SchemaDefs) -> Result<Self> {
        let registry = defs.schema_list();
        let report = CompiledSchema::compile(required_doc(&defs, RECEPTION_REPORT)?, &registry)?;
        let report_list =
            CompiledSchema::compile(required_doc(&defs, RECEPTION_REPORT_LIST)?, &registry)?;
        log::info!("Validator ready ({} schemas registered)", registry.len());
        Ok(Self {
            defs,
            report,
            report_list,
        })
    }

    pub fn defs(&self) -> &SchemaDefs {
        &self.defs
    }

    pub fn report_schema(&self) -> &CompiledSchema {
        &self.report
    }

    pub fn report_list_schema(&self) -> &CompiledSchema {
        &self.report_list
    }

    /// Validate one Reception Report
    pub fn validate_report(&self, data: Value, enabled: bool) -> Result<Value> {
        validate_or_fail(data, &self.report, INVALID_REPORT, enabled)
    }

    /// Validate a Reception Report List
    pub fn validate_report_list(&self, data: Value, enabled: bool) -> Result<Value> {
        validate_or_fail(data, &self.report_list, INVALID_REPORT_LIST, enabled)
    }

    /// Validate, then deserialize into the typed report
    pub fn parse_report(&self, data: Value) -> Result<ReceptionReport> {
        let data = self.validate_report(data, true)?;
        Ok(ReceptionReport::from_value(data)?)
    }

    /// Only the reports that validate, in their original order
    pub fn filter_valid_reports(&self, reports: Vec<Value>) -> Result<Vec<Value>> {
        filter_valid(reports, &self.report_list, &self.report)
    }
}

fn required_doc<'a>(defs: &'a SchemaDefs, name: &str) -> Result<&'a SchemaDocument> {
    defs.get("reports", name).ok_or_else(|| Error::SchemaCompile {
        id: name.to_string(),
        message: "schema is not defined".to_string(),
    })
}
