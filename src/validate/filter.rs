// Batch Filter
// Keep only the reports that validate
//
// The whole list is checked first. Only when that fails with a validation
// error are items checked one at a time, strictly in list order. Any other
// error is returned as-is.

use serde_json::Value;

use super::{check, SchemaPredicate, INVALID_REPORT, INVALID_REPORT_LIST};
use crate::error::{Error, Result};

/// Reports from `reports` that pass `item`, in original order.
/// `list` is tried first so a fully valid batch costs one check.
pub fn filter_valid<L, I>(reports: Vec<Value>, list: &L, item: &I) -> Result<Vec<Value>>
where
    L: SchemaPredicate + ?Sized,
    I: SchemaPredicate + ?Sized,
{
    let batch = Value::Array(reports);
    match check(&batch, list, INVALID_REPORT_LIST) {
        Ok(()) => return Ok(into_items(batch)),
        Err(Error::Validation(e)) => {
            log::debug!(
                "Report list failed validation ({} violations), checking reports one by one",
                e.violations.len()
            );
        }
        Err(e) => return Err(e),
    }

    let reports = into_items(batch);
    let total = reports.len();
    let mut valid = Vec::with_capacity(total);
    for (index, report) in reports.into_iter().enumerate() {
        match check(&report, item, INVALID_REPORT) {
            Ok(()) => valid.push(report),
            Err(Error::Validation(e)) => {
                let first = e.violations.first();
                log::debug!(
                    "Dropping report {}: {} at {:?}",
                    index,
                    first.map(|v| v.keyword.as_str()).unwrap_or("?"),
                    first.map(|v| v.instance_path.as_str()).unwrap_or("")
                );
            }
            Err(e) => return Err(e),
        }
    }

    if valid.len() < total {
        log::info!("Filtered report list: kept {} of {}", valid.len(), total);
    }
    Ok(valid)
}

fn into_items(batch: Value) -> Vec<Value> {
    match batch {
        Value::Array(items) => items,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use crate::fixtures;
    use crate::validate::Validator;
    use serde_json::json;

    #[test]
    fn test_all_valid_passes_through() {
        let validator = Validator::new().unwrap();
        let reports = fixtures::example_reports();
        let filtered = validator.filter_valid_reports(reports.clone()).unwrap();
        assert_eq!(filtered, reports);
    }

    #[test]
    fn test_invalid_reports_dropped_in_order() {
        let validator = Validator::new().unwrap();
        let valid = fixtures::example_reports();
        let mut reports = valid.clone();
        reports.insert(1, json!(123));
        reports.push(json!("abc"));
        let filtered = validator.filter_valid_reports(reports).unwrap();
        assert_eq!(filtered, valid);
    }

    #[test]
    fn test_no_dedup() {
        let validator = Validator::new().unwrap();
        let report = fixtures::example_reports()[0].clone();
        let reports = vec![report.clone(), json!(null), report.clone()];
        let filtered = validator.filter_valid_reports(reports).unwrap();
        assert_eq!(filtered, vec![report.clone(), report]);
    }

    #[test]
    fn test_empty_list() {
        let validator = Validator::new().unwrap();
        assert!(validator.filter_valid_reports(vec![]).unwrap().is_empty());
    }

    fn reject_all(_: &Value) -> Result<Vec<Violation>> {
        Ok(vec![Violation {
            keyword: "type".to_string(),
            instance_path: String::new(),
            schema_path: "/type".to_string(),
            message: "nope".to_string(),
        }])
    }

    fn broken(_: &Value) -> Result<Vec<Violation>> {
        Err(Error::Internal("engine failure".to_string()))
    }

    #[test]
    fn test_list_level_error_propagates() {
        let validator = Validator::new().unwrap();
        let err = filter_valid(fixtures::example_reports(), &broken, validator.report_schema())
            .unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn test_item_level_error_propagates() {
        let err = filter_valid(fixtures::example_reports(), &reject_all, &broken).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn test_items_checked_in_order() {
        let seen = std::cell::RefCell::new(Vec::new());
        let record = |v: &Value| -> Result<Vec<Violation>> {
            seen.borrow_mut().push(v.clone());
            if v.is_number() { reject_all(v) } else { Ok(vec![]) }
        };
        let reports = vec![json!("a"), json!(1), json!("b"), json!(2), json!("c")];
        let filtered = filter_valid(reports.clone(), &reject_all, &record).unwrap();
        assert_eq!(*seen.borrow(), reports);
        assert_eq!(filtered, vec![json!("a"), json!("b"), json!("c")]);
    }
}
