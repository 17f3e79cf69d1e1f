// Band and Key Computation
//
// Derived fields are filled on a report the caller hands over by value and
// gets back, so no caller ever sees a half-updated report. Without `force`
// populated fields are left alone; with `force` both band and key are
// recomputed.

use super::ReceptionReport;
use crate::bands::classify_band;
use crate::options::ReportOptions;

/// Set `band` from `freq_hz` when it is missing or empty, or when forced
pub fn ensure_band(mut report: ReceptionReport, opts: &ReportOptions) -> ReceptionReport {
    if report.band().is_none() || opts.force {
        let band = resolve_band(&report, opts);
        log::trace!("band for {} Hz -> {}", report.freq_hz, band);
        report.band = Some(band);
    }
    report
}

/// Identity string for a report: the `key_fields` values joined by `separator`.
///
/// The report's own band is used when set; otherwise it is computed for the
/// `band` component without touching the report. Separator characters inside
/// field values are not escaped.
pub fn build_key(report: &ReceptionReport, opts: &ReportOptions) -> String {
    let computed_band = match report.band() {
        Some(_) => None,
        None => Some(resolve_band(report, opts)),
    };

    opts.key_fields
        .iter()
        .map(|field| match (field.as_str(), &computed_band) {
            ("band", Some(band)) => band.clone(),
            (name, _) => report.field_text(name),
        })
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

/// Ensure the band, then set `opts.key_field` to [`build_key`] when it holds
/// no value, or when forced. A `key_field` naming a schema property
/// overwrites that property.
pub fn ensure_key(report: ReceptionReport, opts: &ReportOptions) -> ReceptionReport {
    let mut report = ensure_band(report, opts);
    if !report.is_field_set(&opts.key_field) || opts.force {
        let key = build_key(&report, opts);
        if !report.set_key_field(&opts.key_field, key) {
            log::warn!("Key field {:?} cannot hold a key, left unchanged", opts.key_field);
        }
    }
    report
}

fn resolve_band(report: &ReceptionReport, opts: &ReportOptions) -> String {
    classify_band(report.freq_hz, &opts.band_table, &opts.unknown_handler)
}
