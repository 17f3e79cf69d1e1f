// String Patterns
// Regular-expression sources used by the schema documents
//
// NOTE: MAIDENHEAD is known to be approximate and CALLSIGN deliberately
// matches anything. PSKReporter data carries callsigns and locators that a
// strict pattern would reject, so these stay permissive.

pub const POSITIVE_INTEGER_STRING: &str = r"^[1-9]\d*$";
pub const POSITIVE_INTEGER_RANGE_STRING: &str = r"^[1-9]\d*]\-[1-9]\d*$";
pub const INTEGER_STRING: &str = r"^-?[1-9]\d*$";
pub const ISO_UTC_TIMESTAMP: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$";
pub const MAIDENHEAD: &str = r"^^[a-rA-R]{2}[0-9]{2}([a-xA-X]{2}([0-9]{2})?)*$$";
pub const CALLSIGN: &str = r"^.*$";
pub const EMAIL_ADDRESS: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

/// All named patterns, in declaration order
pub const STRING_PATTERNS: &[(&str, &str)] = &[
    ("positiveIntegerString", POSITIVE_INTEGER_STRING),
    ("positiveIntegerRangeString", POSITIVE_INTEGER_RANGE_STRING),
    ("integerString", INTEGER_STRING),
    ("isoUtcTimestamp", ISO_UTC_TIMESTAMP),
    ("maidenhead", MAIDENHEAD),
    ("callsign", CALLSIGN),
    ("emailAddress", EMAIL_ADDRESS),
];

/// Look up a pattern source by name
pub fn pattern(name: &str) -> Option<&'static str> {
    STRING_PATTERNS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(pattern("callsign"), Some("^.*$"));
        assert_eq!(pattern("isoUtcTimestamp"), Some(ISO_UTC_TIMESTAMP));
        assert_eq!(pattern("nope"), None);
    }

    #[test]
    fn test_pattern_names_unique() {
        for (i, (a, _)) in STRING_PATTERNS.iter().enumerate() {
            for (b, _) in &STRING_PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
