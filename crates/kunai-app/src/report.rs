//! Text and JSON rendering of table queries.

use kunai_core::config::ValidationConfig;
use kunai_rfc::rfc::ical::kind::{
    CompatibilityEntry, PropertyKind, ResolvedValueKind, entries, needs_value_param,
    resolve_value_kind,
};
use kunai_rfc::rfc::ical::{ContentLine, Parameter};
use serde::Serialize;

/// Result of checking one property/value pairing.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub property: PropertyKind,
    /// Property name as given (uppercased).
    pub name: String,
    /// Value type as given, if any.
    pub requested: Option<String>,
    pub valid: bool,
    pub resolved: Option<ResolvedValueKind>,
    pub error: Option<String>,
}

/// Resolves `value` for `property` the way a parser would.
#[must_use]
pub fn check(property: &str, value: Option<&str>, policy: ValidationConfig) -> CheckOutcome {
    let params = value
        .map(|v| vec![Parameter::new("VALUE", v)])
        .unwrap_or_default();
    let line = ContentLine::with_params(property, params, "");

    let mut outcome = CheckOutcome {
        property: line.property_kind(),
        name: line.name.clone(),
        requested: value.map(str::to_string),
        valid: false,
        resolved: None,
        error: None,
    };

    match resolve_value_kind(&line, policy) {
        Ok(resolved) => {
            // A lenient fallback resolves, but the requested type was still illegal.
            outcome.valid = value.is_none() || resolved.explicit;
            outcome.resolved = Some(resolved);
        }
        Err(e) => outcome.error = Some(e.to_string()),
    }

    outcome
}

#[must_use]
pub fn render_check(outcome: &CheckOutcome) -> String {
    let name = &outcome.name;

    let Some(resolved) = outcome.resolved else {
        let error = outcome.error.as_deref().unwrap_or("rejected");
        return format!("{name}: {error}");
    };

    let mut out = match (&outcome.requested, outcome.valid) {
        (None, _) => format!("{name}: defaults to {}", resolved.value),
        (Some(requested), true) => {
            if needs_value_param(resolved.property, resolved.value) {
                format!("{name}: {requested} is allowed, write VALUE={requested}")
            } else {
                format!("{name}: {requested} is allowed and is the default")
            }
        }
        (Some(requested), false) => format!(
            "{name}: {requested} is not allowed, falls back to {}",
            resolved.value
        ),
    };

    if let Some(element) = resolved.list_element {
        out.push_str(&format!(" (list of {element})"));
    }
    out
}

#[must_use]
pub fn render_entry(entry: &CompatibilityEntry) -> String {
    let list = entry
        .multivalue_element
        .map_or_else(|| "no".to_string(), |element| element.to_string());

    format!(
        "{}\n  valid:   {}\n  default: {}\n  list:    {}",
        entry.property, entry.valid_values, entry.default_value, list
    )
}

#[must_use]
pub fn render_table() -> String {
    let mut out = String::new();
    for entry in entries() {
        let list = if entry.multivalue_element.is_some() {
            " [list]"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<20} {:<12} {}{}\n",
            entry.property.as_str(),
            entry.default_value.as_str(),
            entry.valid_values,
            list
        ));
    }
    out
}

/// ## Summary
/// Serializes the whole table as pretty JSON.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn table_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&entries().collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use kunai_rfc::rfc::ical::kind::{ValueKind, entry};

    use super::*;

    #[test]
    fn check_default() {
        let outcome = check("dtstart", None, ValidationConfig::strict());
        assert!(outcome.valid);
        assert_eq!(render_check(&outcome), "DTSTART: defaults to DATE-TIME");
    }

    #[test]
    fn check_explicit_non_default() {
        let outcome = check("DTSTART", Some("DATE"), ValidationConfig::strict());
        assert!(outcome.valid);
        assert_eq!(
            render_check(&outcome),
            "DTSTART: DATE is allowed, write VALUE=DATE"
        );
    }

    #[test]
    fn check_explicit_default() {
        let outcome = check("DTSTART", Some("DATE-TIME"), ValidationConfig::strict());
        assert_eq!(
            render_check(&outcome),
            "DTSTART: DATE-TIME is allowed and is the default"
        );
    }

    #[test]
    fn check_strict_rejection() {
        let outcome = check("RRULE", Some("TEXT"), ValidationConfig::strict());
        assert!(!outcome.valid);
        assert_eq!(
            render_check(&outcome),
            "RRULE: Value type TEXT is not allowed for property RRULE"
        );
    }

    #[test]
    fn check_lenient_fallback() {
        let outcome = check("EXDATE", Some("PERIOD"), ValidationConfig::lenient());
        assert!(!outcome.valid);
        assert_eq!(
            outcome.resolved.map(|r| r.value),
            Some(ValueKind::DateTime)
        );
        assert_eq!(
            render_check(&outcome),
            "EXDATE: PERIOD is not allowed, falls back to DATE-TIME (list of DATE-TIME)"
        );
    }

    #[test]
    fn render_entry_lists_rules() {
        assert_eq!(
            render_entry(entry(PropertyKind::Categories)),
            "CATEGORIES\n  valid:   TEXT\n  default: TEXT\n  list:    TEXT"
        );
    }

    #[test]
    fn table_has_one_line_per_property() {
        let table = render_table();
        assert_eq!(table.lines().count(), PropertyKind::COUNT);
        assert!(table.lines().any(|l| l.starts_with("FREEBUSY") && l.ends_with("[list]")));
    }

    #[test]
    fn table_json_is_an_array() {
        let json: serde_json::Value = serde_json::from_str(&table_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(PropertyKind::COUNT));
    }
}
