//! iCalendar content line type (RFC 5545 §3.1).

use super::Parameter;
use crate::rfc::ical::kind::PropertyKind;

/// A raw content line as produced by a tokenizer.
///
/// This is the low-level representation before value type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a new content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        let p = self.get_param(name)?;
        p.value()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value("VALUE")
    }

    /// Returns the property kind named by this line.
    #[must_use]
    pub fn property_kind(&self) -> PropertyKind {
        PropertyKind::parse(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_line_get_param() {
        let cl = ContentLine::with_params(
            "dtstart",
            vec![Parameter::new("TZID", "America/New_York")],
            "20260123T120000",
        );
        assert_eq!(cl.name, "DTSTART");
        assert_eq!(cl.get_param_value("tzid"), Some("America/New_York"));
        assert!(cl.get_param("TZID").is_some());
        assert!(cl.get_param("VALUE").is_none());
        assert_eq!(cl.value_type(), None);
    }

    #[test]
    fn content_line_property_kind() {
        assert_eq!(
            ContentLine::new("RRULE", "FREQ=DAILY").property_kind(),
            PropertyKind::RRule
        );
        assert_eq!(
            ContentLine::new("X-WR-CALNAME", "Work").property_kind(),
            PropertyKind::Unknown
        );
    }
}
