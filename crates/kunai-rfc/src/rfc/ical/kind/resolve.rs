//! Value kind resolution for content lines.
//!
//! Parsers call [`resolve_value_kind`] to learn how a raw value must be read;
//! serializers call [`value_param_for`] to decide whether a `VALUE` parameter
//! has to be written.

use kunai_core::config::ValidationConfig;
use serde::Serialize;

use super::{PropertyKind, ValueKind, default_value, is_default, is_multivalued, is_valid};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Separator between the elements of a multivalued property.
pub const LIST_SEPARATOR: char = ',';

/// The value kind a content line resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedValueKind {
    pub property: PropertyKind,
    pub value: ValueKind,
    /// Whether `value` came from a `VALUE` parameter.
    pub explicit: bool,
    /// Element kind when the raw value is a list.
    pub list_element: Option<ValueKind>,
}

impl ResolvedValueKind {
    fn new(property: PropertyKind, value: ValueKind, explicit: bool) -> Self {
        // An explicit VALUE applies to every element, e.g. RDATE;VALUE=PERIOD.
        let list_element = is_multivalued(property).map(|_| value);
        Self {
            property,
            value,
            explicit,
            list_element,
        }
    }

    /// Returns whether the raw value holds a list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        self.list_element.is_some()
    }

    /// Splits a raw value into its elements.
    ///
    /// Single-valued properties yield the whole input. Escaped separators
    /// (`\,`) stay inside their element.
    #[must_use]
    pub fn split_values(self, raw: &str) -> Vec<&str> {
        if !self.is_list() {
            return vec![raw];
        }

        let mut items = Vec::new();
        let mut start = 0;
        let mut escaped = false;
        for (idx, ch) in raw.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                LIST_SEPARATOR => {
                    items.push(&raw[start..idx]);
                    start = idx + ch.len_utf8();
                }
                _ => {}
            }
        }
        items.push(&raw[start..]);
        items
    }
}

/// Resolves the value kind of a content line.
///
/// Without a `VALUE` parameter the property's default kind applies. An
/// explicit kind must be legal for the property; otherwise strict validation
/// fails and lenient validation falls back to the default.
///
/// ## Errors
///
/// In strict mode, returns `UnknownValueKind` for an unrecognized `VALUE`
/// type on a recognized property and `IncompatibleValueKind` for a
/// recognized type the property does not accept.
#[tracing::instrument(skip(line), fields(name = %line.name))]
pub fn resolve_value_kind(
    line: &ContentLine,
    policy: ValidationConfig,
) -> RfcResult<ResolvedValueKind> {
    let property = line.property_kind();

    let Some(type_name) = line.value_type() else {
        let value = default_value(property);
        tracing::trace!(%property, %value, "No VALUE parameter, using default");
        return Ok(ResolvedValueKind::new(property, value, false));
    };

    let value = ValueKind::parse(type_name);
    if is_valid(property, value) {
        tracing::debug!(%property, %value, "Using explicit VALUE parameter");
        return Ok(ResolvedValueKind::new(property, value, true));
    }

    let err = if value == ValueKind::Unknown {
        RfcError::UnknownValueKind {
            property: line.name.clone(),
            value: type_name.to_string(),
        }
    } else {
        RfcError::IncompatibleValueKind { property, value }
    };

    if policy.strict {
        tracing::debug!(error = %err, "Rejecting VALUE parameter");
        return Err(err);
    }

    let fallback = default_value(property);
    tracing::warn!(error = %err, %fallback, "Ignoring VALUE parameter");
    Ok(ResolvedValueKind::new(property, fallback, false))
}

/// Returns whether a serializer must write `VALUE` for this pairing.
#[must_use]
pub fn needs_value_param(property: PropertyKind, value: ValueKind) -> bool {
    !is_default(property, value)
}

/// Returns the `VALUE` parameter to write, or `None` when `value` is the
/// property's default.
///
/// ## Errors
///
/// Returns `IncompatibleValueKind` if `property` cannot carry `value`.
pub fn value_param_for(property: PropertyKind, value: ValueKind) -> RfcResult<Option<Parameter>> {
    if !is_valid(property, value) {
        return Err(RfcError::IncompatibleValueKind { property, value });
    }
    Ok(needs_value_param(property, value).then(|| Parameter::value_type(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(property: PropertyKind, value: ValueKind) -> ResolvedValueKind {
        ResolvedValueKind::new(property, value, false)
    }

    #[test]
    fn split_single_valued_returns_input() {
        let r = resolved(PropertyKind::Summary, ValueKind::Text);
        assert_eq!(r.split_values("a,b"), vec!["a,b"]);
    }

    #[test]
    fn split_list_respects_escapes() {
        let r = resolved(PropertyKind::Categories, ValueKind::Text);
        assert_eq!(
            r.split_values(r"WORK,Meetings\, misc,"),
            vec!["WORK", r"Meetings\, misc", ""]
        );
    }

    #[test]
    fn split_list_without_separator() {
        let r = resolved(PropertyKind::ExDate, ValueKind::DateTime);
        assert_eq!(r.split_values("20260101T000000Z"), vec!["20260101T000000Z"]);
    }

    #[test]
    fn resolved_kind_is_reusable_after_split() {
        let r = resolved(PropertyKind::FreeBusy, ValueKind::Period);
        let first = r.split_values("19970308T160000Z/PT8H30M,19970308T230000Z/PT3H");
        let second = r.split_values("19970308T160000Z/PT8H30M");
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert!(r.is_list());
    }

    #[test]
    fn value_param_omitted_for_default() {
        assert_eq!(
            value_param_for(PropertyKind::DtStart, ValueKind::DateTime).unwrap(),
            None
        );
    }

    #[test]
    fn value_param_written_for_non_default() {
        let param = value_param_for(PropertyKind::DtStart, ValueKind::Date)
            .unwrap()
            .unwrap();
        assert_eq!(param.to_string(), "VALUE=DATE");
        assert!(needs_value_param(PropertyKind::DtStart, ValueKind::Date));
    }

    #[test]
    fn value_param_rejects_illegal_pairing() {
        assert_eq!(
            value_param_for(PropertyKind::RRule, ValueKind::Text),
            Err(RfcError::IncompatibleValueKind {
                property: PropertyKind::RRule,
                value: ValueKind::Text,
            })
        );
    }
}
