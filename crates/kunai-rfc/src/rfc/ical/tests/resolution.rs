//! Value kind resolution against realistic content lines.

use kunai_core::config::ValidationConfig;

use super::fixtures::{
    categories, dtend_x_value, dtstart_date, dtstart_default, dtstart_duration, rdate_periods,
    x_property_uri, x_property_x_value,
};
use crate::error::RfcError;
use crate::rfc::ical::kind::{PropertyKind, ValueKind, resolve_value_kind};

#[test_log::test]
fn default_kind_without_value_param() {
    let r = resolve_value_kind(&dtstart_default(), ValidationConfig::strict()).unwrap();

    assert_eq!(r.property, PropertyKind::DtStart);
    assert_eq!(r.value, ValueKind::DateTime);
    assert!(!r.explicit);
    assert!(!r.is_list());
}

#[test_log::test]
fn explicit_kind_from_value_param() {
    let r = resolve_value_kind(&dtstart_date(), ValidationConfig::strict()).unwrap();

    assert_eq!(r.value, ValueKind::Date);
    assert!(r.explicit);
}

#[test_log::test]
fn strict_rejects_incompatible_kind() {
    let err = resolve_value_kind(&dtstart_duration(), ValidationConfig::strict()).unwrap_err();

    assert_eq!(
        err,
        RfcError::IncompatibleValueKind {
            property: PropertyKind::DtStart,
            value: ValueKind::Duration,
        }
    );
    assert_eq!(
        err.to_string(),
        "Value type DURATION is not allowed for property DTSTART"
    );
}

#[test_log::test]
fn lenient_falls_back_to_default() {
    let r = resolve_value_kind(&dtstart_duration(), ValidationConfig::lenient()).unwrap();

    assert_eq!(r.value, ValueKind::DateTime);
    assert!(!r.explicit);
}

#[test_log::test]
fn strict_rejects_unregistered_value_type() {
    let err = resolve_value_kind(&dtend_x_value(), ValidationConfig::strict()).unwrap_err();

    assert_eq!(
        err,
        RfcError::UnknownValueKind {
            property: "DTEND".to_string(),
            value: "X-FUZZY".to_string(),
        }
    );
}

#[test_log::test]
fn lenient_ignores_unregistered_value_type() {
    let r = resolve_value_kind(&dtend_x_value(), ValidationConfig::lenient()).unwrap();

    assert_eq!(r.value, ValueKind::DateTime);
}

#[test_log::test]
fn rdate_period_list() {
    let line = rdate_periods();
    let r = resolve_value_kind(&line, ValidationConfig::strict()).unwrap();

    assert_eq!(r.value, ValueKind::Period);
    assert_eq!(r.list_element, Some(ValueKind::Period));
    assert_eq!(
        r.split_values(&line.raw_value),
        vec!["19960403T020000Z/19960403T040000Z", "19960404T010000Z/PT3H"]
    );
}

#[test_log::test]
fn categories_text_list() {
    let line = categories();
    let r = resolve_value_kind(&line, ValidationConfig::strict()).unwrap();

    assert_eq!(r.list_element, Some(ValueKind::Text));
    assert_eq!(r.split_values(&line.raw_value), vec!["APPOINTMENT", "EDUCATION"]);
}

#[test_log::test]
fn x_property_takes_any_registered_kind() {
    let r = resolve_value_kind(&x_property_uri(), ValidationConfig::strict()).unwrap();

    assert_eq!(r.property, PropertyKind::Unknown);
    assert_eq!(r.value, ValueKind::Uri);
    assert!(r.explicit);
}

#[test_log::test]
fn x_property_takes_x_value_type() {
    let r = resolve_value_kind(&x_property_x_value(), ValidationConfig::strict()).unwrap();

    assert_eq!(r.value, ValueKind::Unknown);
    assert!(r.explicit);
}

#[test_log::test]
fn x_property_defaults_to_text() {
    let line = crate::rfc::ical::core::ContentLine::new("X-WR-CALNAME", "Work");
    let r = resolve_value_kind(&line, ValidationConfig::strict()).unwrap();

    assert_eq!(r.value, ValueKind::Text);
    assert!(!r.explicit);
}
