//! The property/value kind compatibility table.
//!
//! One [`CompatibilityEntry`] per [`PropertyKind`], stored at the index equal
//! to the property's ordinal. The table is computed in `const` context from
//! `rules`, whose exhaustive `match` makes a missing rule a compile error,
//! and `verify` rejects malformed entries at compile time.

use serde::Serialize;

use super::{PropertyKind, ValueKind, ValueKindSet};

/// Value rules for one property kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    pub property: PropertyKind,
    /// Value kinds the property may carry. Never empty.
    pub valid_values: ValueKindSet,
    /// Kind implied when no `VALUE` parameter is present.
    pub default_value: ValueKind,
    /// Element kind when the property holds a comma-separated list.
    pub multivalue_element: Option<ValueKind>,
}

impl CompatibilityEntry {
    const fn single(property: PropertyKind, value: ValueKind) -> Self {
        Self {
            property,
            valid_values: ValueKindSet::of(&[value]),
            default_value: value,
            multivalue_element: None,
        }
    }

    const fn one_of(property: PropertyKind, values: &[ValueKind], default: ValueKind) -> Self {
        Self {
            property,
            valid_values: ValueKindSet::of(values),
            default_value: default,
            multivalue_element: None,
        }
    }

    const fn list_of(property: PropertyKind, values: &[ValueKind], element: ValueKind) -> Self {
        Self {
            property,
            valid_values: ValueKindSet::of(values),
            default_value: element,
            multivalue_element: Some(element),
        }
    }

    const fn any(property: PropertyKind, default: ValueKind) -> Self {
        Self {
            property,
            valid_values: ValueKindSet::ALL,
            default_value: default,
            multivalue_element: None,
        }
    }
}

const fn rules(property: PropertyKind) -> CompatibilityEntry {
    use CompatibilityEntry as E;
    use PropertyKind as P;
    use ValueKind as V;

    match property {
        P::CalScale
        | P::Method
        | P::ProdId
        | P::Version
        | P::Class
        | P::Comment
        | P::Description
        | P::Location
        | P::Status
        | P::Summary
        | P::Transp
        | P::TzId
        | P::TzName
        | P::TzIdAliasOf
        | P::Contact
        | P::Uid
        | P::Action
        | P::Proximity
        | P::RequestStatus
        | P::Name
        | P::Color
        | P::BusyType
        | P::ParticipantType
        | P::ResourceType
        | P::RefId
        | P::AcceptResponse
        | P::PollCompletion
        | P::PollMode => E::single(property, V::Text),

        // GEO is a FLOAT;FLOAT pair, a structured value rather than a list.
        P::Geo => E::single(property, V::Float),

        P::PercentComplete
        | P::Priority
        | P::Repeat
        | P::Sequence
        | P::PollItemId
        | P::PollWinner => E::single(property, V::Integer),

        P::Completed
        | P::Created
        | P::DtStamp
        | P::LastModified
        | P::TzUntil
        | P::Acknowledged => E::single(property, V::DateTime),

        P::DtStart | P::DtEnd | P::Due | P::RecurrenceId => {
            E::one_of(property, &[V::DateTime, V::Date], V::DateTime)
        }

        P::Duration | P::RefreshInterval | P::EstimatedDuration => {
            E::single(property, V::Duration)
        }

        P::TzOffsetFrom | P::TzOffsetTo => E::single(property, V::UtcOffset),

        P::TzUrl | P::Url | P::Source | P::Conference | P::Concept => E::single(property, V::Uri),

        P::Attendee | P::Organizer | P::Voter | P::CalendarAddress => {
            E::single(property, V::CalAddress)
        }

        P::RRule | P::ExRule => E::single(property, V::Recur),

        P::Attach | P::Image => E::one_of(property, &[V::Uri, V::Binary], V::Uri),
        P::Trigger => E::one_of(property, &[V::Duration, V::DateTime], V::Duration),
        P::RelatedTo => E::one_of(property, &[V::Text, V::Uri, V::Uid], V::Text),
        P::Link => E::one_of(property, &[V::Uri, V::Uid, V::XmlReference], V::Uri),
        P::StyledDescription => E::one_of(property, &[V::Text, V::Uri], V::Text),
        P::StructuredData => E::one_of(property, &[V::Text, V::Binary, V::Uri], V::Text),

        P::Categories | P::Resources | P::LocationType | P::PollProperties => {
            E::list_of(property, &[V::Text], V::Text)
        }
        P::ExDate => E::list_of(property, &[V::DateTime, V::Date], V::DateTime),
        P::RDate => E::list_of(property, &[V::DateTime, V::Date, V::Period], V::DateTime),
        P::FreeBusy => E::list_of(property, &[V::Period], V::Period),

        // Extension properties default to TEXT (RFC 5545 §3.8.8.2).
        P::Unknown => E::any(property, V::Text),
        P::NoKind => E::any(property, V::Unknown),
    }
}

const fn build() -> [CompatibilityEntry; PropertyKind::COUNT] {
    let mut table = [rules(PropertyKind::NoKind); PropertyKind::COUNT];
    let mut i = 0;
    while i < PropertyKind::COUNT {
        table[i] = rules(PropertyKind::ALL[i]);
        i += 1;
    }
    table
}

const fn verify(table: &[CompatibilityEntry; PropertyKind::COUNT]) {
    let mut i = 0;
    while i < PropertyKind::COUNT {
        let entry = &table[i];
        assert!(
            entry.property.ordinal() == i,
            "compatibility entry stored out of ordinal order"
        );
        assert!(
            !entry.valid_values.is_empty(),
            "compatibility entry has no valid value kinds"
        );
        assert!(
            entry.valid_values.contains(entry.default_value),
            "default value kind is not a valid value kind"
        );
        if let Some(element) = entry.multivalue_element {
            assert!(
                entry.valid_values.contains(element),
                "multivalue element kind is not a valid value kind"
            );
        }
        if !entry.property.is_sentinel() {
            assert!(
                !entry.valid_values.contains(ValueKind::Unknown),
                "recognized property accepts the unknown value kind"
            );
        }
        i += 1;
    }
}

const TABLE_DATA: [CompatibilityEntry; PropertyKind::COUNT] = build();

const _: () = verify(&TABLE_DATA);

static TABLE: [CompatibilityEntry; PropertyKind::COUNT] = TABLE_DATA;

/// Returns the rules for `property`.
#[must_use]
pub fn entry(property: PropertyKind) -> &'static CompatibilityEntry {
    &TABLE[property.ordinal()]
}

/// Iterates every entry in ordinal order, sentinels included.
pub fn entries() -> impl Iterator<Item = &'static CompatibilityEntry> {
    TABLE.iter()
}

/// Returns whether `property` may carry a value of kind `value`.
///
/// `Unknown` and `NoKind` properties accept every kind. `ValueKind::Unknown`
/// is rejected by every recognized property.
#[must_use]
pub fn is_valid(property: PropertyKind, value: ValueKind) -> bool {
    entry(property).valid_values.contains(value)
}

/// Returns the list element kind if `property` holds a comma-separated list.
#[must_use]
pub fn is_multivalued(property: PropertyKind) -> Option<ValueKind> {
    entry(property).multivalue_element
}

/// Returns whether `value` is implied for `property` when `VALUE` is absent.
#[must_use]
pub fn is_default(property: PropertyKind, value: ValueKind) -> bool {
    entry(property).default_value == value
}

/// Returns the kinds `property` may carry.
#[must_use]
pub fn valid_values(property: PropertyKind) -> ValueKindSet {
    entry(property).valid_values
}

/// Returns the kind implied for `property` when `VALUE` is absent.
#[must_use]
pub fn default_value(property: PropertyKind) -> ValueKind {
    entry(property).default_value
}
