//! Value data types (RFC 5545 §3.3, RFC 9253 §7).

use std::fmt;

use serde::{Serialize, Serializer};

/// The data type a property value is encoded as.
///
/// Named by the `VALUE` parameter, e.g. `DTSTART;VALUE=DATE:20260123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueKind {
    /// BINARY (§3.3.1), base64 inline data.
    Binary,
    /// BOOLEAN (§3.3.2).
    Boolean,
    /// CAL-ADDRESS (§3.3.3).
    CalAddress,
    /// DATE (§3.3.4).
    Date,
    /// DATE-TIME (§3.3.5).
    DateTime,
    /// DURATION (§3.3.6).
    Duration,
    /// FLOAT (§3.3.7).
    Float,
    /// INTEGER (§3.3.8).
    Integer,
    /// PERIOD (§3.3.9).
    Period,
    /// RECUR (§3.3.10).
    Recur,
    /// TEXT (§3.3.11).
    Text,
    /// TIME (§3.3.12).
    Time,
    /// URI (§3.3.13).
    Uri,
    /// UTC-OFFSET (§3.3.14).
    UtcOffset,
    /// UID (RFC 9253).
    Uid,
    /// XML-REFERENCE (RFC 9253).
    XmlReference,
    /// x-name or unregistered IANA value type.
    Unknown,
}

impl ValueKind {
    /// Number of variants, sentinel included.
    pub const COUNT: usize = 17;

    /// Every variant, indexed by ordinal.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Binary,
        Self::Boolean,
        Self::CalAddress,
        Self::Date,
        Self::DateTime,
        Self::Duration,
        Self::Float,
        Self::Integer,
        Self::Period,
        Self::Recur,
        Self::Text,
        Self::Time,
        Self::Uri,
        Self::UtcOffset,
        Self::Uid,
        Self::XmlReference,
        Self::Unknown,
    ];

    /// Returns the `VALUE` parameter name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::CalAddress => "CAL-ADDRESS",
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Period => "PERIOD",
            Self::Recur => "RECUR",
            Self::Text => "TEXT",
            Self::Time => "TIME",
            Self::Uri => "URI",
            Self::UtcOffset => "UTC-OFFSET",
            Self::Uid => "UID",
            Self::XmlReference => "XML-REFERENCE",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a `VALUE` parameter (case-insensitive).
    ///
    /// Anything outside the registered set maps to [`ValueKind::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .filter(|kind| *kind != Self::Unknown)
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Self::Unknown)
    }

    /// Returns the ordinal used to index per-kind data.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const _: () = {
    let mut i = 0;
    while i < ValueKind::COUNT {
        assert!(
            ValueKind::ALL[i].ordinal() == i,
            "ValueKind::ALL is out of ordinal order"
        );
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ValueKind::parse("date-time"), ValueKind::DateTime);
        assert_eq!(ValueKind::parse("Cal-Address"), ValueKind::CalAddress);
        assert_eq!(ValueKind::parse(" UTC-OFFSET "), ValueKind::UtcOffset);
    }

    #[test]
    fn parse_unrecognized_is_unknown() {
        assert_eq!(ValueKind::parse("X-THING"), ValueKind::Unknown);
        assert_eq!(ValueKind::parse(""), ValueKind::Unknown);
        assert_eq!(ValueKind::parse("X-UNKNOWN"), ValueKind::Unknown);
    }

    #[test]
    fn names_round_trip() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::parse(kind.as_str()), kind, "{kind:?}");
        }
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&ValueKind::XmlReference).unwrap(),
            "\"XML-REFERENCE\""
        );
    }
}
