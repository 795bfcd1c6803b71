//! Recognized property names (RFC 5545 §3.7, §3.8 and registered extensions).

use std::fmt;

use serde::{Serialize, Serializer};

/// Identity of a named iCalendar property.
///
/// Covers RFC 5545 (plus `EXRULE` from RFC 2445), RFC 7808, RFC 7953,
/// RFC 7986, RFC 9073, RFC 9074, RFC 9253 and the VPOLL and task
/// extensions. Names outside that set map to [`PropertyKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PropertyKind {
    // Calendar properties (§3.7)
    CalScale,
    Method,
    ProdId,
    Version,

    // Descriptive properties (§3.8.1)
    Attach,
    Categories,
    Class,
    Comment,
    Description,
    Geo,
    Location,
    PercentComplete,
    Priority,
    Resources,
    Status,
    Summary,

    // Date and time properties (§3.8.2)
    Completed,
    DtEnd,
    Due,
    DtStart,
    Duration,
    FreeBusy,
    Transp,

    // Time zone properties (§3.8.3, RFC 7808)
    TzId,
    TzName,
    TzOffsetFrom,
    TzOffsetTo,
    TzUrl,
    TzIdAliasOf,
    TzUntil,

    // Relationship properties (§3.8.4)
    Attendee,
    Contact,
    Organizer,
    RecurrenceId,
    RelatedTo,
    Url,
    Uid,

    // Recurrence properties (§3.8.5)
    ExDate,
    ExRule,
    RDate,
    RRule,

    // Alarm properties (§3.8.6, RFC 9074)
    Action,
    Repeat,
    Trigger,
    Acknowledged,
    Proximity,

    // Change management properties (§3.8.7)
    Created,
    DtStamp,
    LastModified,
    Sequence,

    // Miscellaneous properties (§3.8.8)
    RequestStatus,

    // RFC 7986
    Name,
    RefreshInterval,
    Source,
    Color,
    Image,
    Conference,

    // RFC 7953
    BusyType,

    // RFC 9073
    LocationType,
    ParticipantType,
    ResourceType,
    CalendarAddress,
    StyledDescription,
    StructuredData,

    // RFC 9253
    Link,
    Concept,
    RefId,

    // Task extensions
    EstimatedDuration,

    // VPOLL
    AcceptResponse,
    PollCompletion,
    PollItemId,
    PollMode,
    PollProperties,
    PollWinner,
    Voter,

    /// X-name or unregistered IANA property.
    Unknown,
    /// No property at all.
    NoKind,
}

impl PropertyKind {
    /// Number of variants, sentinels included.
    pub const COUNT: usize = 77;

    /// Every variant, indexed by ordinal.
    pub const ALL: [Self; Self::COUNT] = [
        Self::CalScale,
        Self::Method,
        Self::ProdId,
        Self::Version,
        Self::Attach,
        Self::Categories,
        Self::Class,
        Self::Comment,
        Self::Description,
        Self::Geo,
        Self::Location,
        Self::PercentComplete,
        Self::Priority,
        Self::Resources,
        Self::Status,
        Self::Summary,
        Self::Completed,
        Self::DtEnd,
        Self::Due,
        Self::DtStart,
        Self::Duration,
        Self::FreeBusy,
        Self::Transp,
        Self::TzId,
        Self::TzName,
        Self::TzOffsetFrom,
        Self::TzOffsetTo,
        Self::TzUrl,
        Self::TzIdAliasOf,
        Self::TzUntil,
        Self::Attendee,
        Self::Contact,
        Self::Organizer,
        Self::RecurrenceId,
        Self::RelatedTo,
        Self::Url,
        Self::Uid,
        Self::ExDate,
        Self::ExRule,
        Self::RDate,
        Self::RRule,
        Self::Action,
        Self::Repeat,
        Self::Trigger,
        Self::Acknowledged,
        Self::Proximity,
        Self::Created,
        Self::DtStamp,
        Self::LastModified,
        Self::Sequence,
        Self::RequestStatus,
        Self::Name,
        Self::RefreshInterval,
        Self::Source,
        Self::Color,
        Self::Image,
        Self::Conference,
        Self::BusyType,
        Self::LocationType,
        Self::ParticipantType,
        Self::ResourceType,
        Self::CalendarAddress,
        Self::StyledDescription,
        Self::StructuredData,
        Self::Link,
        Self::Concept,
        Self::RefId,
        Self::EstimatedDuration,
        Self::AcceptResponse,
        Self::PollCompletion,
        Self::PollItemId,
        Self::PollMode,
        Self::PollProperties,
        Self::PollWinner,
        Self::Voter,
        Self::Unknown,
        Self::NoKind,
    ];

    /// Returns the property name as written in iCalendar text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalScale => "CALSCALE",
            Self::Method => "METHOD",
            Self::ProdId => "PRODID",
            Self::Version => "VERSION",
            Self::Attach => "ATTACH",
            Self::Categories => "CATEGORIES",
            Self::Class => "CLASS",
            Self::Comment => "COMMENT",
            Self::Description => "DESCRIPTION",
            Self::Geo => "GEO",
            Self::Location => "LOCATION",
            Self::PercentComplete => "PERCENT-COMPLETE",
            Self::Priority => "PRIORITY",
            Self::Resources => "RESOURCES",
            Self::Status => "STATUS",
            Self::Summary => "SUMMARY",
            Self::Completed => "COMPLETED",
            Self::DtEnd => "DTEND",
            Self::Due => "DUE",
            Self::DtStart => "DTSTART",
            Self::Duration => "DURATION",
            Self::FreeBusy => "FREEBUSY",
            Self::Transp => "TRANSP",
            Self::TzId => "TZID",
            Self::TzName => "TZNAME",
            Self::TzOffsetFrom => "TZOFFSETFROM",
            Self::TzOffsetTo => "TZOFFSETTO",
            Self::TzUrl => "TZURL",
            Self::TzIdAliasOf => "TZID-ALIAS-OF",
            Self::TzUntil => "TZUNTIL",
            Self::Attendee => "ATTENDEE",
            Self::Contact => "CONTACT",
            Self::Organizer => "ORGANIZER",
            Self::RecurrenceId => "RECURRENCE-ID",
            Self::RelatedTo => "RELATED-TO",
            Self::Url => "URL",
            Self::Uid => "UID",
            Self::ExDate => "EXDATE",
            Self::ExRule => "EXRULE",
            Self::RDate => "RDATE",
            Self::RRule => "RRULE",
            Self::Action => "ACTION",
            Self::Repeat => "REPEAT",
            Self::Trigger => "TRIGGER",
            Self::Acknowledged => "ACKNOWLEDGED",
            Self::Proximity => "PROXIMITY",
            Self::Created => "CREATED",
            Self::DtStamp => "DTSTAMP",
            Self::LastModified => "LAST-MODIFIED",
            Self::Sequence => "SEQUENCE",
            Self::RequestStatus => "REQUEST-STATUS",
            Self::Name => "NAME",
            Self::RefreshInterval => "REFRESH-INTERVAL",
            Self::Source => "SOURCE",
            Self::Color => "COLOR",
            Self::Image => "IMAGE",
            Self::Conference => "CONFERENCE",
            Self::BusyType => "BUSYTYPE",
            Self::LocationType => "LOCATION-TYPE",
            Self::ParticipantType => "PARTICIPANT-TYPE",
            Self::ResourceType => "RESOURCE-TYPE",
            Self::CalendarAddress => "CALENDAR-ADDRESS",
            Self::StyledDescription => "STYLED-DESCRIPTION",
            Self::StructuredData => "STRUCTURED-DATA",
            Self::Link => "LINK",
            Self::Concept => "CONCEPT",
            Self::RefId => "REFID",
            Self::EstimatedDuration => "ESTIMATED-DURATION",
            Self::AcceptResponse => "ACCEPT-RESPONSE",
            Self::PollCompletion => "POLL-COMPLETION",
            Self::PollItemId => "POLL-ITEM-ID",
            Self::PollMode => "POLL-MODE",
            Self::PollProperties => "POLL-PROPERTIES",
            Self::PollWinner => "POLL-WINNER",
            Self::Voter => "VOTER",
            Self::Unknown => "X-UNKNOWN",
            Self::NoKind => "NO-PROPERTY",
        }
    }

    /// Parses a property name (case-insensitive).
    ///
    /// An empty name is [`PropertyKind::NoKind`]; `X-` names and anything
    /// else unrecognized are [`PropertyKind::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Self::NoKind;
        }
        Self::ALL
            .into_iter()
            .filter(|kind| !kind.is_sentinel())
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Self::Unknown)
    }

    /// Returns whether this is `Unknown` or `NoKind`.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Unknown | Self::NoKind)
    }

    /// Returns the ordinal used to index the compatibility table.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const _: () = {
    let mut i = 0;
    while i < PropertyKind::COUNT {
        assert!(
            PropertyKind::ALL[i].ordinal() == i,
            "PropertyKind::ALL is out of ordinal order"
        );
        i += 1;
    }
};
