//! Fixed-size set of value kinds.

use std::fmt;

use serde::{Serialize, Serializer};

use super::ValueKind;

/// A set of [`ValueKind`]s stored as a bitmask.
///
/// `Copy`, allocation-free and buildable in `const` context, so the
/// compatibility table can hold one per property without any startup work.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueKindSet(u32);

impl ValueKindSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Every value kind, `Unknown` included.
    pub const ALL: Self = Self((1u32 << ValueKind::COUNT) - 1);

    /// Builds a set from a slice of kinds.
    #[must_use]
    pub const fn of(kinds: &[ValueKind]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set with `kind` added.
    #[must_use]
    pub const fn with(self, kind: ValueKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    #[must_use]
    pub const fn contains(self, kind: ValueKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the members in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = ValueKind> {
        ValueKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    const fn bit(kind: ValueKind) -> u32 {
        1u32 << kind.ordinal()
    }
}

impl FromIterator<ValueKind> for ValueKindSet {
    fn from_iter<I: IntoIterator<Item = ValueKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for ValueKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ValueKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for ValueKindSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

const _: () = assert!(ValueKind::COUNT <= u32::BITS as usize);
