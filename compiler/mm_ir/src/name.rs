//! Interned identifier.
//!
//! Names in the metamodel are sequences of words; `dataCenter`, `DataCenter`
//! and `data_center` all intern to the same `Name` when interned through
//! [`StringInterner::intern_name`](crate::StringInterner::intern_name).

use std::fmt;

/// Interned string identifier.
///
/// A 32-bit index into the [`StringInterner`](crate::StringInterner) table.
/// Equality and hashing are integer operations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    // === Live documentation keywords ===
    // Pre-interned at interner creation, in this order.

    /// `mandatory(expr)`: the wrapped path must be supplied.
    pub const MANDATORY: Name = Name(1);
    /// `optional(expr)`: the wrapped path may be supplied.
    pub const OPTIONAL: Name = Name(2);
    /// `a()[COLLECTION]`: the indexed member is repeated.
    pub const COLLECTION: Name = Name(3);
    /// `or(a, b)`: exactly one of two paths is supplied.
    pub const OR: Name = Name(4);

    /// Number of pre-interned names (empty string plus keywords).
    pub const PRE_INTERNED: u32 = 5;

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Index into the interner table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this is the `mandatory` or `optional` marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        self.0 == Self::MANDATORY.0 || self.0 == Self::OPTIONAL.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
