//! Type index handle.
//!
//! All types are stored in the [`Pool`](crate::Pool) and referenced by a
//! 32-bit index. Primitive types have fixed indices so they can be named
//! without a pool.

use std::fmt;

use crate::PrimitiveKind;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-4) ===
    // Pre-interned at pool creation.

    /// `Boolean`.
    pub const BOOLEAN: Self = Self(0);
    /// `Integer`.
    pub const INTEGER: Self = Self(1);
    /// `Decimal`.
    pub const DECIMAL: Self = Self(2);
    /// `String`.
    pub const STRING: Self = Self(3);
    /// `Date`.
    pub const DATE: Self = Self(4);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 5;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the pool's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-interned primitive types.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Index of a primitive kind.
    #[inline]
    pub const fn of_primitive(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Boolean => Self::BOOLEAN,
            PrimitiveKind::Integer => Self::INTEGER,
            PrimitiveKind::Decimal => Self::DECIMAL,
            PrimitiveKind::String => Self::STRING,
            PrimitiveKind::Date => Self::DATE,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PrimitiveKind::from_idx(*self) {
            Some(kind) => write!(f, "Idx::{}", kind.as_str().to_uppercase()),
            None => write!(f, "Idx({})", self.0),
        }
    }
}
