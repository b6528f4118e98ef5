//! Metamodel IR - names, spans and live-documentation expressions.
//!
//! This crate contains the data structures shared by every stage of the
//! metamodel compiler that deals with "live documentation":
//! - Spans for source locations
//! - Names for interned, word-normalized identifiers
//! - Expression nodes (method calls, collection indexing, fields)
//! - Arena allocation for expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`, compared in O(1)
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! The textual parser for live documentation lives outside this workspace. It
//! produces an [`ExprArena`] (usually through [`ExprBuilder`]) and the ids of
//! the top-level statements.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod builder;
mod expr;
mod expr_id;
mod interner;
mod name;
mod span;

pub use arena::ExprArena;
pub use builder::ExprBuilder;
pub use expr::{Expr, ExprKind};
pub use expr_id::{ExprId, ExprRange};
pub use interner::{normalize_words, InternError, StringInterner};
pub use name::Name;
pub use span::Span;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange, Name, Span};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);
    crate::static_assert_size!(Span, 8);
}
