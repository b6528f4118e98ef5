//! Live documentation expression nodes.
//!
//! The grammar is deliberately tiny: chains of parameterless accessor calls
//! (`disk().format()`), marker calls wrapping a chain (`mandatory(...)`,
//! `optional(...)`, `or(..., ...)`), and a single reserved collection index
//! (`disks()[COLLECTION]`).

use crate::{ExprId, ExprRange, Name, Span};

/// Expression node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Method call: `target.method(args)`.
    ///
    /// `a().b()` is a call of `b` whose target is the call `a()`. The root of
    /// a chain has no target.
    Method {
        target: Option<ExprId>,
        method: Name,
        args: ExprRange,
    },

    /// Indexing: `array[index]`.
    Array { array: ExprId, index: ExprId },

    /// Bare identifier, such as the `COLLECTION` index.
    Field { field: Name },
}
