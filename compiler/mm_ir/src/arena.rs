//! Arena allocation for live documentation expressions.

use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for the expressions of one documentation block.
///
/// All expressions are stored in a flat `Vec` and referenced by `ExprId`;
/// argument lists are stored in `expr_lists` and referenced by `ExprRange`.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// Flattened expression lists (call arguments).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated_exprs),
            expr_lists: Vec::with_capacity(estimated_exprs / 4),
        }
    }

    /// Allocate expression, return ID.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX - 1` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena overflow"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate expression list, return range.
    ///
    /// # Panics
    /// Panics if list storage exceeds `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        let (Ok(start), Ok(len)) = (
            u32::try_from(start),
            u32::try_from(self.expr_lists.len() - start),
        ) else {
            panic!("expression list storage overflow");
        };
        ExprRange::new(start, len)
    }

    /// Get expression list by range.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }
}
