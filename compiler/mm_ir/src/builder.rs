//! Convenience construction of well-formed live documentation expressions.
//!
//! Upstream parsers and tests use this instead of allocating raw nodes:
//!
//! ```text
//! mandatory(host().address())   => b.mandatory(b.path(&["host", "address"]))
//! disks()[COLLECTION].format()  => { let d = b.call("disks");
//!                                    let c = b.collection(d);
//!                                    b.access(c, "format") }
//! ```

use crate::{Expr, ExprArena, ExprId, ExprKind, ExprRange, Name, Span, StringInterner};

/// Builds expressions into an arena, interning identifiers as it goes.
pub struct ExprBuilder<'a> {
    arena: &'a mut ExprArena,
    interner: &'a StringInterner,
    span: Span,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(arena: &'a mut ExprArena, interner: &'a StringInterner) -> Self {
        ExprBuilder {
            arena,
            interner,
            span: Span::DUMMY,
        }
    }

    /// Span attached to every expression allocated from now on.
    pub fn set_span(&mut self, span: Span) {
        self.span = span;
    }

    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.span))
    }

    fn method(&mut self, target: Option<ExprId>, method: Name, args: ExprRange) -> ExprId {
        self.alloc(ExprKind::Method {
            target,
            method,
            args,
        })
    }

    /// Chain root: `name()`.
    pub fn call(&mut self, name: &str) -> ExprId {
        let method = self.interner.intern_name(name);
        self.method(None, method, ExprRange::EMPTY)
    }

    /// Chained accessor: `target.name()`.
    pub fn access(&mut self, target: ExprId, name: &str) -> ExprId {
        let method = self.interner.intern_name(name);
        self.method(Some(target), method, ExprRange::EMPTY)
    }

    /// Accessor chain `a().b().c()` from `["a", "b", "c"]`.
    ///
    /// # Panics
    /// Panics if `segments` is empty.
    pub fn path(&mut self, segments: &[&str]) -> ExprId {
        let Some((first, rest)) = segments.split_first() else {
            panic!("an accessor path needs at least one segment");
        };
        let mut current = self.call(first);
        for segment in rest {
            current = self.access(current, segment);
        }
        current
    }

    /// Bare identifier: `name`.
    pub fn field(&mut self, name: &str) -> ExprId {
        let field = self.interner.intern_name(name);
        self.alloc(ExprKind::Field { field })
    }

    /// Indexing with an arbitrary index expression: `array[index]`.
    pub fn index(&mut self, array: ExprId, index: ExprId) -> ExprId {
        self.alloc(ExprKind::Array { array, index })
    }

    /// Collection step: `array[COLLECTION]`.
    pub fn collection(&mut self, array: ExprId) -> ExprId {
        let index = self.alloc(ExprKind::Field {
            field: Name::COLLECTION,
        });
        self.index(array, index)
    }

    /// Free call with arguments: `name(args...)`.
    pub fn apply(&mut self, name: Name, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.method(None, name, args)
    }

    /// `mandatory(inner)`.
    pub fn mandatory(&mut self, inner: ExprId) -> ExprId {
        self.apply(Name::MANDATORY, &[inner])
    }

    /// `optional(inner)`.
    pub fn optional(&mut self, inner: ExprId) -> ExprId {
        self.apply(Name::OPTIONAL, &[inner])
    }

    /// `or(first, second)`.
    pub fn or(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.apply(Name::OR, &[first, second])
    }
}
