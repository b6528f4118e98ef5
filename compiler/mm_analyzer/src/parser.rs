//! Seam to the live documentation parser.
//!
//! Turning source text into expressions happens outside this crate. A
//! parser hands back the arena it allocated into and the ids of the
//! top-level statements, in source order.

use mm_ir::{ExprArena, ExprId, Span, StringInterner};

/// Expressions of one documentation block.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedExpressions {
    pub arena: ExprArena,
    /// Top-level statements in source order.
    pub roots: Vec<ExprId>,
}

impl ParsedExpressions {
    pub fn new(arena: ExprArena, roots: Vec<ExprId>) -> Self {
        ParsedExpressions { arena, roots }
    }
}

/// Why a documentation block could not be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ParseFailure {
    pub message: String,
    pub span: Span,
}

impl ParseFailure {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseFailure {
            message: message.into(),
            span,
        }
    }
}

/// Produces expressions from live documentation source.
pub trait ExpressionParser {
    fn parse(
        &self,
        source: &str,
        interner: &StringInterner,
    ) -> Result<ParsedExpressions, ParseFailure>;
}

impl<F> ExpressionParser for F
where
    F: Fn(&str, &StringInterner) -> Result<ParsedExpressions, ParseFailure>,
{
    fn parse(
        &self,
        source: &str,
        interner: &StringInterner,
    ) -> Result<ParsedExpressions, ParseFailure> {
        self(source, interner)
    }
}
