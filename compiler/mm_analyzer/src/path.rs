//! Member path extraction.
//!
//! A path is written as a chain of parameterless calls, which the AST
//! stores outermost first: `host().nics()[COLLECTION].name()` is a call of
//! `name` whose target is the indexing of the call `nics` on the call
//! `host`. Extraction walks from the outermost call inwards and reverses the
//! collected names, so the parameter name comes first.

use mm_ir::{ExprArena, ExprId, ExprKind, Name, Span};
use smallvec::SmallVec;

use crate::AnalysisError;

/// Names of a path in source order, parameter name first.
pub(crate) type Segments = SmallVec<[Name; 8]>;

/// A statement unwrapped from `mandatory(...)` or `optional(...)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Marked {
    pub mandatory: bool,
    pub inner: ExprId,
}

/// Unwrap a `mandatory`/`optional` call. `Ok(None)` if `id` is not one.
pub(crate) fn strip_marker(arena: &ExprArena, id: ExprId) -> Result<Option<Marked>, AnalysisError> {
    let expr = arena.get_expr(id);
    let ExprKind::Method {
        target,
        method,
        args,
    } = expr.kind
    else {
        return Ok(None);
    };
    if !method.is_marker() {
        return Ok(None);
    }
    if target.is_some() {
        return Err(AnalysisError::UnsupportedExpression {
            span: expr.span,
            reason: "`mandatory` and `optional` cannot be called on a receiver",
        });
    }
    let &[inner] = arena.get_expr_list(args) else {
        return Err(AnalysisError::UnsupportedExpression {
            span: expr.span,
            reason: "`mandatory` and `optional` take exactly one path",
        });
    };
    Ok(Some(Marked {
        mandatory: method == Name::MANDATORY,
        inner,
    }))
}

/// Collect the names of the path rooted at `id`.
///
/// Never returns an empty path.
pub(crate) fn extract_path(arena: &ExprArena, id: ExprId) -> Result<Segments, AnalysisError> {
    let mut segments = Segments::new();
    let mut current = Some(id);

    while let Some(id) = current {
        let expr = arena.get_expr(id);
        match expr.kind {
            ExprKind::Method {
                target,
                method,
                args,
            } => {
                // Keywords are plain member names here; a nested marker or
                // `or` always has arguments.
                if !args.is_empty() {
                    return Err(unsupported(expr.span, "accessor calls take no arguments"));
                }
                segments.push(method);
                current = target;
            }
            ExprKind::Array { array, index } => {
                let index_expr = arena.get_expr(index);
                if !matches!(index_expr.kind, ExprKind::Field { field } if field == Name::COLLECTION)
                {
                    return Err(AnalysisError::InvalidCollectionIndex {
                        span: index_expr.span,
                    });
                }
                // The marker names no member; the indexed call does.
                if !matches!(arena.get_expr(array).kind, ExprKind::Method { .. }) {
                    return Err(unsupported(
                        expr.span,
                        "only the result of an accessor call can be indexed",
                    ));
                }
                current = Some(array);
            }
            ExprKind::Field { .. } => {
                return Err(unsupported(
                    expr.span,
                    "expected an accessor call, found a bare identifier",
                ));
            }
        }
    }

    segments.reverse();
    Ok(segments)
}

fn unsupported(span: Span, reason: &'static str) -> AnalysisError {
    AnalysisError::UnsupportedExpression { span, reason }
}
