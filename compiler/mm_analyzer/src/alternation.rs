//! Alternation handler: `or(mandatory(a), mandatory(b))`.
//!
//! Exactly one of the two paths is to be supplied. Both are recorded with
//! the shared status, the first (primary) leaf is linked to the second
//! (secondary) one, and the secondary is detached from its forest. Only the
//! primary stays reachable from the roots; the secondary survives, typed
//! and flagged, behind the link.

use mm_concepts::{Alternative, Parameter};
use mm_ir::{ExprId, ExprKind, Name};

use crate::path::strip_marker;
use crate::tree::{Plan, TreeBuilder};
use crate::{AlternationDefect, AnalysisError};

/// Analyze an `or(...)` statement.
///
/// Every shape check, and the resolution of both paths, happens before any
/// forest is modified.
pub(crate) fn alternation(
    builder: &TreeBuilder<'_>,
    parameters: &mut [Parameter],
    id: ExprId,
) -> Result<(), AnalysisError> {
    let arena = builder.arena();
    let expr = arena.get_expr(id);
    let span = expr.span;
    let malformed = |defect| AnalysisError::MalformedAlternation { span, defect };

    let ExprKind::Method { target, args, .. } = expr.kind else {
        return Err(AnalysisError::UnsupportedExpression {
            span,
            reason: "expected an `or` call",
        });
    };
    if target.is_some() {
        return Err(malformed(AlternationDefect::Receiver));
    }
    let &[first, second] = arena.get_expr_list(args) else {
        return Err(malformed(AlternationDefect::WrongArity { found: args.len() }));
    };
    let (Some(first), Some(second)) = (strip_marker(arena, first)?, strip_marker(arena, second)?)
    else {
        return Err(malformed(AlternationDefect::MissingMarker));
    };
    if first.mandatory != second.mandatory {
        return Err(malformed(AlternationDefect::MixedMarkers));
    }
    let mandatory = first.mandatory;

    let primary = builder.plan(parameters, first.inner, mandatory)?;
    let secondary = builder.plan(parameters, second.inner, mandatory)?;
    let (
        Plan::Members {
            parameter: primary_owner,
            members: primary_path,
            ..
        },
        Plan::Members {
            parameter: secondary_owner,
            members: secondary_path,
            ..
        },
    ) = (&primary, &secondary)
    else {
        return Err(malformed(AlternationDefect::SimpleParameter));
    };

    if primary_owner == secondary_owner {
        if primary_path == secondary_path {
            return Err(malformed(AlternationDefect::IdenticalSides));
        }
        // Recording the primary would give the secondary a child.
        if primary_path.starts_with(secondary_path) {
            return Err(malformed(AlternationDefect::SecondaryHasChildren));
        }
    }
    let secondary_forest = parameters[*secondary_owner].forest();
    if secondary_forest
        .find(secondary_path)
        .is_some_and(|existing| secondary_forest.node(existing).has_children())
    {
        return Err(malformed(AlternationDefect::SecondaryHasChildren));
    }

    // Analyzing the same `or` again updates the existing secondary instead
    // of detaching a fresh copy of it.
    if let Some(linked) = linked_secondary(
        parameters,
        *primary_owner,
        primary_path,
        *secondary_owner,
        secondary_path,
    ) {
        builder.apply(parameters, &primary)?;
        parameters[*secondary_owner]
            .forest_mut()
            .set_mandatory(linked.node, mandatory);
        tracing::trace!(
            primary = ?primary_path,
            secondary = ?secondary_path,
            mandatory,
            "alternatives already linked"
        );
        return Ok(());
    }

    let (Some(primary), Some(secondary)) = (
        builder.apply(parameters, &primary)?,
        builder.apply(parameters, &secondary)?,
    ) else {
        return Err(malformed(AlternationDefect::SimpleParameter));
    };

    let owner = &mut parameters[secondary.parameter];
    let alternative = Alternative {
        parameter: owner.name(),
        node: secondary.node,
    };
    owner.forest_mut().detach(secondary.node)?;
    parameters[primary.parameter]
        .forest_mut()
        .set_alternative(primary.node, alternative);

    tracing::debug!(
        primary = ?primary_path,
        secondary = ?secondary_path,
        mandatory,
        "linked alternatives and detached the secondary"
    );
    Ok(())
}

/// The detached secondary the primary at `primary_path` already links to,
/// if it sits at `secondary_path`.
fn linked_secondary(
    parameters: &[Parameter],
    primary_owner: usize,
    primary_path: &[Name],
    secondary_owner: usize,
    secondary_path: &[Name],
) -> Option<Alternative> {
    let primary_forest = parameters[primary_owner].forest();
    let secondary = &parameters[secondary_owner];
    let alternative = primary_forest
        .find(primary_path)
        .and_then(|leaf| primary_forest.node(leaf).alternative())?;
    let node = secondary.forest().get(alternative.node)?;
    let same = alternative.parameter == secondary.name()
        && !node.is_attached()
        && secondary.forest().path(alternative.node).as_slice() == secondary_path;
    same.then_some(alternative)
}
