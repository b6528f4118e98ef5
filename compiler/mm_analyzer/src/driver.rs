//! Entry points: analyze the live documentation of a method.

use mm_concepts::{Method, Parameter};
use mm_ir::{ExprArena, ExprId, ExprKind, Name, StringInterner};
use mm_types::Pool;

use crate::alternation::alternation;
use crate::tree::TreeBuilder;
use crate::{
    AnalysisError, AnalyzerConfig, ExpressionParser, MethodAnalysisError, ParsedExpressions,
};

/// Read-only collaborators of an analysis.
pub struct AnalysisContext<'a> {
    pub pool: &'a Pool,
    pub interner: &'a StringInterner,
    pub parser: &'a dyn ExpressionParser,
    pub config: AnalyzerConfig,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        pool: &'a Pool,
        interner: &'a StringInterner,
        parser: &'a dyn ExpressionParser,
    ) -> Self {
        AnalysisContext {
            pool,
            interner,
            parser,
            config: AnalyzerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Parse `source` and record every statement in the parameters' forests.
///
/// Statements are processed in source order and the first failure aborts
/// the analysis. Calling this again for the same parameters merges the new
/// paths into the existing forests.
#[tracing::instrument(level = "debug", skip_all, fields(parameters = parameters.len()))]
pub fn analyze_input(
    source: &str,
    parameters: &mut [Parameter],
    ctx: &AnalysisContext<'_>,
) -> Result<(), AnalysisError> {
    let parsed = ctx.parser.parse(source, ctx.interner)?;
    analyze_expressions(&parsed, parameters, ctx)
}

/// Record already parsed statements.
#[tracing::instrument(level = "debug", skip_all, fields(statements = parsed.roots.len()))]
pub fn analyze_expressions(
    parsed: &ParsedExpressions,
    parameters: &mut [Parameter],
    ctx: &AnalysisContext<'_>,
) -> Result<(), AnalysisError> {
    let builder = TreeBuilder::new(&parsed.arena, ctx.pool, &ctx.config);
    for &statement in &parsed.roots {
        if is_alternation(&parsed.arena, statement) {
            alternation(&builder, parameters, statement)?;
        } else {
            builder.statement(parameters, statement)?;
        }
    }
    Ok(())
}

/// Analyze the live documentation of a method over its own parameters.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(method = ctx.interner.lookup(method.name()))
)]
pub fn analyze_method(
    method: &mut Method,
    source: &str,
    ctx: &AnalysisContext<'_>,
) -> Result<(), MethodAnalysisError> {
    let name = method.name();
    analyze_input(source, method.parameters_mut(), ctx)
        .map_err(|source| MethodAnalysisError { method: name, source })
}

fn is_alternation(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.get_expr(id).kind, ExprKind::Method { method, .. } if method == Name::OR)
}
