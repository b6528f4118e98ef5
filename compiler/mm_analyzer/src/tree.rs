//! Tree builder: records one member path in a parameter's forest.
//!
//! Recording happens in two steps. [`TreeBuilder::plan`] resolves the
//! parameter and the type of every member against the model without
//! touching any forest; [`TreeBuilder::apply`] then creates the missing
//! nodes and sets the leaf's status. A path that does not fit the model
//! therefore never leaves half-built nodes behind.

use mm_concepts::{parameter_by_name, NodeId, NodePath, Parameter};
use mm_ir::{ExprArena, ExprId};
use mm_types::{resolve_member, Idx, Pool};
use smallvec::SmallVec;

use crate::path::{extract_path, strip_marker};
use crate::{AnalysisError, AnalyzerConfig, ConflictPolicy};

/// Node whose status a path set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Leaf {
    /// Position of the owning parameter.
    pub parameter: usize,
    pub node: NodeId,
}

/// A path checked against the model, not yet recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Plan {
    /// The path names a primitive or enum parameter.
    Simple { parameter: usize, mandatory: bool },
    /// The path descends into a structured parameter.
    Members {
        parameter: usize,
        /// Member names below the parameter, never empty.
        members: NodePath,
        /// Type of each member, parallel to `members`.
        types: SmallVec<[Idx; 8]>,
        mandatory: bool,
    },
}

pub(crate) struct TreeBuilder<'a> {
    arena: &'a ExprArena,
    pool: &'a Pool,
    config: &'a AnalyzerConfig,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(arena: &'a ExprArena, pool: &'a Pool, config: &'a AnalyzerConfig) -> Self {
        TreeBuilder {
            arena,
            pool,
            config,
        }
    }

    pub(crate) fn arena(&self) -> &'a ExprArena {
        self.arena
    }

    /// Analyze a statement other than an alternation.
    ///
    /// Without a `mandatory(...)` marker the path is recorded as optional.
    pub(crate) fn statement(
        &self,
        parameters: &mut [Parameter],
        id: ExprId,
    ) -> Result<(), AnalysisError> {
        let (mandatory, path) = match strip_marker(self.arena, id)? {
            Some(marked) => (marked.mandatory, marked.inner),
            None => (false, id),
        };
        self.record(parameters, path, mandatory).map(|_| ())
    }

    /// Record the path rooted at `path` with the given status.
    ///
    /// Returns the leaf, or `None` when the path names a simple parameter.
    pub(crate) fn record(
        &self,
        parameters: &mut [Parameter],
        path: ExprId,
        mandatory: bool,
    ) -> Result<Option<Leaf>, AnalysisError> {
        let plan = self.plan(parameters, path, mandatory)?;
        self.apply(parameters, &plan)
    }

    /// Resolve a path against the parameters and their types.
    pub(crate) fn plan(
        &self,
        parameters: &[Parameter],
        path: ExprId,
        mandatory: bool,
    ) -> Result<Plan, AnalysisError> {
        let span = self.arena.get_expr(path).span;
        let segments = extract_path(self.arena, path)?;
        let Some((&name, members)) = segments.split_first() else {
            return Err(AnalysisError::UnsupportedExpression {
                span,
                reason: "empty member path",
            });
        };

        let index = parameter_by_name(parameters, name)
            .ok_or(AnalysisError::UnknownParameter { name, span })?;
        let parameter = &parameters[index];

        if members.is_empty() {
            if !self.pool.is_simple(parameter.ty()) {
                return Err(AnalysisError::SimpleParameterExpected {
                    parameter: name,
                    span,
                });
            }
            return Ok(Plan::Simple {
                parameter: index,
                mandatory,
            });
        }

        // Follow existing nodes as far as they go, reusing their types;
        // resolve the rest against the model.
        let forest = parameter.forest();
        let mut node: Option<NodeId> = None;
        let mut current = parameter.ty();
        let mut types = SmallVec::new();
        for (depth, &member) in members.iter().enumerate() {
            node = match node {
                None if depth == 0 => forest.root(member),
                None => None,
                Some(parent) => forest.child(parent, member),
            };
            let known = node.and_then(|id| forest.node(id).ty());
            let ty = match known {
                Some(ty) => ty,
                None => resolve_member(self.pool, current, member).map_err(|source| {
                    AnalysisError::StructuralMismatch {
                        parameter: name,
                        path: members[..=depth].iter().copied().collect(),
                        source,
                        span,
                    }
                })?,
            };
            types.push(ty);
            current = ty;
        }

        if let Some(existing) = node.and_then(|id| forest.node(id).mandatory()) {
            if existing != mandatory && self.config.conflict_policy == ConflictPolicy::Reject {
                return Err(AnalysisError::ConflictingMandatory {
                    parameter: name,
                    path: members.iter().copied().collect(),
                    span,
                });
            }
        }

        Ok(Plan::Members {
            parameter: index,
            members: members.iter().copied().collect(),
            types,
            mandatory,
        })
    }

    /// Record a plan made against the same parameters.
    pub(crate) fn apply(
        &self,
        parameters: &mut [Parameter],
        plan: &Plan,
    ) -> Result<Option<Leaf>, AnalysisError> {
        match plan {
            Plan::Simple {
                parameter,
                mandatory,
            } => {
                let parameter = &mut parameters[*parameter];
                tracing::trace!(parameter = ?parameter.name(), mandatory, "simple parameter");
                parameter.set_mandatory(*mandatory);
                Ok(None)
            }
            Plan::Members {
                parameter,
                members,
                types,
                mandatory,
            } => {
                let owner = &mut parameters[*parameter];
                let owner_name = owner.name();
                let forest = owner.forest_mut();

                let mut node: Option<NodeId> = None;
                for (&member, &ty) in members.iter().zip(types) {
                    let (id, created) = match node {
                        None => forest.get_or_insert_root(member),
                        Some(parent) => forest.get_or_insert_child(parent, member),
                    };
                    forest.set_type(id, ty)?;
                    if created {
                        tracing::trace!(parameter = ?owner_name, ?member, ?ty, "new member node");
                    }
                    node = Some(id);
                }
                // Plans always carry at least one member.
                let Some(leaf) = node else {
                    return Ok(None);
                };

                if let Some(previous) = forest.set_mandatory(leaf, *mandatory) {
                    if previous != *mandatory {
                        tracing::warn!(
                            parameter = ?owner_name,
                            path = ?members,
                            mandatory,
                            "member declared both mandatory and optional, keeping the last declaration"
                        );
                    }
                }

                Ok(Some(Leaf {
                    parameter: *parameter,
                    node: leaf,
                }))
            }
        }
    }
}
