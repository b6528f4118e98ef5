//! Text outline of parameters and their member-involvement forests.
//!
//! ```text
//! cluster
//!     version
//!         major (integer, mandatory)
//!         minor (integer, mandatory)
//! host
//!     address (string, mandatory) or id (string, mandatory)
//! fence_type (fence_type, optional)
//! ```
//!
//! Siblings are ordered by their canonical name so the output does not
//! depend on the order expressions were analyzed in.

use std::fmt::Write;

use mm_ir::{Name, StringInterner};
use mm_types::Pool;

use crate::{InvolvementNode, MemberForest, NodeId, Parameter};

const INDENT: &str = "    ";

/// Outline of several parameters, one after the other.
pub fn render_parameters(
    parameters: &[Parameter],
    pool: &Pool,
    interner: &StringInterner,
) -> String {
    let mut out = String::new();
    for parameter in parameters {
        write_parameter(&mut out, parameter, parameters, pool, interner);
    }
    out
}

/// Outline of one parameter.
///
/// Alternatives pointing into other parameters render as `or vm.?`, since
/// only this parameter is known here.
pub fn render_parameter(parameter: &Parameter, pool: &Pool, interner: &StringInterner) -> String {
    let mut out = String::new();
    write_parameter(
        &mut out,
        parameter,
        std::slice::from_ref(parameter),
        pool,
        interner,
    );
    out
}

struct Renderer<'a> {
    out: &'a mut String,
    current: Name,
    parameters: &'a [Parameter],
    pool: &'a Pool,
    interner: &'a StringInterner,
}

fn write_parameter(
    out: &mut String,
    parameter: &Parameter,
    parameters: &[Parameter],
    pool: &Pool,
    interner: &StringInterner,
) {
    let name = interner.lookup(parameter.name());
    if pool.is_simple(parameter.ty()) {
        let status = if parameter.is_mandatory() {
            "mandatory"
        } else {
            "optional"
        };
        let _ = writeln!(
            out,
            "{name} ({}, {status})",
            pool.type_name(parameter.ty(), interner)
        );
        return;
    }

    let _ = writeln!(out, "{name}");
    let mut renderer = Renderer {
        out,
        current: parameter.name(),
        parameters,
        pool,
        interner,
    };
    let forest = parameter.forest();
    for id in renderer.sorted(forest, forest.roots()) {
        renderer.node(forest, id, 1);
    }
}

impl Renderer<'_> {
    fn sorted(&self, forest: &MemberForest, mut ids: Vec<NodeId>) -> Vec<NodeId> {
        ids.sort_by_key(|&id| self.interner.lookup(forest.node(id).name()));
        ids
    }

    fn node(&mut self, forest: &MemberForest, id: NodeId, depth: usize) {
        let node = forest.node(id);
        self.out.push_str(&INDENT.repeat(depth));
        self.out.push_str(self.interner.lookup(node.name()));
        if node.is_leaf() {
            self.annotation(node);
        }
        if let Some(alternative) = node.alternative() {
            let parameters = self.parameters;
            let mut text = String::from(" or ");
            if alternative.parameter != self.current {
                text.push_str(self.interner.lookup(alternative.parameter));
                text.push('.');
            }
            let owner = parameters
                .iter()
                .find(|p| p.name() == alternative.parameter)
                .map(Parameter::forest);
            match owner.and_then(|f| f.get(alternative.node).map(|n| (f, n))) {
                Some((target, secondary)) => {
                    text.push_str(&self.join(&target.path(alternative.node)));
                    self.out.push_str(&text);
                    self.annotation(secondary);
                }
                None => {
                    text.push('?');
                    self.out.push_str(&text);
                }
            }
        }
        self.out.push('\n');

        for child in self.sorted(forest, node.children()) {
            self.node(forest, child, depth + 1);
        }
    }

    fn annotation(&mut self, node: &InvolvementNode) {
        let ty = node
            .ty()
            .map_or_else(|| "?".to_owned(), |ty| self.pool.type_name(ty, self.interner));
        let status = match node.mandatory() {
            Some(true) => ", mandatory",
            Some(false) => ", optional",
            None => "",
        };
        let _ = write!(self.out, " ({ty}{status})");
    }

    fn join(&self, path: &[Name]) -> String {
        path.iter()
            .map(|&name| self.interner.lookup(name))
            .collect::<Vec<_>>()
            .join(".")
    }
}
