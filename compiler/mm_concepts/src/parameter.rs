//! Method parameters.

use mm_ir::Name;
use mm_types::Idx;

use crate::{MemberForest, NodeId};

/// Direction of a parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
}

/// An input or output argument of an API method.
///
/// Whether a simple parameter (primitive or enum) must be supplied is the
/// `mandatory` flag. For a structured parameter (struct or list) that
/// question is answered per nested member by its [`MemberForest`]; such a
/// parameter is never flagged directly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: Name,
    ty: Idx,
    direction: Direction,
    mandatory: bool,
    forest: MemberForest,
}

impl Parameter {
    pub fn new(name: Name, ty: Idx) -> Self {
        Parameter {
            name,
            ty,
            direction: Direction::In,
            mandatory: false,
            forest: MemberForest::new(),
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn ty(&self) -> Idx {
        self.ty
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_in(&self) -> bool {
        matches!(self.direction, Direction::In | Direction::InOut)
    }

    pub fn is_out(&self) -> bool {
        matches!(self.direction, Direction::Out | Direction::InOut)
    }

    /// Meaningful only for primitive and enum parameters.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn set_mandatory(&mut self, mandatory: bool) {
        self.mandatory = mandatory;
    }

    pub fn forest(&self) -> &MemberForest {
        &self.forest
    }

    pub fn forest_mut(&mut self) -> &mut MemberForest {
        &mut self.forest
    }

    /// Attached leaves declared mandatory, in forest walk order.
    pub fn mandatory_attributes(&self) -> Vec<NodeId> {
        self.forest
            .leaves()
            .into_iter()
            .filter(|&id| self.forest.node(id).is_mandatory())
            .collect()
    }
}

/// Position of the parameter named `name`.
pub fn parameter_by_name(parameters: &[Parameter], name: Name) -> Option<usize> {
    parameters.iter().position(|p| p.name == name)
}

#[cfg(test)]
mod tests;
