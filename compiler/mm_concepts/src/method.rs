//! API methods.

use mm_ir::{Name, StringInterner};

use crate::{parameter_by_name, InvolvementNode, NodeId, Parameter};

/// Names of the methods that are not actions.
const NON_ACTION_METHODS: [&str; 5] = ["add", "get", "list", "update", "remove"];

/// A method of an API service and the parameters it declares.
///
/// A method with several signatures is modeled as one `Method` per
/// signature, each naming the common `base` method.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    name: Name,
    base: Option<Name>,
    parameters: Vec<Parameter>,
}

impl Method {
    pub fn new(name: Name, parameters: Vec<Parameter>) -> Self {
        Method {
            name,
            base: None,
            parameters,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: Name) -> Self {
        self.base = Some(base);
        self
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn base(&self) -> Option<Name> {
        self.base
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    pub fn parameter(&self, name: Name) -> Option<&Parameter> {
        parameter_by_name(&self.parameters, name).map(|i| &self.parameters[i])
    }

    /// Any method other than `add`, `get`, `list`, `update` and `remove`,
    /// whether named directly or through its base.
    pub fn is_action(&self, interner: &StringInterner) -> bool {
        let is_crud = |name: Name| NON_ACTION_METHODS.contains(&interner.lookup(name));
        !(is_crud(self.name) || self.base.is_some_and(is_crud))
    }

    /// Simple parameters flagged mandatory.
    pub fn mandatory_parameters(&self) -> Vec<&Parameter> {
        self.parameters.iter().filter(|p| p.is_mandatory()).collect()
    }

    /// Mandatory leaves of every parameter's forest.
    pub fn mandatory_attributes(&self) -> Vec<(&Parameter, NodeId)> {
        self.parameters
            .iter()
            .flat_map(|p| p.mandatory_attributes().into_iter().map(move |id| (p, id)))
            .collect()
    }

    /// Whether anything must be supplied when calling this method.
    pub fn has_mandatory_attributes(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| p.is_mandatory() || !p.mandatory_attributes().is_empty())
    }

    /// Node an alternative link points at.
    pub fn alternative_node(&self, alternative: crate::Alternative) -> Option<&InvolvementNode> {
        self.parameter(alternative.parameter)?
            .forest()
            .get(alternative.node)
    }
}

#[cfg(test)]
mod tests;
