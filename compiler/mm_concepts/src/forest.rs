//! Member-involvement forest.
//!
//! Nodes live in a per-parameter arena and refer to each other by
//! [`NodeId`]. A node is created the first time a path segment is visited
//! and reused afterwards, so forests merge across expressions. Detaching a
//! node removes it from its parent's children (or from the roots) but keeps
//! it in the arena: alternatives still point at it, and its handle, type and
//! parent link stay valid.

use mm_ir::Name;
use mm_types::Idx;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Names from a forest root down to a node.
pub type NodePath = SmallVec<[Name; 8]>;

/// Index of a node in its forest's arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One-directional link from a primary leaf to the detached leaf it excludes.
///
/// The secondary may live in another parameter's forest, so the link names
/// that parameter as well as the node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub parameter: Name,
    pub node: NodeId,
}

/// Error raised by forest mutations that would break an invariant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ForestError {
    #[error("node {node:?} already has type {existing:?}, refusing to change it to {requested:?}")]
    TypeAlreadyResolved {
        node: NodeId,
        existing: Idx,
        requested: Idx,
    },
    #[error("node {0:?} is already detached")]
    NotAttached(NodeId),
}

/// One step of a member path.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvolvementNode {
    name: Name,
    /// Type reached by following the path from the parameter. Write-once.
    ty: Option<Idx>,
    /// Set only on nodes where an analyzed expression ends.
    mandatory: Option<bool>,
    parent: Option<NodeId>,
    children: FxHashMap<Name, NodeId>,
    alternative: Option<Alternative>,
    attached: bool,
}

impl InvolvementNode {
    fn new(name: Name, parent: Option<NodeId>) -> Self {
        InvolvementNode {
            name,
            ty: None,
            mandatory: None,
            parent,
            children: FxHashMap::default(),
            alternative: None,
            attached: true,
        }
    }

    pub fn name(&self) -> Name {
        self.name
    }

    /// Resolved type, if this node has been visited by the analyzer.
    pub fn ty(&self) -> Option<Idx> {
        self.ty
    }

    /// Declared status, `None` for nodes that are only path scaffolding.
    pub fn mandatory(&self) -> Option<bool> {
        self.mandatory
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory == Some(true)
    }

    /// A node where at least one analyzed expression ended.
    pub fn is_leaf(&self) -> bool {
        self.mandatory.is_some()
    }

    /// Parent node. Kept after detachment so the node's path stays known.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, name: Name) -> Option<NodeId> {
        self.children.get(&name).copied()
    }

    /// Children ordered by name.
    pub fn children(&self) -> Vec<NodeId> {
        sorted_ids(&self.children)
    }

    pub fn alternative(&self) -> Option<Alternative> {
        self.alternative
    }

    /// Reachable from the forest roots.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Member-involvement trees of one parameter.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberForest {
    nodes: Vec<InvolvementNode>,
    roots: FxHashMap<Name, NodeId>,
}

impl MemberForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// No attached trees.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of attached trees.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// # Panics
    /// Panics if `id` does not belong to this forest.
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &InvolvementNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&InvolvementNode> {
        self.nodes.get(id.index())
    }

    pub fn root(&self, name: Name) -> Option<NodeId> {
        self.roots.get(&name).copied()
    }

    /// Attached roots ordered by name.
    pub fn roots(&self) -> Vec<NodeId> {
        sorted_ids(&self.roots)
    }

    /// Child of `parent` named `name`.
    pub fn child(&self, parent: NodeId, name: Name) -> Option<NodeId> {
        self.node(parent).child(name)
    }

    /// Node reached by following `path` from the roots, if every step exists.
    pub fn find(&self, path: &[Name]) -> Option<NodeId> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root(*first)?;
        for &name in rest {
            current = self.child(current, name)?;
        }
        Some(current)
    }

    fn alloc(&mut self, node: InvolvementNode) -> NodeId {
        let index =
            u32::try_from(self.nodes.len()).unwrap_or_else(|_| panic!("member forest overflow"));
        self.nodes.push(node);
        NodeId::new(index)
    }

    /// Root named `name`, created if absent. Returns whether it was created.
    pub fn get_or_insert_root(&mut self, name: Name) -> (NodeId, bool) {
        if let Some(id) = self.root(name) {
            return (id, false);
        }
        let id = self.alloc(InvolvementNode::new(name, None));
        self.roots.insert(name, id);
        (id, true)
    }

    /// Child of `parent` named `name`, created if absent. Returns whether it was created.
    pub fn get_or_insert_child(&mut self, parent: NodeId, name: Name) -> (NodeId, bool) {
        if let Some(id) = self.child(parent, name) {
            return (id, false);
        }
        let id = self.alloc(InvolvementNode::new(name, Some(parent)));
        self.nodes[parent.index()].children.insert(name, id);
        (id, true)
    }

    /// Record the node's type. Setting the same type again is a no-op.
    pub fn set_type(&mut self, id: NodeId, ty: Idx) -> Result<(), ForestError> {
        let node = &mut self.nodes[id.index()];
        match node.ty {
            None => {
                node.ty = Some(ty);
                Ok(())
            }
            Some(existing) if existing == ty => Ok(()),
            Some(existing) => Err(ForestError::TypeAlreadyResolved {
                node: id,
                existing,
                requested: ty,
            }),
        }
    }

    /// Overwrite the node's status, returning the previous one.
    pub fn set_mandatory(&mut self, id: NodeId, mandatory: bool) -> Option<bool> {
        self.nodes[id.index()].mandatory.replace(mandatory)
    }

    pub fn set_alternative(&mut self, id: NodeId, alternative: Alternative) {
        self.nodes[id.index()].alternative = Some(alternative);
    }

    /// Remove the node from its parent's children, or from the roots.
    pub fn detach(&mut self, id: NodeId) -> Result<(), ForestError> {
        let node = &self.nodes[id.index()];
        if !node.attached {
            return Err(ForestError::NotAttached(id));
        }
        let (name, parent) = (node.name, node.parent);
        match parent {
            Some(parent) => {
                self.nodes[parent.index()].children.remove(&name);
            }
            None => {
                self.roots.remove(&name);
            }
        }
        self.nodes[id.index()].attached = false;
        Ok(())
    }

    /// Names from the root down to `id`.
    pub fn path(&self, id: NodeId) -> NodePath {
        let mut path = NodePath::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            path.push(node.name);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Attached nodes in depth-first order, children ordered by name.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots().into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children().into_iter().rev());
        }
        out
    }

    /// Attached nodes where an analyzed expression ended, in walk order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.node(id).is_leaf())
            .collect()
    }
}

fn sorted_ids(map: &FxHashMap<Name, NodeId>) -> Vec<NodeId> {
    let mut entries: Vec<(Name, NodeId)> = map.iter().map(|(&n, &id)| (n, id)).collect();
    entries.sort_unstable_by_key(|&(name, _)| name);
    entries.into_iter().map(|(_, id)| id).collect()
}
