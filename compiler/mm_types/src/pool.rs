//! Type pool: storage for every type of an API model.

use mm_ir::Name;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{EnumData, Idx, Member, PrimitiveKind, StructData, TypeData};

/// Error raised while building the pool.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PoolError {
    #[error("a type named {0:?} is already declared")]
    DuplicateType(Name),
    #[error("{0:?} is not a struct type")]
    NotAStruct(Idx),
    #[error("members of struct {0:?} are already defined")]
    AlreadyDefined(Idx),
    #[error("struct {ty:?} declares member {member:?} twice")]
    DuplicateMember { ty: Idx, member: Name },
}

/// Storage for all types of a model, addressed by [`Idx`].
///
/// List types are interned: `list(e)` returns the same index for the same
/// element type. Named types (structs, enums) are unique by name.
pub struct Pool {
    items: Vec<TypeData>,
    lists: FxHashMap<Idx, Idx>,
    named: FxHashMap<Name, Idx>,
}

impl Pool {
    /// Create a pool with the primitive types pre-interned.
    pub fn new() -> Self {
        let mut items = Vec::with_capacity(64);
        items.extend(PrimitiveKind::ALL.map(TypeData::Primitive));
        Pool {
            items,
            lists: FxHashMap::default(),
            named: FxHashMap::default(),
        }
    }

    /// Number of types, including primitives.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: primitives are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, data: TypeData) -> Idx {
        let raw = u32::try_from(self.items.len()).unwrap_or_else(|_| panic!("type pool overflow"));
        self.items.push(data);
        Idx::from_raw(raw)
    }

    fn claim_name(&self, name: Name) -> Result<(), PoolError> {
        if self.named.contains_key(&name) {
            return Err(PoolError::DuplicateType(name));
        }
        Ok(())
    }

    // === Construction ===

    /// Create (or reuse) the list type with the given element type.
    pub fn list(&mut self, element: Idx) -> Idx {
        if let Some(&idx) = self.lists.get(&element) {
            return idx;
        }
        let idx = self.push(TypeData::List { element });
        self.lists.insert(element, idx);
        idx
    }

    /// Create an enum type.
    pub fn enum_type(&mut self, name: Name, values: Vec<Name>) -> Result<Idx, PoolError> {
        self.claim_name(name)?;
        let idx = self.push(TypeData::Enum(EnumData { name, values }));
        self.named.insert(name, idx);
        Ok(idx)
    }

    /// Declare a struct whose members are defined later.
    pub fn declare_struct(&mut self, name: Name) -> Result<Idx, PoolError> {
        self.claim_name(name)?;
        let idx = self.push(TypeData::Struct(StructData {
            name,
            members: Vec::new(),
            defined: false,
        }));
        self.named.insert(name, idx);
        Ok(idx)
    }

    /// Define the members of a declared struct. Members can only be defined once.
    pub fn define_members(&mut self, ty: Idx, members: Vec<Member>) -> Result<(), PoolError> {
        let mut seen = FxHashSet::default();
        for member in &members {
            if !seen.insert(member.name) {
                return Err(PoolError::DuplicateMember {
                    ty,
                    member: member.name,
                });
            }
        }

        match self.items.get_mut(ty.index()) {
            Some(TypeData::Struct(data)) if data.defined => Err(PoolError::AlreadyDefined(ty)),
            Some(TypeData::Struct(data)) => {
                data.members = members;
                data.defined = true;
                Ok(())
            }
            _ => Err(PoolError::NotAStruct(ty)),
        }
    }

    /// Declare and define a struct in one step.
    pub fn struct_type(&mut self, name: Name, members: Vec<Member>) -> Result<Idx, PoolError> {
        let idx = self.declare_struct(name)?;
        self.define_members(idx, members)?;
        Ok(idx)
    }

    // === Queries ===

    /// Payload of a type.
    ///
    /// # Panics
    /// Panics if `idx` does not belong to this pool.
    #[track_caller]
    pub fn data(&self, idx: Idx) -> &TypeData {
        &self.items[idx.index()]
    }

    /// Payload of a type, if `idx` belongs to this pool.
    pub fn get(&self, idx: Idx) -> Option<&TypeData> {
        self.items.get(idx.index())
    }

    /// Named struct or enum type.
    pub fn by_name(&self, name: Name) -> Option<Idx> {
        self.named.get(&name).copied()
    }

    /// Primitive or enum.
    pub fn is_simple(&self, idx: Idx) -> bool {
        self.get(idx).is_some_and(TypeData::is_simple)
    }

    /// Struct or list.
    pub fn is_structured(&self, idx: Idx) -> bool {
        self.get(idx).is_some_and(TypeData::is_structured)
    }

    /// Element type of a list.
    pub fn list_element(&self, idx: Idx) -> Option<Idx> {
        match self.get(idx)? {
            TypeData::List { element } => Some(*element),
            _ => None,
        }
    }

    /// Type of a named member of a struct.
    pub fn struct_member(&self, idx: Idx, name: Name) -> Option<Idx> {
        match self.get(idx)? {
            TypeData::Struct(data) => data.member(name).map(|m| m.ty),
            _ => None,
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
