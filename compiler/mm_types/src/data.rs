//! Type payloads stored in the pool.

use mm_ir::Name;

use crate::Idx;

/// Built-in scalar types of the metamodel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Decimal,
    String,
    Date,
}

impl PrimitiveKind {
    /// All kinds, in index order.
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Integer,
        PrimitiveKind::Decimal,
        PrimitiveKind::String,
        PrimitiveKind::Date,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::String => "string",
            PrimitiveKind::Date => "date",
        }
    }

    /// The kind at a pre-interned index, if any.
    pub const fn from_idx(idx: Idx) -> Option<Self> {
        match idx.raw() {
            0 => Some(PrimitiveKind::Boolean),
            1 => Some(PrimitiveKind::Integer),
            2 => Some(PrimitiveKind::Decimal),
            3 => Some(PrimitiveKind::String),
            4 => Some(PrimitiveKind::Date),
            _ => None,
        }
    }
}

/// A named member of a struct type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub name: Name,
    pub ty: Idx,
}

impl Member {
    pub const fn new(name: Name, ty: Idx) -> Self {
        Member { name, ty }
    }
}

/// Struct type payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructData {
    pub name: Name,
    /// Members in declaration order. Empty until defined.
    pub members: Vec<Member>,
    /// Whether `define_members` has been called.
    pub defined: bool,
}

impl StructData {
    /// Look up a member by name.
    pub fn member(&self, name: Name) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Enum type payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumData {
    pub name: Name,
    pub values: Vec<Name>,
}

/// A type in the pool.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    Primitive(PrimitiveKind),
    Enum(EnumData),
    Struct(StructData),
    List { element: Idx },
}

impl TypeData {
    /// Primitive or enum: a value with no members to walk into.
    pub const fn is_simple(&self) -> bool {
        matches!(self, TypeData::Primitive(_) | TypeData::Enum(_))
    }

    /// Struct or list: a value whose content is described by member paths.
    pub const fn is_structured(&self) -> bool {
        matches!(self, TypeData::Struct(_) | TypeData::List { .. })
    }

    /// Short variant label used in messages.
    pub const fn kind_str(&self) -> &'static str {
        match self {
            TypeData::Primitive(_) => "primitive",
            TypeData::Enum(_) => "enum",
            TypeData::Struct(_) => "struct",
            TypeData::List { .. } => "list",
        }
    }
}
