//! Structural type system for the metamodel.
//!
//! Types of an API model are stored in a [`Pool`] and referenced by their
//! 32-bit [`Idx`]. The variants are the ones live documentation can walk
//! through:
//!
//! - `Primitive`: boolean, integer, decimal, string, date (fixed indices)
//! - `Enum`: a named set of values
//! - `Struct`: named members, each with a type
//! - `List`: repeated elements of one type
//!
//! Structs can be declared before their members are known, so recursive
//! models (a `host` whose `cluster` has `hosts`) are expressible.
//!
//! The only structural rule the analysis needs is [`resolve_member`].

mod data;
mod format;
mod idx;
mod pool;
mod resolve;

pub use data::{EnumData, Member, PrimitiveKind, StructData, TypeData};
pub use idx::Idx;
pub use pool::{Pool, PoolError};
pub use resolve::{resolve_member, MemberLookupError};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, Member};
    mm_ir::static_assert_size!(Idx, 4);
    mm_ir::static_assert_size!(Member, 8);
}
