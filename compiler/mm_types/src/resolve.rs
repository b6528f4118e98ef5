//! Member resolution: the one structural rule of member paths.

use mm_ir::Name;

use crate::{Idx, Pool, TypeData};

/// Why a member could not be resolved on a type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MemberLookupError {
    /// The current type has no members to descend into.
    #[error("type {ty:?} is a {kind}, not a struct or a list of structs")]
    NotStructured { ty: Idx, kind: &'static str },
    /// A list whose elements are not structs.
    #[error("list {list:?} has {kind} elements, not structs")]
    ListOfNonStruct { list: Idx, kind: &'static str },
    /// The struct has no member with that name.
    #[error("struct {ty:?} has no member {member:?}")]
    UnknownMember { ty: Idx, member: Name },
    /// The index does not belong to the pool.
    #[error("type {0:?} is not in the pool")]
    UnknownType(Idx),
}

/// Resolve the type of member `name` reached from `current`.
///
/// - Struct: the member's type.
/// - List: the member of the element type, which must be a struct.
/// - Anything else fails.
pub fn resolve_member(pool: &Pool, current: Idx, name: Name) -> Result<Idx, MemberLookupError> {
    let struct_idx = match pool.get(current) {
        None => return Err(MemberLookupError::UnknownType(current)),
        Some(TypeData::Struct(_)) => current,
        Some(TypeData::List { element }) => match pool.get(*element) {
            Some(TypeData::Struct(_)) => *element,
            Some(other) => {
                return Err(MemberLookupError::ListOfNonStruct {
                    list: current,
                    kind: other.kind_str(),
                })
            }
            None => return Err(MemberLookupError::UnknownType(*element)),
        },
        Some(other) => {
            return Err(MemberLookupError::NotStructured {
                ty: current,
                kind: other.kind_str(),
            })
        }
    };

    pool.struct_member(struct_idx, name)
        .ok_or(MemberLookupError::UnknownMember {
            ty: struct_idx,
            member: name,
        })
}
