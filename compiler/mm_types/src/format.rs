//! Human-readable type names.

use mm_ir::StringInterner;

use crate::{Idx, Pool, TypeData};

impl Pool {
    /// Render a type for messages and documentation.
    ///
    /// Primitives render as their lowercase name, named types as their
    /// canonical name and lists as `element[]`.
    pub fn type_name(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_type_name(idx, interner, &mut out);
        out
    }

    fn write_type_name(&self, idx: Idx, interner: &StringInterner, out: &mut String) {
        match self.get(idx) {
            None => out.push_str("<unknown>"),
            Some(TypeData::Primitive(kind)) => out.push_str(kind.as_str()),
            Some(TypeData::Enum(data)) => out.push_str(interner.lookup(data.name)),
            Some(TypeData::Struct(data)) => out.push_str(interner.lookup(data.name)),
            Some(TypeData::List { element }) => {
                self.write_type_name(*element, interner, out);
                out.push_str("[]");
            }
        }
    }
}
