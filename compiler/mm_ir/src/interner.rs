//! String interner for metamodel identifiers.
//!
//! Provides O(1) interning and lookup. The table is guarded by a
//! `parking_lot::RwLock` so one interner can be shared by independent
//! analyses of different methods.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The table exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Interned strings and their reverse index.
struct InternTable {
    /// Map from string content to its name.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<&'static str>,
}

/// String interner with pre-interned live documentation keywords.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string and keywords pre-interned.
    pub fn new() -> Self {
        // Order must match the `Name` keyword constants.
        const PRE_INTERNED: [&str; Name::PRE_INTERNED as usize] =
            ["", "mandatory", "optional", "collection", "or"];

        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        for (i, &s) in PRE_INTERNED.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "pre-interned table has five entries"
            )]
            let name = Name::from_raw(i as u32);
            table.map.insert(s, name);
            table.strings.push(s);
        }

        Self {
            table: RwLock::new(table),
        }
    }

    /// Try to intern a string verbatim, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        // Leak the string to get 'static lifetime; names live as long as the model.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string verbatim.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for fallible interning.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Intern an identifier after normalizing it into lowercase words.
    ///
    /// `dataCenter`, `DataCenter` and `data_center` all produce the same name.
    pub fn intern_name(&self, text: &str) -> Name {
        self.intern(&normalize_words(text))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an identifier into lowercase words joined by `_`.
///
/// Word boundaries are `_`, `-`, whitespace, a lowercase letter or digit
/// followed by an uppercase letter, and the last capital of an acronym that
/// starts a new word (`VMPool` is `vm_pool`).
pub fn normalize_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    let mut in_word = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            in_word = false;
            continue;
        }

        let boundary = in_word && c.is_uppercase() && {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
        };

        if (!in_word || boundary) && !out.is_empty() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        in_word = true;
    }

    out
}
