use std::fmt;

/// Error codes for analysis diagnostics.
///
/// Format: E#### where the first digit indicates the kind of defect:
/// - E0xxx: Source errors (reported by the expression parser)
/// - E1xxx: Expression shape errors
/// - E2xxx: Model errors (expression does not fit the parameters or types)
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Source Errors (E0xxx)
    /// Live documentation could not be parsed
    E0001,

    // Expression Errors (E1xxx)
    /// Unsupported expression where a path segment is expected
    E1001,
    /// Collection index other than `COLLECTION`
    E1002,
    /// Malformed `or` expression
    E1003,

    // Model Errors (E2xxx)
    /// Unknown parameter
    E2001,
    /// Path does not match the parameter's type
    E2002,
    /// Structured parameter used as a simple one
    E2003,
    /// Leaf declared both mandatory and optional
    E2004,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line explanation, for `--explain`-style output.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "the live documentation block could not be parsed",
            ErrorCode::E1001 => {
                "only chains of parameterless calls, `mandatory`, `optional` and `or` are allowed"
            }
            ErrorCode::E1002 => "the only valid index in live documentation is `[COLLECTION]`",
            ErrorCode::E1003 => {
                "`or` takes exactly two `mandatory(...)` or two `optional(...)` member paths"
            }
            ErrorCode::E2001 => "the path starts with a name that is not a parameter of the method",
            ErrorCode::E2002 => "the path names a member the parameter's type does not have",
            ErrorCode::E2003 => "a struct or list parameter must be documented through its members",
            ErrorCode::E2004 => "the same member is declared both mandatory and optional",
            ErrorCode::E9001 => "internal error in the analyzer",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
