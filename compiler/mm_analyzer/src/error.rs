//! Analysis failures and their diagnostics.
//!
//! Every failure is a defect in the API model: the first one aborts the
//! analysis and the forests touched so far are not to be trusted.

use mm_concepts::{ForestError, NodePath};
use mm_diagnostic::{Diagnostic, ErrorCode};
use mm_ir::{Name, Span, StringInterner};
use mm_types::{MemberLookupError, Pool};

use crate::ParseFailure;

/// What is wrong with an `or(...)` expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum AlternationDefect {
    #[error("`or` takes two arguments, found {found}")]
    WrongArity { found: usize },
    #[error("`or` cannot be called on a receiver")]
    Receiver,
    #[error("each side must be wrapped in `mandatory(...)` or `optional(...)`")]
    MissingMarker,
    #[error("one side is mandatory and the other optional")]
    MixedMarkers,
    #[error("a simple parameter cannot be an alternative")]
    SimpleParameter,
    #[error("the second side has members of its own")]
    SecondaryHasChildren,
    #[error("both sides name the same member")]
    IdenticalSides,
}

/// Error from analyzing one documentation block.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("cannot parse live documentation: {0}")]
    Parse(#[from] ParseFailure),

    #[error("unsupported expression: {reason}")]
    UnsupportedExpression { span: Span, reason: &'static str },

    #[error("collection index other than `COLLECTION`")]
    InvalidCollectionIndex { span: Span },

    #[error("malformed alternation: {defect}")]
    MalformedAlternation { span: Span, defect: AlternationDefect },

    #[error("unknown parameter {name:?}")]
    UnknownParameter { name: Name, span: Span },

    #[error("path {path:?} does not fit parameter {parameter:?}: {source}")]
    StructuralMismatch {
        parameter: Name,
        path: NodePath,
        #[source]
        source: MemberLookupError,
        span: Span,
    },

    #[error("parameter {parameter:?} is structured and must be documented through its members")]
    SimpleParameterExpected { parameter: Name, span: Span },

    #[error("member {path:?} of parameter {parameter:?} is declared both mandatory and optional")]
    ConflictingMandatory {
        parameter: Name,
        path: NodePath,
        span: Span,
    },

    #[error("internal error: {0}")]
    Internal(#[from] ForestError),
}

impl AnalysisError {
    /// Location of the offending expression, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            AnalysisError::Parse(failure) => Some(failure.span),
            AnalysisError::UnsupportedExpression { span, .. }
            | AnalysisError::InvalidCollectionIndex { span }
            | AnalysisError::MalformedAlternation { span, .. }
            | AnalysisError::UnknownParameter { span, .. }
            | AnalysisError::StructuralMismatch { span, .. }
            | AnalysisError::SimpleParameterExpected { span, .. }
            | AnalysisError::ConflictingMandatory { span, .. } => Some(*span),
            AnalysisError::Internal(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Parse(_) => ErrorCode::E0001,
            AnalysisError::UnsupportedExpression { .. } => ErrorCode::E1001,
            AnalysisError::InvalidCollectionIndex { .. } => ErrorCode::E1002,
            AnalysisError::MalformedAlternation { .. } => ErrorCode::E1003,
            AnalysisError::UnknownParameter { .. } => ErrorCode::E2001,
            AnalysisError::StructuralMismatch { .. } => ErrorCode::E2002,
            AnalysisError::SimpleParameterExpected { .. } => ErrorCode::E2003,
            AnalysisError::ConflictingMandatory { .. } => ErrorCode::E2004,
            AnalysisError::Internal(_) => ErrorCode::E9001,
        }
    }

    /// Render for the model author, with names and types spelled out.
    pub fn to_diagnostic(&self, pool: &Pool, interner: &StringInterner) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            AnalysisError::Parse(failure) => diag
                .with_message(format!("cannot parse live documentation: {}", failure.message))
                .with_label(failure.span, "parsing stopped here"),

            AnalysisError::UnsupportedExpression { span, reason } => diag
                .with_message("unsupported expression in live documentation")
                .with_label(*span, *reason)
                .with_suggestion("write member paths as chains of calls, like `host().address()`"),

            AnalysisError::InvalidCollectionIndex { span } => diag
                .with_message("invalid collection index")
                .with_label(*span, "expected `COLLECTION`")
                .with_suggestion("use `[COLLECTION]` to refer to every element of a list"),

            AnalysisError::MalformedAlternation { span, defect } => diag
                .with_message(format!("malformed `or` expression: {defect}"))
                .with_label(*span, "in this alternation")
                .with_suggestion(
                    "write alternatives as `or(mandatory(a().b()), mandatory(a().c()))`",
                ),

            AnalysisError::UnknownParameter { name, span } => diag
                .with_message(format!("unknown parameter `{}`", interner.lookup(*name)))
                .with_label(*span, "not a parameter of this method"),

            AnalysisError::StructuralMismatch {
                parameter,
                path,
                source,
                span,
            } => diag
                .with_message(format!(
                    "`{}` does not match the type of parameter `{}`",
                    qualified(*parameter, path, interner),
                    interner.lookup(*parameter)
                ))
                .with_label(*span, "in this path")
                .with_note(lookup_note(source, pool, interner)),

            AnalysisError::SimpleParameterExpected { parameter, span } => {
                let name = interner.lookup(*parameter);
                diag.with_message(format!(
                    "parameter `{name}` cannot be declared mandatory or optional as a whole"
                ))
                .with_label(*span, "struct or list parameter")
                .with_suggestion(format!(
                    "declare the members that must be supplied, like `mandatory({name}().id())`"
                ))
            }

            AnalysisError::ConflictingMandatory {
                parameter,
                path,
                span,
            } => diag
                .with_message(format!(
                    "`{}` is declared both mandatory and optional",
                    qualified(*parameter, path, interner)
                ))
                .with_label(*span, "conflicting declaration"),

            AnalysisError::Internal(err) => diag
                .with_message(format!("internal analyzer error: {err}"))
                .with_note("this is a bug in the analyzer, not in the model"),
        }
    }
}

/// Failure of one method, naming it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("method {method:?}: {source}")]
pub struct MethodAnalysisError {
    pub method: Name,
    #[source]
    pub source: AnalysisError,
}

impl MethodAnalysisError {
    pub fn to_diagnostic(&self, pool: &Pool, interner: &StringInterner) -> Diagnostic {
        self.source
            .to_diagnostic(pool, interner)
            .with_note(format!(
                "while analyzing the live documentation of method `{}`",
                interner.lookup(self.method)
            ))
    }
}

/// `parameter.member.member`.
fn qualified(parameter: Name, path: &[Name], interner: &StringInterner) -> String {
    let mut out = interner.lookup(parameter).to_owned();
    for &name in path {
        out.push('.');
        out.push_str(interner.lookup(name));
    }
    out
}

fn lookup_note(err: &MemberLookupError, pool: &Pool, interner: &StringInterner) -> String {
    match *err {
        MemberLookupError::NotStructured { ty, kind } => {
            format!("`{}` is a {kind} and has no members", pool.type_name(ty, interner))
        }
        MemberLookupError::ListOfNonStruct { list, kind } => format!(
            "`{}` is a list of {kind} values, which have no members",
            pool.type_name(list, interner)
        ),
        MemberLookupError::UnknownMember { ty, member } => format!(
            "type `{}` has no member `{}`",
            pool.type_name(ty, interner),
            interner.lookup(member)
        ),
        MemberLookupError::UnknownType(idx) => format!("type {idx:?} is not part of the model"),
    }
}
