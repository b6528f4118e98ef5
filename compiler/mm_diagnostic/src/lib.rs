//! Diagnostic system for reporting malformed live documentation.
//!
//! Every failure of the input-detail analysis is a defect in the API model.
//! Diagnostics carry what the tool running the analysis needs to halt and
//! tell the model author what to fix:
//! - Error codes for searchability
//! - Clear messages (what went wrong, naming the parameter and path)
//! - Primary span (which expression)
//! - Notes and suggestions (how to fix)

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
