//! Input-detail analysis for the metamodel compiler.
//!
//! Model authors describe the input of a method with live documentation:
//!
//! ```text
//! mandatory(cluster().name())
//! mandatory(cluster().version().major())
//! optional(cluster().description())
//! or(mandatory(host().address()), mandatory(host().id()))
//! optional(vm().disks()[COLLECTION].format())
//! ```
//!
//! The analyzer turns these statements into the member-involvement forests
//! of the method's [`Parameter`](mm_concepts::Parameter)s: which nested
//! members are mandatory, which are optional, and which pairs exclude each
//! other. Results are observed on the mutated parameters; the entry points
//! return only success or the first failure.
//!
//! # Pipeline
//!
//! 1. An [`ExpressionParser`] turns the source into an expression arena.
//! 2. Each statement is unwrapped from its `mandatory`/`optional` marker and
//!    its accessor chain is flattened into a path (`path`).
//! 3. The tree builder resolves the path against the parameter's type and
//!    records it in the forest (`tree`).
//! 4. `or(...)` statements record both sides, link them, and detach the
//!    second one (`alternation`).

mod alternation;
mod config;
mod driver;
mod error;
mod parser;
mod path;
mod tree;

#[cfg(test)]
mod test_helpers;

pub use config::{AnalyzerConfig, ConflictPolicy};
pub use driver::{analyze_expressions, analyze_input, analyze_method, AnalysisContext};
pub use error::{AlternationDefect, AnalysisError, MethodAnalysisError};
pub use parser::{ExpressionParser, ParseFailure, ParsedExpressions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mm_analyzer=debug` or `RUST_LOG=mm_analyzer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
