//! Concepts of the metamodel touched by input-detail analysis.
//!
//! - [`Parameter`]: an argument of an API method, with its type, its
//!   `mandatory` flag (simple parameters only) and its [`MemberForest`].
//! - [`Method`]: a named, ordered list of parameters.
//! - [`MemberForest`]: member-involvement trees recording which nested
//!   members of a structured parameter are mandatory, optional, or
//!   alternatives of each other.
//!
//! For a `cluster` parameter the forest looks like:
//!
//! ```text
//! cluster
//!     name                          (string, mandatory)
//!     version
//!         major                     (integer, mandatory)
//!         minor                     (integer, mandatory)
//!     fencing_policy
//!         enabled                   (boolean, optional)
//!         skip_if_connectivity_broken
//!             enabled               (boolean, optional)
//!             threshold             (integer, optional)
//! ```

mod forest;
mod method;
mod parameter;
mod render;

pub use forest::{Alternative, ForestError, InvolvementNode, MemberForest, NodeId, NodePath};
pub use method::Method;
pub use parameter::{parameter_by_name, Direction, Parameter};
pub use render::{render_parameter, render_parameters};
