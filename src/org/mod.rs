//! Organization chart core
//!
//! Node model, tree builders, view modes and the service that ties them to
//! the directory.

pub mod builder;
pub mod node;
pub mod service;
pub mod view;

pub use builder::{BuiltTree, Diagnostic};
pub use node::{LeafKind, NodeKey, OrgNode, Role};
pub use service::OrganizationService;
pub use view::{AdministratorView, ChartView};
