//! Navigation tree: data model, permission-based filtering and
//! active-path matching for the sidebar menu.
//!
//! The tree itself is defined statically in the frontend; this module owns
//! the node shape, the startup validation pass and the pure functions the
//! renderer calls on every permission or location change.

pub mod active;
pub mod filter;
pub mod tree;

pub use active::{has_active_descendant, is_active, is_highlighted};
pub use filter::filter_tree;
pub use tree::{validate_tree, NavNode, TreeError, MAX_TREE_DEPTH};
