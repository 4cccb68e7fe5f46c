//! Category hierarchy flattening for course grouping.
//!
//! Grouping a user's courses by top-level category needs, for every visible
//! category, the id of its depth-1 ancestor and the names along its ancestor
//! chain. [`CategoryTree`] computes both in one pass; [`RenderCycle`] owns the
//! tree for exactly one render so category changes between requests are always
//! picked up.

pub mod cycle;
pub mod tree;

pub use cycle::RenderCycle;
pub use tree::CategoryTree;
