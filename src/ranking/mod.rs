//! Ranking of a user's courses by recent activity.
//!
//! # Modules
//!
//! - `recency`: The recency comparator and stable sort
//! - `merge`: Combines last-access and enrolment rows into one signal per course

pub mod merge;
pub mod recency;

pub use merge::{merge_recency, RankedCourse};
pub use recency::{compare_recency, sort_by_recency, HasRecency};
