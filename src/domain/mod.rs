//! Domain layer: the records the navigation core operates on.
//!
//! These types are independent of any host platform. Identifiers are newtypes,
//! recency is a tagged variant instead of two optional fields, and category paths
//! arrive already parsed into id sequences.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`course`]: Courses, course memberships and their recency signal
//! - [`category`]: Hierarchical categories

pub mod category;
pub mod course;
pub mod error;

pub use category::{Category, CategoryId};
pub use course::{Course, CourseId, CourseMembership, Recency};
pub use error::{CourseNavError, Result};
