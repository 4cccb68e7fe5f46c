//! Error types for course navigation.
//!
//! This module defines the centralized error type [`CourseNavError`] and a type alias
//! [`Result`] used throughout the crate. Missing recency timestamps are valid states
//! and never surface here; the variants below are either data-integrity faults in the
//! category set or failures reading settings and platform snapshots.

use crate::domain::category::CategoryId;
use thiserror::Error;

/// The main error type for course navigation operations.
///
/// # Examples
///
/// ```
/// use coursenav::domain::{CategoryId, CourseNavError};
///
/// let err = CourseNavError::MissingAncestor {
///     category: CategoryId(9),
///     ancestor: CategoryId(5),
/// };
/// assert_eq!(err.to_string(), "Category 9 references missing ancestor 5");
/// ```
#[derive(Debug, Error)]
pub enum CourseNavError {
    /// A category path names an ancestor that is not in the supplied set.
    ///
    /// The visible categories must form a closed set together with their full
    /// ancestor chains. Grouping cannot be computed correctly otherwise, so the
    /// whole flattening pass fails.
    #[error("Category {category} references missing ancestor {ancestor}")]
    MissingAncestor {
        category: CategoryId,
        ancestor: CategoryId,
    },

    /// A nested category's path does not hold exactly `depth - 1` ancestors.
    #[error("Category {category} has depth {depth} but a path of a different length")]
    MalformedPath { category: CategoryId, depth: u32 },

    /// Lookup of a category outside the flattened set.
    #[error("Unknown category {0}")]
    UnknownCategory(CategoryId),

    /// Settings are unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The platform data could not be loaded or parsed.
    #[error("Source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for course navigation operations.
pub type Result<T> = std::result::Result<T, CourseNavError>;
