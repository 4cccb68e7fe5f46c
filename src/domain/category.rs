//! Hierarchical category model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category identifier as assigned by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course category.
///
/// `path` lists ancestor ids from the root down to the immediate parent and never
/// contains the category itself, so a top-level category (depth 1) has an empty path.
/// Hosts that store paths as delimited strings parse them before building this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub depth: u32,
    #[serde(default)]
    pub path: Vec<CategoryId>,
}

impl Category {
    /// Creates a top-level category.
    pub fn top(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            depth: 1,
            path: Vec::new(),
        }
    }

    /// Creates a nested category below the given root-first ancestor chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursenav::domain::{Category, CategoryId};
    ///
    /// let genetics = Category::nested(CategoryId(9), "Genetics", vec![CategoryId(1), CategoryId(5)]);
    /// assert_eq!(genetics.depth, 3);
    /// ```
    pub fn nested(id: CategoryId, name: impl Into<String>, path: Vec<CategoryId>) -> Self {
        let depth = u32::try_from(path.len()).map_or(u32::MAX, |d| d.saturating_add(1));
        Self {
            id,
            name: name.into(),
            depth,
            path,
        }
    }

    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.depth <= 1
    }
}
