//! Flattened category hierarchy.

use crate::domain::error::{CourseNavError, Result};
use crate::domain::{Category, CategoryId};
use std::collections::HashMap;

/// Per-category result of flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FlatCategory {
    name: String,
    top_ancestor: CategoryId,
    /// Nearest ancestor first; `[own name]` for top-level categories.
    ancestor_names: Vec<String>,
}

/// Every visible category mapped to its top-level ancestor and ancestor names.
///
/// Built once per render in O(categories × depth); lookups are O(1).
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    entries: HashMap<CategoryId, FlatCategory>,
}

impl CategoryTree {
    /// Flattens a complete category set.
    ///
    /// Input order does not matter. Each nested category's `path` must name only
    /// categories present in the set.
    ///
    /// # Errors
    ///
    /// - [`CourseNavError::MissingAncestor`] if a path references an absent id
    /// - [`CourseNavError::MalformedPath`] if a nested category's path does not hold
    ///   exactly `depth - 1` ancestors
    ///
    /// Either fails the whole pass; no partial tree is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursenav::categories::CategoryTree;
    /// use coursenav::domain::{Category, CategoryId};
    ///
    /// let tree = CategoryTree::build(&[
    ///     Category::top(CategoryId(1), "Science"),
    ///     Category::nested(CategoryId(5), "Biology", vec![CategoryId(1)]),
    ///     Category::nested(CategoryId(9), "Genetics", vec![CategoryId(1), CategoryId(5)]),
    /// ])?;
    ///
    /// let (top, names) = tree.top_ancestor_and_names(CategoryId(9))?;
    /// assert_eq!(top, CategoryId(1));
    /// assert_eq!(names, ["Biology", "Science"]);
    /// # Ok::<(), coursenav::CourseNavError>(())
    /// ```
    pub fn build(categories: &[Category]) -> Result<Self> {
        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .map(|category| (category.id, category.name.as_str()))
            .collect();

        let mut entries = HashMap::with_capacity(categories.len());
        for category in categories {
            let flat = if category.is_top_level() {
                FlatCategory {
                    name: category.name.clone(),
                    top_ancestor: category.id,
                    ancestor_names: vec![category.name.clone()],
                }
            } else {
                let malformed = CourseNavError::MalformedPath {
                    category: category.id,
                    depth: category.depth,
                };
                if u32::try_from(category.path.len()).ok() != Some(category.depth - 1) {
                    return Err(malformed);
                }
                let top_ancestor = *category.path.first().ok_or(malformed)?;

                let mut ancestor_names = category
                    .path
                    .iter()
                    .map(|ancestor| {
                        names.get(ancestor).map(|name| (*name).to_string()).ok_or(
                            CourseNavError::MissingAncestor {
                                category: category.id,
                                ancestor: *ancestor,
                            },
                        )
                    })
                    .collect::<Result<Vec<_>>>()?;
                ancestor_names.reverse();

                FlatCategory {
                    name: category.name.clone(),
                    top_ancestor,
                    ancestor_names,
                }
            };
            entries.insert(category.id, flat);
        }

        tracing::debug!(categories = entries.len(), "flattened category tree");
        Ok(Self { entries })
    }

    /// Returns the top-level ancestor id and ancestor names (nearest first).
    ///
    /// # Errors
    ///
    /// Returns [`CourseNavError::UnknownCategory`] if `id` was not in the set.
    pub fn top_ancestor_and_names(&self, id: CategoryId) -> Result<(CategoryId, &[String])> {
        let flat = self.entry(id)?;
        Ok((flat.top_ancestor, flat.ancestor_names.as_slice()))
    }

    /// Returns the top-level ancestor id.
    ///
    /// # Errors
    ///
    /// Returns [`CourseNavError::UnknownCategory`] if `id` was not in the set.
    pub fn top_ancestor(&self, id: CategoryId) -> Result<CategoryId> {
        Ok(self.entry(id)?.top_ancestor)
    }

    /// Returns the display name of the top-level ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`CourseNavError::UnknownCategory`] if `id` was not in the set.
    pub fn top_ancestor_name(&self, id: CategoryId) -> Result<&str> {
        let top = self.top_ancestor(id)?;
        Ok(self.entry(top)?.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: CategoryId) -> Result<&FlatCategory> {
        self.entries
            .get(&id)
            .ok_or(CourseNavError::UnknownCategory(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science() -> Vec<Category> {
        vec![
            Category::nested(CategoryId(9), "Genetics", vec![CategoryId(1), CategoryId(5)]),
            Category::top(CategoryId(1), "Science"),
            Category::nested(CategoryId(5), "Biology", vec![CategoryId(1)]),
            Category::top(CategoryId(2), "Arts"),
        ]
    }

    #[test]
    fn top_level_category_maps_to_itself() {
        let tree = CategoryTree::build(&science()).unwrap();
        let (top, names) = tree.top_ancestor_and_names(CategoryId(2)).unwrap();
        assert_eq!(top, CategoryId(2));
        assert_eq!(names, ["Arts"]);
    }

    #[test]
    fn nested_category_resolves_root_and_nearest_first_names() {
        let tree = CategoryTree::build(&science()).unwrap();
        let (top, names) = tree.top_ancestor_and_names(CategoryId(9)).unwrap();
        assert_eq!(top, CategoryId(1));
        assert_eq!(names, ["Biology", "Science"]);

        let (top, names) = tree.top_ancestor_and_names(CategoryId(5)).unwrap();
        assert_eq!(top, CategoryId(1));
        assert_eq!(names, ["Science"]);
        assert_eq!(tree.top_ancestor_name(CategoryId(9)).unwrap(), "Science");
    }

    #[test]
    fn missing_ancestor_fails_the_whole_pass() {
        let categories = vec![
            Category::top(CategoryId(1), "Science"),
            Category::nested(CategoryId(9), "Genetics", vec![CategoryId(1), CategoryId(5)]),
        ];
        let err = CategoryTree::build(&categories).unwrap_err();
        assert!(matches!(
            err,
            CourseNavError::MissingAncestor {
                category: CategoryId(9),
                ancestor: CategoryId(5),
            }
        ));
    }

    #[test]
    fn nested_category_without_path_is_rejected() {
        let categories = vec![Category {
            id: CategoryId(4),
            name: "Orphan".to_string(),
            depth: 2,
            path: Vec::new(),
        }];
        let err = CategoryTree::build(&categories).unwrap_err();
        assert!(matches!(err, CourseNavError::MalformedPath { depth: 2, .. }));
    }

    #[test]
    fn truncated_path_is_rejected_instead_of_stopping_short_of_the_root() {
        let mut categories = science();
        categories.push(Category {
            id: CategoryId(12),
            name: "Epigenetics".to_string(),
            depth: 3,
            path: vec![CategoryId(5)],
        });
        let err = CategoryTree::build(&categories).unwrap_err();
        assert!(matches!(
            err,
            CourseNavError::MalformedPath {
                category: CategoryId(12),
                depth: 3,
            }
        ));
    }

    #[test]
    fn unknown_lookup_is_an_error() {
        let tree = CategoryTree::build(&science()).unwrap();
        assert!(matches!(
            tree.top_ancestor_and_names(CategoryId(77)),
            Err(CourseNavError::UnknownCategory(CategoryId(77)))
        ));
    }
}
