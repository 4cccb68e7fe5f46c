//! Render-scoped category cache.

use crate::categories::tree::CategoryTree;
use crate::domain::error::Result;
use crate::source::CourseSource;
use chrono::{DateTime, Utc};

/// State that lives for exactly one page render.
///
/// Create one at the start of every render and drop it afterwards. The category
/// tree is built lazily on first use and reused for the rest of the render; a
/// fresh cycle always starts empty, so categories edited between requests are
/// never served stale.
///
/// # Examples
///
/// ```
/// use coursenav::categories::RenderCycle;
///
/// let cycle = RenderCycle::new();
/// assert!(!cycle.has_categories());
/// ```
#[derive(Debug)]
pub struct RenderCycle {
    started_at: DateTime<Utc>,
    categories: Option<CategoryTree>,
}

impl Default for RenderCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCycle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            categories: None,
        }
    }

    /// When this render started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns `true` once the category tree has been built for this render.
    #[must_use]
    pub const fn has_categories(&self) -> bool {
        self.categories.is_some()
    }

    /// Returns the flattened category tree, building it on first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the category set is not closed
    /// under ancestry. A failed build leaves the cache empty.
    pub fn categories(&mut self, source: &dyn CourseSource) -> Result<&CategoryTree> {
        let tree = match self.categories.take() {
            Some(tree) => tree,
            None => {
                tracing::debug!(started_at = %self.started_at, "building category tree for render");
                CategoryTree::build(&source.categories()?)?
            }
        };
        Ok(self.categories.insert(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryId, Course, CourseNavError};
    use crate::source::{CourseOrder, Enrolment, LastAccess, Viewer};
    use std::cell::{Cell, RefCell};

    struct CountingSource {
        categories: RefCell<Vec<Category>>,
        reads: Cell<usize>,
    }

    impl CountingSource {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories: RefCell::new(categories),
                reads: Cell::new(0),
            }
        }
    }

    impl CourseSource for CountingSource {
        fn viewer(&self) -> Result<Viewer> {
            Ok(Viewer::member())
        }

        fn enrolled_courses(&self, _order: CourseOrder) -> Result<Vec<Course>> {
            Ok(Vec::new())
        }

        fn last_access(&self) -> Result<Vec<LastAccess>> {
            Ok(Vec::new())
        }

        fn enrolments(&self) -> Result<Vec<Enrolment>> {
            Ok(Vec::new())
        }

        fn categories(&self) -> Result<Vec<Category>> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.categories.borrow().clone())
        }
    }

    #[test]
    fn builds_once_per_cycle() {
        let source = CountingSource::new(vec![Category::top(CategoryId(1), "Science")]);
        let mut cycle = RenderCycle::new();

        cycle.categories(&source).unwrap();
        cycle.categories(&source).unwrap();
        assert_eq!(source.reads.get(), 1);
        assert!(cycle.has_categories());
    }

    #[test]
    fn new_cycle_sees_changed_categories() {
        let source = CountingSource::new(vec![Category::top(CategoryId(1), "Science")]);
        let mut first = RenderCycle::new();
        assert_eq!(
            first.categories(&source).unwrap().top_ancestor_name(CategoryId(1)).unwrap(),
            "Science"
        );

        source.categories.borrow_mut()[0].name = "Sciences".to_string();

        let mut second = RenderCycle::new();
        assert_eq!(
            second.categories(&source).unwrap().top_ancestor_name(CategoryId(1)).unwrap(),
            "Sciences"
        );
        assert_eq!(source.reads.get(), 2);
    }

    #[test]
    fn failed_build_leaves_cache_empty() {
        let source = CountingSource::new(vec![Category::nested(
            CategoryId(9),
            "Genetics",
            vec![CategoryId(1)],
        )]);
        let mut cycle = RenderCycle::new();
        let err = cycle.categories(&source).unwrap_err();
        assert!(matches!(err, CourseNavError::MissingAncestor { .. }));
        assert!(!cycle.has_categories());
    }
}
