//! Raw rows supplied by the host platform.
//!
//! These mirror what the platform stores and are reduced into domain types
//! (see [`crate::ranking::merge_recency`]) before any ranking happens.

use crate::domain::CourseId;
use serde::{Deserialize, Serialize};

/// The user's most recent access to one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAccess {
    pub course_id: CourseId,
    /// Unix timestamp, `0` when unset.
    pub time_access: i64,
}

/// One enrolment of the user in a course.
///
/// A user may hold several enrolments in the same course (for example a manual
/// and a cohort enrolment); each appears as its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrolment {
    pub course_id: CourseId,
    /// Unix timestamp, `0` when unset.
    pub time_start: i64,
}

/// The user the page is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewer {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub guest: bool,
}

impl Viewer {
    /// A logged-in, non-guest user.
    #[must_use]
    pub const fn member() -> Self {
        Self {
            logged_in: true,
            guest: false,
        }
    }

    /// Returns `true` when personal course navigation may be shown.
    #[must_use]
    pub const fn has_courses(self) -> bool {
        self.logged_in && !self.guest
    }
}

/// Order in which the platform returns enrolled courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseOrder {
    /// Alphabetical by full name.
    FullName,
    /// The platform's administrative sort order.
    SortOrder,
}

/// A section of the course currently being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub number: u32,
    pub name: String,
}

/// The course page being rendered, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPage {
    pub course_id: CourseId,
    /// Course shows one section per page instead of all sections on one page.
    #[serde(default)]
    pub multipage: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}
