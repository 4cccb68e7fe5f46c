//! Course and course-membership models.
//!
//! A [`CourseMembership`] pairs a course with the single recency signal known for
//! the viewing user. Hosts hand over rows with two nullable columns (last access and
//! enrolment start); here the signal is a [`Recency`] variant so that every
//! combination is handled exhaustively by the comparator.

use crate::domain::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course identifier as assigned by the host platform.
///
/// Id 1 is the site front page, which is never treated as a real course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

impl CourseId {
    /// Id of the site front page.
    pub const SITE: Self = Self(1);

    /// Returns `true` for ids above the site front page.
    #[must_use]
    pub const fn is_course(self) -> bool {
        self.0 > Self::SITE.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How recently a course was relevant to a user.
///
/// Timestamps are Unix seconds. A course the user has opened carries
/// `LastAccess`; one never opened but with a resolvable enrolment carries
/// `EnrollmentStart` (the latest start across all of the user's enrolments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "time", rename_all = "snake_case")]
pub enum Recency {
    LastAccess(i64),
    EnrollmentStart(i64),
    #[default]
    None,
}

impl Recency {
    /// Returns `true` when the signal comes from an enrolment rather than an access.
    #[must_use]
    pub const fn is_enrollment(self) -> bool {
        matches!(self, Self::EnrollmentStart(_))
    }
}

/// A course the user is enrolled in, reduced to what ranking needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMembership {
    pub course_id: CourseId,
    pub recency: Recency,
}

impl CourseMembership {
    #[must_use]
    pub const fn new(course_id: CourseId, recency: Recency) -> Self {
        Self { course_id, recency }
    }
}

/// A course row as supplied by the host platform.
///
/// `can_view_hidden` is the host's capability decision for the viewing user;
/// it only matters when `visible` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub category: CategoryId,
    pub shortname: String,
    pub fullname: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub can_view_hidden: bool,
}

const fn default_visible() -> bool {
    true
}

impl Course {
    /// Creates a visible course.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursenav::domain::{CategoryId, Course, CourseId};
    ///
    /// let course = Course::new(CourseId(12), CategoryId(3), "BIO101", "Introductory Biology");
    /// assert!(course.visible);
    /// assert!(!course.can_view_hidden);
    /// ```
    pub fn new(
        id: CourseId,
        category: CategoryId,
        shortname: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            shortname: shortname.into(),
            fullname: fullname.into(),
            visible: true,
            can_view_hidden: false,
        }
    }
}
