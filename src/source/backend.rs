//! Course source abstraction.
//!
//! The trait is minimal and maps directly onto the queries one render performs.
//! Implementations are called at most once per query per render; the category
//! set in particular is cached by [`crate::categories::RenderCycle`].

use crate::domain::error::Result;
use crate::domain::{Category, Course};
use crate::source::models::{CourseOrder, Enrolment, LastAccess, Viewer};

/// Read access to the host platform for one viewer.
///
/// # Examples
///
/// ```no_run
/// use coursenav::source::{CourseOrder, CourseSource, JsonSnapshot};
///
/// let source = JsonSnapshot::open("/tmp/snapshot.json")?;
/// let courses = source.enrolled_courses(CourseOrder::FullName)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CourseSource {
    /// The user the page is rendered for.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewer cannot be resolved.
    fn viewer(&self) -> Result<Viewer>;

    /// Courses the viewer is enrolled in, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn enrolled_courses(&self, order: CourseOrder) -> Result<Vec<Course>>;

    /// Last-access rows for the viewer, at most one per course.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn last_access(&self) -> Result<Vec<LastAccess>>;

    /// All enrolment rows for the viewer, possibly several per course.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn enrolments(&self) -> Result<Vec<Enrolment>>;

    /// Every category visible to the viewer, with full ancestor chains.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn categories(&self) -> Result<Vec<Category>>;
}
