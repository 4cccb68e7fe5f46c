//! JSON snapshot course source.
//!
//! A snapshot is a single JSON document holding everything one render needs. It
//! lets menus be rendered outside the host platform, for previews and fixtures.
//!
//! # File Format
//!
//! ```json
//! {
//!   "viewer": { "logged_in": true, "guest": false },
//!   "courses": [
//!     { "id": 12, "category": 9, "shortname": "GEN1", "fullname": "Genetics I" }
//!   ],
//!   "last_access": [ { "course_id": 12, "time_access": 1700000000 } ],
//!   "enrolments": [ { "course_id": 12, "time_start": 1690000000 } ],
//!   "categories": [
//!     { "id": 1, "name": "Science", "depth": 1 },
//!     { "id": 9, "name": "Genetics", "depth": 2, "path": [1] }
//!   ],
//!   "current_page": { "course_id": 12, "sections": [ { "number": 0, "name": "General" } ] }
//! }
//! ```
//!
//! Courses are listed in the platform's administrative sort order.

use crate::domain::error::{CourseNavError, Result};
use crate::domain::{Category, Course};
use crate::source::backend::CourseSource;
use crate::source::models::{CourseOrder, CurrentPage, Enrolment, LastAccess, Viewer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    viewer: Viewer,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    last_access: Vec<LastAccess>,
    #[serde(default)]
    enrolments: Vec<Enrolment>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    current_page: Option<CurrentPage>,
}

/// Course source backed by an in-memory JSON snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    data: SnapshotData,
}

impl JsonSnapshot {
    /// Loads a snapshot from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coursenav::source::JsonSnapshot;
    ///
    /// let snapshot = JsonSnapshot::open("/tmp/snapshot.json")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading snapshot");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CourseNavError::Source`] if the document is not a valid snapshot.
    pub fn from_json(contents: &str) -> Result<Self> {
        let data: SnapshotData = serde_json::from_str(contents)
            .map_err(|e| CourseNavError::Source(format!("failed to parse snapshot: {e}")))?;

        tracing::debug!(
            courses = data.courses.len(),
            categories = data.categories.len(),
            enrolments = data.enrolments.len(),
            "loaded snapshot"
        );

        Ok(Self { data })
    }

    /// The course page the snapshot was taken on, if any.
    #[must_use]
    pub const fn current_page(&self) -> Option<&CurrentPage> {
        self.data.current_page.as_ref()
    }
}

impl CourseSource for JsonSnapshot {
    fn viewer(&self) -> Result<Viewer> {
        Ok(self.data.viewer)
    }

    fn enrolled_courses(&self, order: CourseOrder) -> Result<Vec<Course>> {
        let mut courses = self.data.courses.clone();
        if order == CourseOrder::FullName {
            courses.sort_by(|a, b| a.fullname.cmp(&b.fullname));
        }
        Ok(courses)
    }

    fn last_access(&self) -> Result<Vec<LastAccess>> {
        Ok(self.data.last_access.clone())
    }

    fn enrolments(&self) -> Result<Vec<Enrolment>> {
        Ok(self.data.enrolments.clone())
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.data.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryId, CourseId};
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "viewer": { "logged_in": true },
        "courses": [
            { "id": 3, "category": 1, "shortname": "Z", "fullname": "Zoology" },
            { "id": 4, "category": 1, "shortname": "A", "fullname": "Anatomy", "visible": false }
        ],
        "categories": [
            { "id": 1, "name": "Science", "depth": 1 },
            { "id": 5, "name": "Biology", "depth": 2, "path": [1] }
        ]
    }"#;

    #[test]
    fn parses_defaults_for_omitted_fields() {
        let snapshot = JsonSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.viewer().unwrap(), Viewer::member());
        assert!(snapshot.last_access().unwrap().is_empty());
        assert!(snapshot.current_page().is_none());

        let courses = snapshot.enrolled_courses(CourseOrder::SortOrder).unwrap();
        assert!(courses[0].visible);
        assert!(!courses[1].visible);

        let categories = snapshot.categories().unwrap();
        assert!(categories[0].path.is_empty());
        assert_eq!(categories[1].path, vec![CategoryId(1)]);
    }

    #[test]
    fn orders_courses_by_full_name_on_request() {
        let snapshot = JsonSnapshot::from_json(SNAPSHOT).unwrap();
        let ids: Vec<_> = snapshot
            .enrolled_courses(CourseOrder::FullName)
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![CourseId(4), CourseId(3)]);
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = JsonSnapshot::from_json("{ \"courses\": 7 }").unwrap_err();
        assert!(matches!(err, CourseNavError::Source(_)));
    }

    #[test]
    fn opens_snapshot_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let snapshot = JsonSnapshot::open(file.path()).unwrap();
        assert_eq!(snapshot.categories().unwrap().len(), 2);
    }
}
