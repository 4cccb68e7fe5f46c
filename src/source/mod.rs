//! Access to the host platform's course data.
//!
//! The navigation core never fetches anything itself. Everything it needs
//! (enrolled courses, access logs, enrolments, visible categories, the viewer)
//! comes through the [`CourseSource`] trait, implemented by the host or by
//! [`JsonSnapshot`] for offline rendering.
//!
//! # Modules
//!
//! - `backend`: The `CourseSource` trait
//! - `json`: JSON snapshot implementation
//! - `models`: Raw rows supplied by the platform

pub mod backend;
pub mod json;
pub mod models;

pub use backend::CourseSource;
pub use json::JsonSnapshot;
pub use models::{CourseOrder, CurrentPage, Enrolment, LastAccess, Section, Viewer};
