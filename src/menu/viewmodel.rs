//! Menu view model types.
//!
//! These are computed by [`super::build_course_menu`] and serialised straight into
//! the host's template context. They contain no behaviour beyond construction
//! helpers.
//!
//! # Example
//!
//! ```rust
//! use coursenav::domain::CourseId;
//! use coursenav::menu::{MenuItem, MenuTarget, MenuText};
//!
//! let item = MenuItem::new(
//!     MenuText::literal("Genetics I"),
//!     MenuText::literal("GEN1"),
//!     MenuTarget::Course { course: CourseId(12) },
//! )
//! .with_icon("graduation-cap");
//! assert!(item.children.is_empty());
//! ```

use crate::domain::CourseId;
use serde::Serialize;

/// Complete menu context for one render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MenuContext {
    /// Top-level branches in display order.
    pub items: Vec<MenuItem>,

    /// Courses placed in the "My courses" branch (all folders combined).
    pub course_count: usize,

    /// Children carry `key`s and should render as collapsible folders.
    pub collapsible: bool,

    /// Localisation key of a notice shown instead of the menu.
    pub notice: Option<String>,
}

impl MenuContext {
    /// A context showing only a notice.
    pub fn notice(key: impl Into<String>) -> Self {
        Self {
            notice: Some(key.into()),
            ..Self::default()
        }
    }
}

/// Text shown for a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuText {
    /// Localisation key, resolved by the host.
    Key(String),
    /// Course or category data shown as-is.
    Literal(String),
}

impl MenuText {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }
}

/// Where a menu entry links to. The host turns these into URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuTarget {
    /// The user's course overview page.
    MyHome,
    /// The personal dashboard.
    Dashboard,
    /// The site front page.
    Site,
    /// The page being rendered (category folders link here).
    CurrentPage,
    Course { course: CourseId },
    Calendar { course: CourseId },
    Participants { course: CourseId },
    Badges { course: CourseId },
    Competencies { course: CourseId },
    /// A course section, either on its own page or as an anchor.
    Section {
        course: CourseId,
        section: u32,
        multipage: bool,
    },
}

/// One entry of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub text: MenuText,
    pub title: MenuText,
    pub target: MenuTarget,

    /// Font icon name without prefix, e.g. `graduation-cap`.
    pub icon: Option<String>,

    /// Sort weight among top-level branches.
    pub sort: Option<u32>,

    /// Hidden course shown to a user allowed to see it.
    pub dimmed: bool,

    /// Course listed by enrolment because the user never opened it.
    pub only_enrolled: bool,

    /// Emphasised placeholder entry.
    pub emphasis: bool,

    /// Unique key for collapsible rendering.
    pub key: Option<String>,

    pub children: Vec<MenuItem>,
}

impl MenuItem {
    #[must_use]
    pub const fn new(text: MenuText, title: MenuText, target: MenuTarget) -> Self {
        Self {
            text,
            title,
            target,
            icon: None,
            sort: None,
            dimmed: false,
            only_enrolled: false,
            emphasis: false,
            key: None,
            children: Vec::new(),
        }
    }

    /// An entry whose text and title are the same localisation key.
    pub fn keyed(key: &str, target: MenuTarget) -> Self {
        Self::new(MenuText::key(key), MenuText::key(key), target)
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: u32) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Appends a child and returns a mutable reference to it.
    pub fn add(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}
