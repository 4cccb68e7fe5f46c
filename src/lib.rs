//! Coursenav: course navigation context for learning-management page renderers.
//!
//! Coursenav builds the data behind a site's "My courses" navigation and hands it
//! back as serialisable view models for the host's template engine:
//! - Recency ranking of enrolled courses (last access vs. enrolment start)
//! - Grouping of courses under their top-level category
//! - Settings-driven menu assembly (limits, hidden courses, terminology)
//! - Social link context for page footers
//! - Settings-only page blocks: marketing tiles, slideshow, login page, footer
//!
//! It renders no HTML, resolves no URLs and looks up no localised strings: menu
//! labels are string keys and link targets are typed, both resolved by the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs) / host page renderer                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Menu Layer (menu/)          │  Page blocks         │  ← View models
//! │  - Course menu builder       │  (context/)          │
//! │  - Branch terminology        │  - Marketing tiles   │
//! │  - Social icons              │  - Slideshow, login  │
//! │                              │  - Footer            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Ranking       │   │ Categories    │   │ Source        │
//! │ (ranking/)    │   │ (categories/) │   │ (source/)     │
//! │ - Comparator  │   │ - Flattening  │   │ - Platform    │
//! │ - Merge       │   │ - Render cache│   │ - JSON        │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Courses, memberships, categories, errors         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings come from the host's flat settings store (see [`Config::from_settings`])
//! or from a TOML file (see [`Config::from_file`]):
//!
//! ```toml
//! displaymycourses = true
//! mycoursetitle = "module"
//! frontpagemycoursessorting = true
//! mycoursesmax = 10
//! mycoursescatsubmenu = true
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use coursenav::source::JsonSnapshot;
//! use coursenav::{render, Config};
//!
//! let snapshot = JsonSnapshot::from_json(r#"{
//!     "viewer": { "logged_in": true },
//!     "courses": [ { "id": 2, "category": 1, "shortname": "S1", "fullname": "Science 1" } ],
//!     "categories": [ { "id": 1, "name": "Science", "depth": 1 } ]
//! }"#)?;
//!
//! let config = Config { display_my_courses: true, ..Config::default() };
//! let page = render(&config, &snapshot, snapshot.current_page())?;
//! assert_eq!(page.menu.course_count, 1);
//! # Ok::<(), coursenav::CourseNavError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Recency Ranking
//!
//! A course carries either a last-access time or an enrolment start, never both.
//! The two are never compared numerically: enrolment-only courses rank ahead of
//! visited ones (see [`ranking::compare_recency`]).
//!
//! ## Render-Scoped Caching
//!
//! The flattened category tree lives in a [`categories::RenderCycle`] owned by one
//! render. There is no process-wide state.

pub mod categories;
pub mod context;
pub mod domain;
pub mod menu;
pub mod ranking;
pub mod source;

pub mod observability;

pub use categories::{CategoryTree, RenderCycle};
pub use context::{
    FooterContext, FooterSettings, LoginContext, LoginSettings, MarketingContext,
    MarketingSettings, SlideshowContext, SlideshowSettings, TilePlacement,
};
pub use domain::{CourseNavError, Result};
pub use menu::{CourseTerminology, MenuContext, SocialContext, SocialLinks};

use serde::Serialize;
use source::{CourseSource, CurrentPage};
use std::collections::BTreeMap;
use std::path::Path;

/// Administrator settings that shape the navigation.
///
/// Parsed from the host's settings store, where every value is a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Show the "My courses" branch (`displaymycourses`).
    pub display_my_courses: bool,

    /// Terminology for branch titles (`mycoursetitle`).
    pub terminology: CourseTerminology,

    /// Rank courses by recency instead of by full name (`frontpagemycoursessorting`).
    pub sort_by_recency: bool,

    /// Maximum courses per branch, or per category folder when grouping
    /// (`mycoursesmax`). `None` means unlimited; the setting stores that as `0`.
    pub max_courses: Option<usize>,

    /// Group courses under top-level category folders (`mycoursescatsubmenu`).
    pub category_submenu: bool,

    /// List hidden courses the viewer is allowed to see (`displayhiddenmycourses`).
    pub display_hidden: bool,

    /// Show the "this course" branch on course pages (`displaythiscourse`).
    pub display_this_course: bool,

    /// Site has badges enabled (`enablebadges`).
    pub badges_enabled: bool,

    /// Site has competencies enabled (`enablecompetencies`).
    pub competencies_enabled: bool,

    /// Social network links for the footer.
    pub social: SocialLinks,

    /// Marketing tiles and their placement (`togglemarketing`, `marketingN*`).
    pub marketing: MarketingSettings,

    /// Front-page slideshow (`showslideshow`, `slideN*`).
    pub slideshow: SlideshowSettings,

    /// Login page variant and content.
    pub login: LoginSettings,

    /// Footnote and brand contact details.
    pub footer: FooterSettings,

    /// Tracing filter directive (`trace_level`). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_my_courses: false,
            terminology: CourseTerminology::Course,
            sort_by_recency: false,
            max_courses: None,
            category_submenu: false,
            display_hidden: false,
            display_this_course: false,
            badges_enabled: false,
            competencies_enabled: false,
            social: SocialLinks::default(),
            marketing: MarketingSettings::default(),
            slideshow: SlideshowSettings::default(),
            login: LoginSettings::default(),
            footer: FooterSettings::default(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from the host's settings map.
    ///
    /// # Parsing Rules
    ///
    /// - Flags accept `1/0`, `true/false`, `yes/no`, `on/off`; anything else is `false`
    /// - `mycoursesmax`: String → `usize`, `0` or unparsable means unlimited
    /// - `mycoursetitle`: unknown values fall back to `course`
    /// - Empty strings count as unset
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use coursenav::{Config, CourseTerminology};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("displaymycourses".to_string(), "1".to_string());
    /// map.insert("mycoursetitle".to_string(), "unit".to_string());
    /// map.insert("mycoursesmax".to_string(), "5".to_string());
    ///
    /// let config = Config::from_settings(&map);
    /// assert!(config.display_my_courses);
    /// assert_eq!(config.terminology, CourseTerminology::Unit);
    /// assert_eq!(config.max_courses, Some(5));
    /// ```
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let max_courses = text(config, "mycoursesmax").and_then(|s| {
            s.parse::<usize>()
                .map_err(|e| {
                    tracing::debug!(value = %s, error = %e, "invalid mycoursesmax, using unlimited");
                })
                .ok()
                .filter(|max| *max > 0)
        });

        Self {
            display_my_courses: flag(config, "displaymycourses"),
            terminology: text(config, "mycoursetitle")
                .map_or(CourseTerminology::Course, CourseTerminology::from_setting),
            sort_by_recency: flag(config, "frontpagemycoursessorting"),
            max_courses,
            category_submenu: flag(config, "mycoursescatsubmenu"),
            display_hidden: flag(config, "displayhiddenmycourses"),
            display_this_course: flag(config, "displaythiscourse"),
            badges_enabled: flag(config, "enablebadges"),
            competencies_enabled: flag(config, "enablecompetencies"),
            social: SocialLinks::from_settings(config),
            marketing: MarketingSettings::from_settings(config),
            slideshow: SlideshowSettings::from_settings(config),
            login: LoginSettings::from_settings(config),
            footer: FooterSettings::from_settings(config),
            trace_level: text(config, "trace_level").map(String::from),
        }
    }

    /// Loads configuration from a TOML file of top-level keys.
    ///
    /// Strings, integers and booleans are accepted and converted to their settings
    /// store form before parsing with [`Config::from_settings`]. Other value types
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e| CourseNavError::Config(format!("{}: {e}", path.display())))?;

        let settings = table
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Boolean(b) => u8::from(b).to_string(),
                    other => {
                        tracing::debug!(key = %key, kind = other.type_str(), "ignoring setting");
                        return None;
                    }
                };
                Some((key, value))
            })
            .collect::<BTreeMap<_, _>>();

        Ok(Self::from_settings(&settings))
    }
}

/// Reads a trimmed, non-empty setting.
pub(crate) fn text<'a>(config: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    config.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Reads a boolean setting.
pub(crate) fn flag(config: &BTreeMap<String, String>, key: &str) -> bool {
    text(config, key).is_some_and(|s| {
        matches!(
            s.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Everything one page render contributes to the template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub menu: MenuContext,
    pub social: SocialContext,
    /// Tiles placed inside the front-page header box.
    pub header_tiles: MarketingContext,
    /// Tiles placed in their own row.
    pub market_tiles: MarketingContext,
    pub slideshow: SlideshowContext,
    pub login: LoginContext,
    pub footer: FooterContext,
}

/// Renders the navigation context for one page.
///
/// Starts a fresh [`RenderCycle`], so categories are read at most once and never
/// reused from an earlier render.
///
/// # Errors
///
/// Returns an error if the source fails or the category set is inconsistent.
pub fn render(
    config: &Config,
    source: &dyn CourseSource,
    current: Option<&CurrentPage>,
) -> Result<PageContext> {
    let mut cycle = RenderCycle::new();
    let _span = tracing::debug_span!("render", started_at = %cycle.started_at()).entered();

    let menu = menu::build_course_menu(config, &mut cycle, source, current)?;
    let social = menu::social_icons(&config.social);
    let header_tiles = context::marketing_tiles(&config.marketing, TilePlacement::HeaderBox);
    let market_tiles = context::marketing_tiles(&config.marketing, TilePlacement::TileRow);

    tracing::debug!(
        items = menu.items.len(),
        courses = menu.course_count,
        "page context rendered"
    );
    Ok(PageContext {
        menu,
        social,
        header_tiles,
        market_tiles,
        slideshow: context::slideshow(&config.slideshow),
        login: context::login_page(&config.login),
        footer: context::footer(&config.footer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_settings_give_defaults() {
        assert_eq!(Config::from_settings(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn flags_accept_common_spellings() {
        let config = Config::from_settings(&settings(&[
            ("displaymycourses", "yes"),
            ("frontpagemycoursessorting", "TRUE"),
            ("mycoursescatsubmenu", "on"),
            ("displayhiddenmycourses", "0"),
            ("displaythiscourse", "banana"),
        ]));
        assert!(config.display_my_courses);
        assert!(config.sort_by_recency);
        assert!(config.category_submenu);
        assert!(!config.display_hidden);
        assert!(!config.display_this_course);
    }

    #[test]
    fn zero_or_invalid_max_means_unlimited() {
        for value in ["0", "lots", "-3", " "] {
            let config = Config::from_settings(&settings(&[("mycoursesmax", value)]));
            assert_eq!(config.max_courses, None, "value {value:?}");
        }
        let config = Config::from_settings(&settings(&[("mycoursesmax", " 12 ")]));
        assert_eq!(config.max_courses, Some(12));
    }

    #[test]
    fn loads_settings_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "displaymycourses = true\nmycoursesmax = 3\nmycoursetitle = \"lesson\"\nfacebook = \"https://facebook.example/site\"\nnested = [1, 2]"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.display_my_courses);
        assert_eq!(config.max_courses, Some(3));
        assert_eq!(config.terminology, CourseTerminology::Lesson);
        assert_eq!(
            config.social.facebook.as_deref(),
            Some("https://facebook.example/site")
        );
    }

    #[test]
    fn page_block_settings_are_read() {
        let config = Config::from_settings(&settings(&[
            ("togglemarketing", "2"),
            ("marketing4", "Scholarships"),
            ("showslideshow", "1"),
            ("showcustomlogin", "1"),
            ("brandphone", "+1 555 0100"),
        ]));
        assert_eq!(config.marketing.placement, TilePlacement::TileRow);
        assert_eq!(config.marketing.tiles[3].title.as_deref(), Some("Scholarships"));
        assert!(config.slideshow.enabled);
        assert!(config.login.custom_layout);
        assert_eq!(config.footer.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "displaymycourses = = true").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(CourseNavError::Config(_))
        ));
    }
}
