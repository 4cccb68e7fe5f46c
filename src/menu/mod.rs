//! Navigation view models built from settings and platform data.
//!
//! The menu layer turns ranked courses and the flattened category tree into
//! template-ready structures. It never produces markup: labels are either literal
//! course data or localisation keys, and links are [`MenuTarget`] values.
//!
//! # Modules
//!
//! - [`viewmodel`]: Serialisable menu types
//! - [`builder`]: The "My courses" and "This course" branches
//! - [`titles`]: Branch terminology selected by `mycoursetitle`
//! - [`social`]: Social link context

pub mod builder;
pub mod social;
pub mod titles;
pub mod viewmodel;

pub use builder::build_course_menu;
pub use social::{social_icons, SocialContext, SocialIcon, SocialLinks};
pub use titles::{BranchTitles, CourseTerminology};
pub use viewmodel::{MenuContext, MenuItem, MenuTarget, MenuText};
