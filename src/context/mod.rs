//! Page block contexts built from settings alone.
//!
//! Unlike the menu layer these builders read no platform data. Each takes its
//! slice of [`crate::Config`] and returns a serialisable context. Images are
//! reported as setting keys and text as configured; the host resolves file URLs
//! and formats text.
//!
//! # Modules
//!
//! - [`marketing`]: Marketing tiles (`togglemarketing`)
//! - [`slideshow`]: Front-page slideshow (`showslideshow`)
//! - [`login`]: Login page variants (`showcustomlogin`)
//! - [`footer`]: Footnote and brand contact details

pub mod footer;
pub mod login;
pub mod marketing;
pub mod slideshow;

pub use footer::{footer, FooterContext, FooterSettings};
pub use login::{login_page, LoginContext, LoginSettings};
pub use marketing::{marketing_tiles, MarketingContext, MarketingSettings, TilePlacement, TileSettings};
pub use slideshow::{slideshow, SlideshowContext, SlideshowSettings};
