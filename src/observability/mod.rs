//! Structured logging setup.
//!
//! Library code only emits `tracing` events and spans; installing a subscriber is
//! left to the binary or the host. [`init_tracing`] installs the default one:
//! formatted events on stderr, filtered by level.
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` setting
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use coursenav::observability::init_tracing;
//! use coursenav::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("navigation ready");
//! ```

mod init;

pub use init::init_tracing;
