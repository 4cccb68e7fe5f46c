//! Command-line renderer for course navigation context.
//!
//! Renders the navigation context from a settings file and a platform snapshot
//! and prints it as JSON, the same structure a host hands to its templates.
//!
//! # Usage
//!
//! ```text
//! coursenav <settings.toml> <snapshot.json>
//! ```
//!
//! The snapshot format is described in [`coursenav::source::json`]. Set
//! `RUST_LOG=debug` (or `trace_level = "debug"` in the settings) to see how the
//! menu was assembled.

#![allow(clippy::multiple_crate_versions)]

use coursenav::observability::init_tracing;
use coursenav::source::JsonSnapshot;
use coursenav::{render, Config, CourseNavError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [settings, snapshot] = args.as_slice() else {
        eprintln!("usage: coursenav <settings.toml> <snapshot.json>");
        return ExitCode::from(2);
    };

    match run(settings, snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "render failed");
            eprintln!("coursenav: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &str, snapshot: &str) -> Result<String, CourseNavError> {
    let config = Config::from_file(settings)?;
    init_tracing(&config);

    let source = JsonSnapshot::open(snapshot)?;
    let page = render(&config, &source, source.current_page())?;

    serde_json::to_string_pretty(&page)
        .map_err(|e| CourseNavError::Source(format!("failed to serialize context: {e}")))
}
