#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CLI entrypoint for the Tailwind config build helper.
//!
//! # Design
//! Delegates to the library implementation. Progress goes through `tracing`;
//! a failure is written to stderr exactly once, as plain text, and the process
//! exits with status 1.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use storefront_telemetry::{LoggingConfig, init_logging};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "config_build: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn try_main() -> Result<()> {
    init_logging(&LoggingConfig::default())?;
    config_build::run().context("tailwind config build failed")?;
    Ok(())
}
