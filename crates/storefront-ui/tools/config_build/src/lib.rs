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
//! Transpile the storefront Tailwind config ahead of the CSS build.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Writes `theme.tokens.json` and `theme.css` from the Rust theme tokens so
//!   Tailwind and the components agree on color names.
//! - Runs the transpiler once on `tailwind.config.ts` and fails fast; no retries.
//!
//! Failure modes include a missing config file, a transpiler that cannot be
//! spawned or exits non-zero, or a run that emits no `tailwind.config.js`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use storefront_ui::core::theme::{css_stylesheet, tailwind_colors};
use thiserror::Error;
use tracing::{debug, info};

const TARGET_FILE: &str = "tailwind.config.ts";
const TOKENS_FILE: &str = "theme.tokens.json";
const THEME_CSS_FILE: &str = "theme.css";
const DEFAULT_TRANSPILER: &str = "tsc";
const DEFAULT_TRANSPILER_ARGS: [&str; 8] = [
    "--module",
    "commonjs",
    "--target",
    "es2020",
    "--esModuleInterop",
    "--skipLibCheck",
    "--resolveJsonModule",
    "--pretty",
];

/// Environment variable overriding the transpiler program.
pub const TRANSPILER_ENV: &str = "STOREFRONT_TRANSPILER";
/// Environment variable overriding the transpiler arguments (whitespace separated).
pub const TRANSPILER_ARGS_ENV: &str = "STOREFRONT_TRANSPILER_ARGS";

/// Errors returned by the config build helper.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required path is missing on disk.
    #[error("required path is missing: {}", .path.display())]
    MissingPath {
        /// Path that could not be found.
        path: PathBuf,
    },
    /// A required file path is not a file.
    #[error("expected file but found non-file: {}", .path.display())]
    ExpectedFile {
        /// Path that was expected to be a file.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The theme tokens could not be serialised.
    #[error("failed to serialise theme tokens: {source}")]
    Tokens {
        /// Underlying serialisation error.
        source: serde_json::Error,
    },
    /// The transpiler process could not be started.
    #[error("failed to start transpiler `{program}`: {source}")]
    Spawn {
        /// Program that failed to launch.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The transpiler ran and reported a failure.
    #[error("transpiling {} failed with status {status}: {stderr}", .target.display())]
    TranspileFailed {
        /// File handed to the transpiler.
        target: PathBuf,
        /// Exit status description.
        status: String,
        /// Diagnostics captured from the transpiler.
        stderr: String,
    },
    /// The transpiler succeeded but produced no output file.
    #[error("transpiler reported success but {} was not written", .path.display())]
    MissingOutput {
        /// Expected output path.
        path: PathBuf,
    },
    /// A configuration override was rejected.
    #[error("invalid build configuration for {field}: {reason}")]
    InvalidConfig {
        /// Setting that failed validation.
        field: &'static str,
        /// Reason the value was rejected.
        reason: &'static str,
    },
}

/// Inputs for a single config build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// UI crate root; the transpiler runs with this as its working directory.
    pub ui_root: PathBuf,
    /// Config file handed to the transpiler.
    pub target: PathBuf,
    /// Transpiler program.
    pub program: String,
    /// Arguments placed before the target path.
    pub args: Vec<String>,
}

impl BuildConfig {
    /// Default configuration for the UI crate at `ui_root`.
    #[must_use]
    pub fn for_ui_root(ui_root: impl Into<PathBuf>) -> Self {
        let ui_root = ui_root.into();
        Self {
            target: ui_root.join(TARGET_FILE),
            ui_root,
            program: DEFAULT_TRANSPILER.to_string(),
            args: DEFAULT_TRANSPILER_ARGS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Default configuration with [`TRANSPILER_ENV`] and [`TRANSPILER_ARGS_ENV`] applied.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidConfig`] when an override is blank.
    pub fn from_env(ui_root: impl Into<PathBuf>) -> Result<Self, BuildError> {
        Self::for_ui_root(ui_root).with_overrides(
            std::env::var(TRANSPILER_ENV).ok(),
            std::env::var(TRANSPILER_ARGS_ENV).ok(),
        )
    }

    /// Apply optional program and argument overrides.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidConfig`] when the program override is blank.
    pub fn with_overrides(
        mut self,
        program: Option<String>,
        args: Option<String>,
    ) -> Result<Self, BuildError> {
        if let Some(program) = program {
            let program = program.trim();
            if program.is_empty() {
                return Err(BuildError::InvalidConfig {
                    field: TRANSPILER_ENV,
                    reason: "program must not be empty",
                });
            }
            self.program = program.to_string();
        }
        if let Some(args) = args {
            self.args = args.split_whitespace().map(ToString::to_string).collect();
        }
        Ok(self)
    }

    /// Path the transpiler is expected to emit.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.target.with_extension("js")
    }

    /// Path of the generated theme token file.
    #[must_use]
    pub fn tokens_path(&self) -> PathBuf {
        self.ui_root.join(TOKENS_FILE)
    }

    /// Path of the generated custom property stylesheet.
    #[must_use]
    pub fn theme_css_path(&self) -> PathBuf {
        self.ui_root.join(THEME_CSS_FILE)
    }
}

/// Run the config build using the repository-relative UI root.
///
/// # Errors
/// Returns an error if configuration is invalid, the tokens cannot be written,
/// or transpilation fails.
pub fn run() -> Result<PathBuf, BuildError> {
    let ui_root = ui_root_dir()?;
    let config = BuildConfig::from_env(ui_root)?;
    build(&config)
}

/// Write the theme tokens and transpile the configured target.
///
/// Returns the path of the emitted JavaScript config.
///
/// # Errors
/// See [`BuildError`] for the failure modes.
pub fn build(config: &BuildConfig) -> Result<PathBuf, BuildError> {
    ensure_file(&config.target)?;
    write_theme_tokens(&config.tokens_path())?;
    write_file(&config.theme_css_path(), &css_stylesheet())?;
    transpile(config)?;

    let output = config.output_path();
    if !output.is_file() {
        return Err(BuildError::MissingOutput { path: output });
    }
    info!(output = %output.display(), "tailwind config transpiled");
    Ok(output)
}

fn ui_root_dir() -> Result<PathBuf, BuildError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| BuildError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

fn ensure_file(path: &Path) -> Result<(), BuildError> {
    if !path.exists() {
        return Err(BuildError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(BuildError::ExpectedFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn write_theme_tokens(path: &Path) -> Result<(), BuildError> {
    let mut contents = serde_json::to_string_pretty(&tailwind_colors())
        .map_err(|source| BuildError::Tokens { source })?;
    contents.push('\n');
    write_file(path, &contents)
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "theme asset written");
    Ok(())
}

fn transpile(config: &BuildConfig) -> Result<(), BuildError> {
    debug!(
        program = %config.program,
        target = %config.target.display(),
        "invoking transpiler"
    );
    let output = Command::new(&config.program)
        .args(&config.args)
        .arg(&config.target)
        .current_dir(&config.ui_root)
        .output()
        .map_err(|source| BuildError::Spawn {
            program: config.program.clone(),
            source,
        })?;

    if output.status.success() {
        return Ok(());
    }

    // tsc reports diagnostics on stdout; other transpilers use stderr.
    let mut diagnostics = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if diagnostics.is_empty() {
        diagnostics = String::from_utf8_lossy(&output.stdout).trim().to_string();
    }
    Err(BuildError::TranspileFailed {
        target: config.target.clone(),
        status: output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |code| code.to_string()),
        stderr: diagnostics,
    })
}
