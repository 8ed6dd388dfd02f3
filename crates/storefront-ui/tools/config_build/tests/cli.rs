//! Exit-status contract of the `config_build` binary.

use std::error::Error;
use std::process::{Command, Output};

fn run_with(program: &str) -> Result<Output, Box<dyn Error>> {
    Ok(Command::new(env!("CARGO_BIN_EXE_config_build"))
        .env("STOREFRONT_TRANSPILER", program)
        .env_remove("STOREFRONT_TRANSPILER_ARGS")
        .env("STOREFRONT_LOG_FORMAT", "pretty")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()?)
}

fn error_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| line.starts_with("config_build: "))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn blank_transpiler_override_exits_with_status_one() -> Result<(), Box<dyn Error>> {
    let output = run_with("   ")?;
    assert_eq!(output.status.code(), Some(1));

    let lines = error_lines(&output);
    assert_eq!(lines.len(), 1, "stderr: {lines:?}");
    assert!(lines[0].contains("STOREFRONT_TRANSPILER"));
    assert!(lines[0].contains("program must not be empty"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn failing_transpiler_exits_with_status_one() -> Result<(), Box<dyn Error>> {
    let output = run_with("false")?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed with status").count(), 1, "{stderr}");
    let lines = error_lines(&output);
    assert_eq!(lines.len(), 1, "stderr: {stderr}");
    assert!(lines[0].contains("tailwind config build failed"));
    assert!(lines[0].contains("tailwind.config.ts"));
    Ok(())
}
