//! Integration Test: UI Isolation
//!
//! carpark-core is the headless half of the display: it must stay usable
//! from any surface (or no surface at all). These tests walk its sources
//! and fail on anything that would couple it to a terminal UI.
//!
//! **Policy**: `core/src` MUST NOT reference ratatui or crossterm.
//! **Policy**: async production code MUST NOT call `std::thread::sleep`
//! (use `tokio::time::sleep`, which yields to the runtime).

use std::fs;
use std::path::{Path, PathBuf};

/// UI framework crates that must never appear in core.
const FORBIDDEN_UI_CRATES: &[&str] = &["ratatui", "crossterm"];

fn core_src() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../core/src")
}

/// Collect every `.rs` file under a directory.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[test]
fn test_core_has_no_ui_dependencies() {
    let src = core_src();
    assert!(src.exists(), "core/src not found at {}", src.display());

    let mut violations = Vec::new();

    for file in rust_files(&src) {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (idx, line) in content.lines().enumerate() {
            // Skip comments
            let code_part = line.split("//").next().unwrap_or(line);

            for krate in FORBIDDEN_UI_CRATES {
                if code_part.contains(&format!("{krate}::")) || code_part.contains(&format!("use {krate}")) {
                    violations.push(format!("{}:{} - {}", file.display(), idx + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "UI framework usage found in carpark-core:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_no_blocking_sleep_in_core() {
    let src = core_src();
    assert!(src.exists(), "core/src not found at {}", src.display());

    let mut violations = Vec::new();

    for file in rust_files(&src) {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        let lines: Vec<&str> = content.lines().collect();
        for (idx, line) in lines.iter().enumerate() {
            let code_part = line.split("//").next().unwrap_or(line);

            if is_in_test_module(&lines, idx) {
                continue;
            }

            if code_part.contains("std::thread::sleep") || code_part.contains("thread::sleep") {
                violations.push(format!("{}:{} - {}", file.display(), idx + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "blocking sleep found in carpark-core production code:\n{}",
        violations.join("\n")
    );
}

/// Crude but sufficient: lines after a `#[cfg(test)]` marker in the same
/// file are test code (core keeps its test modules at the bottom).
fn is_in_test_module(lines: &[&str], idx: usize) -> bool {
    lines[..idx]
        .iter()
        .any(|line| line.contains("#[cfg(test)]"))
}
