//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce how the game loop is
//! allowed to spend its time:
//! - No sleep() calls in production code (the loop waits on a tick or input)
//! - No extra threads (one task owns all game state)
//! - No blocking event polling (input arrives through the async event stream)
//!
//! The helpers here scan the `tui` crate's sources line by line. Everything
//! after a `#[cfg(test)]` attribute counts as test code and is skipped.

use std::fs;
use std::path::{Path, PathBuf};

/// A forbidden pattern found in production code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.line, self.text)
    }
}

/// Root of the workspace this package lives in
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Production source directory of the game crate
pub fn game_sources() -> PathBuf {
    workspace_root().join("tui").join("src")
}

/// All `.rs` files under `dir`
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Scan every production file under `dir` for any of `patterns`
pub fn find_violations(dir: &Path, patterns: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for path in rust_files(dir) {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => continue,
        };
        violations.extend(scan_source(&path, &content, patterns));
    }
    violations
}

/// Scan one file's contents, ignoring comments and test code
pub fn scan_source(path: &Path, content: &str, patterns: &[&str]) -> Vec<Violation> {
    let lines: Vec<&str> = content.lines().collect();
    let mut violations = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if is_in_test_code(&lines, idx) {
            break;
        }

        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        if patterns.iter().any(|p| code_part.contains(p)) {
            violations.push(Violation {
                path: path.to_path_buf(),
                line: idx + 1,
                text: line.trim().to_string(),
            });
        }
    }
    violations
}

/// Check if line is at or after the file's `#[cfg(test)]` section
pub fn is_in_test_code(lines: &[&str], current_idx: usize) -> bool {
    lines[..=current_idx]
        .iter()
        .any(|line| line.trim().starts_with("#[cfg(test)]"))
}
