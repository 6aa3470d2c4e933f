//! Integration Test: Game Loop Discipline
//!
//! **Policy**: The game crate runs on a single task that only ever waits on
//! its render tick or the terminal event stream.
//!
//! - No sleeping: pacing comes from `tokio::time::interval`, never `sleep()`
//! - No threads: one owner for all game state, no locks
//! - No blocking input polls: `crossterm::event::poll`/`read` would stall ticks

use architectural_enforcement::{find_violations, game_sources, scan_source, Violation};
use std::path::Path;

fn report(kind: &str, violations: &[Violation], help: &[&str]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ CRITICAL: {kind} found in game code!\n");
    for violation in violations {
        eprintln!("  ❌ {}", violation);
    }
    eprintln!();
    for line in help {
        eprintln!("  {line}");
    }

    panic!(
        "\nFound {} {} violation(s) in production code.\nFix these before merging!",
        violations.len(),
        kind
    );
}

#[test]
fn test_game_sources_exist() {
    assert!(
        game_sources().is_dir(),
        "expected game sources at {}",
        game_sources().display()
    );
}

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_game_code() {
    let violations = find_violations(&game_sources(), &["::sleep(", ".sleep("]);
    report(
        "sleep calls",
        &violations,
        &[
            "✅ Wait on the render tick (tokio::time::interval) inside tokio::select!",
            "❌ Do not sleep to pace frames or simulation steps",
        ],
    );
}

/// Test that production code does not start threads or tasks
#[test]
fn test_no_threads_in_game_code() {
    let violations = find_violations(
        &game_sources(),
        &["thread::spawn", "tokio::spawn", "spawn_blocking", "Mutex<", "RwLock<"],
    );
    report(
        "thread/task spawns",
        &violations,
        &["✅ Keep all game state on the loop's single task"],
    );
}

/// Test that production code does not poll the terminal synchronously
#[test]
fn test_no_blocking_event_polling() {
    let violations = find_violations(&game_sources(), &["event::poll(", "event::read("]);
    report(
        "blocking event polls",
        &violations,
        &["✅ Read input from crossterm::event::EventStream"],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_sleep_in_production() {
        let code = "fn bad() {\n    std::thread::sleep(d);\n}\n";
        let found = scan_source(Path::new("bad.rs"), code, &["::sleep("]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn test_ignores_comments() {
        let code = "// tokio::time::sleep(d) would stall input\nfn ok() {}\n";
        assert!(scan_source(Path::new("ok.rs"), code, &["::sleep("]).is_empty());
    }

    #[test]
    fn test_ignores_test_modules() {
        let code = "fn ok() {}\n\n#[cfg(test)]\nmod tests {\n    fn t() { std::thread::spawn(|| {}); }\n}\n";
        assert!(scan_source(Path::new("ok.rs"), code, &["thread::spawn"]).is_empty());
    }
}
