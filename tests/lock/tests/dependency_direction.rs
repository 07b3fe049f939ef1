//! Build-graph isolation: the search engine depends on nothing above it.
//!
//! `wayfinder-search` must not reference the harness or the lock tests, and
//! must not pull in hashing or CLI crates; those belong to outer layers.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment Rust source lines of `search/src`.
const FORBIDDEN_SOURCE_PATTERNS: &[&str] = &["wayfinder_harness", "lock_tests", "sha2", "clap"];

/// Forbidden dependency names in `search/Cargo.toml`.
const FORBIDDEN_DEPENDENCIES: &[&str] = &["wayfinder-harness", "lock-tests", "sha2", "hex", "clap"];

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_SOURCE_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// lock-tests lives at tests/lock/, so the workspace root is ../..
fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn search_source_has_no_outer_layer_references() {
    let search_src = workspace_root().join("search").join("src");
    assert!(search_src.is_dir(), "missing {}", search_src.display());

    let mut violations = Vec::new();
    walk(&search_src, &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from("outer-layer references found in search source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn search_cargo_toml_has_no_outer_layer_dependencies() {
    let cargo_toml = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("read search/Cargo.toml");

    let mut in_deps = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_deps = trimmed.contains("dependencies");
            continue;
        }
        if !in_deps || trimmed.starts_with('#') {
            continue;
        }
        let name = trimmed.split('=').next().unwrap_or("").trim();
        assert!(
            !FORBIDDEN_DEPENDENCIES.contains(&name),
            "search/Cargo.toml depends on {name}"
        );
    }
}
