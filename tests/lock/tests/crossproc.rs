//! Cross-process determinism for search runs.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_search_fixture");

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(BIN);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {BIN} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn assert_env_independent(args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(&root, args, &[]);

    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    let variant_cwd = run_variant(&alt_cwd, args, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, args, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        args,
        &[
            ("WAYFINDER_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");

    // Logging goes to stderr only.
    let variant_logging = run_variant(&root, args, &[("RUST_LOG", "trace")]);
    assert_eq!(baseline, variant_logging, "output differs with RUST_LOG=trace");

    baseline
}

#[test]
fn tiny_maze_output_is_environment_independent() {
    let baseline = assert_env_independent(&[]);

    for strategy in ["dfs", "bfs", "ucs", "astar"] {
        assert!(
            baseline.contains(&format!("{strategy}.status=goal_found")),
            "baseline output missing {strategy}.status"
        );
        assert!(
            baseline.contains(&format!("{strategy}.report_digest=sha256:")),
            "baseline output missing {strategy}.report_digest"
        );
        assert!(
            baseline.contains(&format!("{strategy}.plan_digest=sha256:")),
            "baseline output missing {strategy}.plan_digest"
        );
    }
    assert!(baseline.contains("ucs.plan=South,South,West,South,West,West,South,West"));
    assert!(baseline.contains("astar.plan=South,South,West,South,West,West,South,West"));
    assert!(baseline.contains("ucs.cost=8\n"));
}

#[test]
fn diamond_output_is_environment_independent() {
    let baseline = assert_env_independent(&["--world", "diamond", "--strategy", "ucs"]);
    assert!(baseline.contains("ucs.plan=A->B,B->D\n"), "{baseline}");
    assert!(baseline.contains("ucs.cost=2\n"), "{baseline}");
    assert!(!baseline.contains("dfs."), "single strategy requested");
}

#[test]
fn budget_failure_is_reported_deterministically() {
    let baseline = assert_env_independent(&["--strategy", "bfs", "--max-expansions", "2"]);
    assert_eq!(
        baseline,
        "bfs.status=failed\n\
         bfs.error=expansion_budget_exceeded\n\
         bfs.error_detail=expansion budget of 2 exceeded\n"
    );
}

#[test]
fn plan_digest_is_shared_by_equal_plans() {
    let out = run_variant(&workspace_root(), &[], &[]);
    let digest_of = |strategy: &str| {
        let key = format!("{strategy}.plan_digest=");
        out.lines()
            .find_map(|line| line.strip_prefix(key.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| panic!("missing {key}"))
    };
    assert_eq!(digest_of("ucs"), digest_of("astar"));
}
