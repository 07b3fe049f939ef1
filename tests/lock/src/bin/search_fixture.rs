//! Binary that runs a fixture world through the harness runner and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [--world maze|diamond] [--layout FILE]
//!         [--strategy NAME] [--heuristic null|manhattan|euclidean]`
//!
//! Output: `<strategy>.<key>=<value>` lines on stdout. A failed search prints
//! `status`, `error` and `error_detail` from its JSON error report. Logs go
//! to stderr and are controlled by `RUST_LOG`.

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wayfinder_harness::runner::{run_search, RunError, RunReport};
use wayfinder_harness::worlds::graph::WeightedGraph;
use wayfinder_harness::worlds::maze::{euclidean_heuristic, manhattan_heuristic, Maze};
use wayfinder_search::report::error_to_json;
use wayfinder_search::{NullHeuristic, SearchPolicy, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum World {
    Maze,
    Diamond,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicChoice {
    Null,
    Manhattan,
    Euclidean,
}

#[derive(Parser)]
#[command(name = "search_fixture")]
#[command(about = "Run fixture worlds through every search strategy")]
struct Cli {
    /// World to search.
    #[arg(long, value_enum, default_value = "maze")]
    world: World,

    /// Maze layout file (default: the tiny maze).
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Run only this strategy (dfs, bfs, ucs, astar).
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Heuristic for A* on mazes.
    #[arg(long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicChoice,

    /// Optional expansion cap.
    #[arg(long)]
    max_expansions: Option<u64>,
}

fn print_run<S, A: Display>(strategy: Strategy, run: &Result<RunReport<S, A>, RunError>) {
    match run {
        Ok(report) => {
            let plan: Vec<String> = report
                .outcome
                .actions
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{strategy}.status=goal_found");
            println!("{strategy}.plan={}", plan.join(","));
            println!("{strategy}.cost={}", report.outcome.cost);
            println!("{strategy}.expansions={}", report.outcome.stats.expansions);
            println!("{strategy}.plan_digest={}", report.plan_digest);
            println!("{strategy}.report_digest={}", report.digest);
        }
        Err(RunError::Search(err)) => {
            let report = error_to_json(strategy, err);
            let text = |value: &serde_json::Value| value.as_str().unwrap_or_default().to_string();
            println!("{strategy}.status={}", text(&report["status"]));
            println!("{strategy}.error={}", text(&report["error"]["type"]));
            println!("{strategy}.error_detail={}", text(&report["error"]["detail"]));
        }
        Err(err) => {
            println!("{strategy}.status=failed");
            println!("{strategy}.error={err}");
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = SearchPolicy {
        max_expansions: cli.max_expansions,
        ..SearchPolicy::default()
    };
    let strategies: Vec<Strategy> = match cli.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };
    debug!(
        world = ?cli.world,
        layout = ?cli.layout,
        strategies = strategies.len(),
        "fixture started"
    );

    match cli.world {
        World::Diamond => {
            let graph = WeightedGraph::diamond();
            for &strategy in &strategies {
                print_run(strategy, &run_search(&graph, strategy, &NullHeuristic, &policy));
            }
        }
        World::Maze => {
            let maze = match &cli.layout {
                Some(path) => match Maze::load(path) {
                    Ok(maze) => maze,
                    Err(err) => {
                        eprintln!("error: {}: {err}", path.display());
                        return ExitCode::FAILURE;
                    }
                },
                None => Maze::tiny(),
            };
            for &strategy in &strategies {
                let run = match cli.heuristic {
                    HeuristicChoice::Null => run_search(&maze, strategy, &NullHeuristic, &policy),
                    HeuristicChoice::Manhattan => {
                        run_search(&maze, strategy, &manhattan_heuristic, &policy)
                    }
                    HeuristicChoice::Euclidean => {
                        run_search(&maze, strategy, &euclidean_heuristic, &policy)
                    }
                };
                print_run(strategy, &run);
            }
        }
    }
    ExitCode::SUCCESS
}
