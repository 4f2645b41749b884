// CLI commands: strategy comparison runs and test ranking
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use codesift_common::config::SandboxConfig;
use codesift_common::types::{Candidate, ProblemRecord, ProblemReport, RunReport};
use codesift_engine::{consensus, elimination, ranking, Sandbox};
use tracing::{info, warn};

use crate::report;

/// Load the candidates cache: task id → cached problem material.
/// BTreeMap keeps problem order deterministic across runs.
fn load_cache(path: &Path) -> Result<BTreeMap<String, ProblemRecord>> {
    if !path.exists() {
        bail!(
            "candidates cache not found: {} (generate it with your candidate sampler first)",
            path.display()
        );
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Run both selection strategies over every cached problem and print a
/// comparative summary.
pub async fn run(cache_path: &str, inject_canonical: bool, config: &SandboxConfig) -> Result<()> {
    let problems = load_cache(Path::new(cache_path))?;
    let sandbox = Sandbox::new(config);
    let mut run_report = RunReport::new();

    info!(
        run_id = %run_report.run_id,
        problems = problems.len(),
        interpreter = %config.interpreter,
        timeout_ms = config.timeout_ms,
        parallelism = config.parallelism,
        "Starting strategy comparison run"
    );

    for (task_id, problem) in &problems {
        println!("→ Processing {}", task_id);

        if problem.tests.is_empty() {
            warn!(task_id = %task_id, "no cached tests for problem; skipping");
            println!("  ⚠ No cached tests - skipping");
            continue;
        }

        // Canonical injection: appended last so at least one pool member is
        // known-correct. If it gets pruned, the selector is at fault.
        let mut pool = problem.candidates.clone();
        let injected = if inject_canonical {
            problem.canonical.clone()
        } else {
            None
        };
        if let Some(canonical) = &injected {
            pool.push(canonical.clone());
        }

        println!("  Pool: {} candidates, {} tests", pool.len(), problem.tests.len());

        let elimination_survivors = elimination::select(
            &sandbox,
            &pool,
            &problem.tests,
            problem.canonical.as_ref(),
        )
        .await;
        let consensus_survivors = consensus::select(&sandbox, &pool, &problem.tests).await;

        let problem_report = ProblemReport {
            task_id: task_id.clone(),
            initial_pool: pool.len(),
            elimination_survivors: elimination_survivors.len(),
            consensus_survivors: consensus_survivors.len(),
            elimination_kept_canonical: injected
                .as_ref()
                .map(|canonical| elimination_survivors.contains(canonical)),
            consensus_kept_canonical: injected
                .as_ref()
                .map(|canonical| consensus_survivors.contains(canonical)),
        };

        report::print_problem(&problem_report);
        info!(
            task_id = %task_id,
            initial_pool = problem_report.initial_pool,
            elimination_survivors = problem_report.elimination_survivors,
            consensus_survivors = problem_report.consensus_survivors,
            "Problem evaluated"
        );

        run_report.problems.push(problem_report);
    }

    report::print_summary(&run_report);
    Ok(())
}

/// Rank every problem's cached tests by discriminating power and print the
/// scored list, best splitters first.
pub async fn rank_tests(cache_path: &str, config: &SandboxConfig) -> Result<()> {
    let problems = load_cache(Path::new(cache_path))?;
    let sandbox = Sandbox::new(config);

    for (task_id, problem) in &problems {
        println!("→ Ranking tests for {}", task_id);

        if problem.tests.is_empty() {
            println!("  ⚠ No cached tests - skipping");
            continue;
        }

        let pool: Vec<Candidate> = problem.candidates.clone();
        let ranked =
            ranking::rank_by_discriminating_power(&sandbox, &problem.tests, &pool).await;

        for (test_input, score) in &ranked {
            println!("  {:>6.3}  {}", score, test_input);
        }
        if let Some((_, best)) = ranked.first() {
            if *best == 0.0 {
                println!("  ⚠ No test splits this pool at all");
            }
        }
    }

    Ok(())
}
