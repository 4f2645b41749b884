// Comparative reporting for strategy runs
use codesift_common::types::{ProblemReport, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Elimination,
    Consensus,
    Tie,
}

/// Winner rule: fewer survivors wins, but only while the canonical
/// solution is retained. A selector that prunes the truth loses outright,
/// whatever its survivor count.
pub fn winner(report: &ProblemReport) -> Winner {
    const PRUNED_TRUTH: usize = usize::MAX;

    let elimination = if report.elimination_kept_canonical.unwrap_or(true) {
        report.elimination_survivors
    } else {
        PRUNED_TRUTH
    };
    let consensus = if report.consensus_kept_canonical.unwrap_or(true) {
        report.consensus_survivors
    } else {
        PRUNED_TRUTH
    };

    if elimination < consensus {
        Winner::Elimination
    } else if consensus < elimination {
        Winner::Consensus
    } else {
        Winner::Tie
    }
}

pub fn print_problem(report: &ProblemReport) {
    println!(
        "  Oracle-guided: {}/{} survivors",
        report.elimination_survivors, report.initial_pool
    );
    if let Some(kept) = report.elimination_kept_canonical {
        if kept {
            println!("    ✓ Canonical solution survived");
        } else {
            println!("    ✗ Canonical solution pruned (selector error)");
        }
    }
    println!(
        "  Consensus:     {}/{} survivors",
        report.consensus_survivors, report.initial_pool
    );
    if let Some(kept) = report.consensus_kept_canonical {
        if kept {
            println!("    ✓ Canonical solution in consensus");
        } else {
            println!("    ⚠ Canonical solution lost the vote");
        }
    }
    println!();
}

pub fn print_summary(run: &RunReport) {
    println!();
    println!("{}", "=".repeat(60));
    println!("            STRATEGY COMPARISON SUMMARY");
    println!("{}", "=".repeat(60));
    println!(
        "{:<18} | {:>13} | {:>10} | {:<10}",
        "Task", "Oracle-guided", "Consensus", "Winner"
    );
    println!("{}", "-".repeat(60));

    let mut elimination_wins = 0usize;
    let mut consensus_wins = 0usize;

    for problem in &run.problems {
        let verdict = winner(problem);
        let label = match verdict {
            Winner::Elimination => {
                elimination_wins += 1;
                "oracle"
            }
            Winner::Consensus => {
                consensus_wins += 1;
                "consensus"
            }
            Winner::Tie => "tie",
        };
        println!(
            "{:<18} | {:>13} | {:>10} | {:<10}",
            problem.task_id, problem.elimination_survivors, problem.consensus_survivors, label
        );
    }

    println!("{}", "-".repeat(60));
    println!(
        "Problems: {}  |  Oracle-guided wins: {}  |  Consensus wins: {}",
        run.problems.len(),
        elimination_wins,
        consensus_wins
    );
}
