/// Discriminating-Power Ranker
///
/// Offline utility that scores test inputs by how evenly they split a
/// candidate pool into agreement groups. A test every candidate answers
/// identically carries no information; a test that splits the pool in half
/// is maximally informative. Not wired into either selector; it never
/// mutates the pool or the tests.
use codesift_common::types::{Candidate, ExecutionOutcome};

use crate::consensus::tally_outcomes;
use crate::executor::{execute_pool, Executor};

/// Score every test input against the pool and return `(test, score)`
/// pairs sorted by descending score. The sort is stable, so equally scored
/// tests keep their supplied order.
pub async fn rank_by_discriminating_power<E: Executor>(
    executor: &E,
    tests: &[String],
    pool: &[Candidate],
) -> Vec<(String, f64)> {
    let mut ranked = Vec::with_capacity(tests.len());
    for test_input in tests {
        let outcomes = execute_pool(executor, pool, test_input).await;
        ranked.push((test_input.clone(), split_score(&outcomes)));
    }
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// `min(m, r) / max(m, r)` where `m` is the size of the largest agreement
/// group and `r` the rest of the pool: 0 when all candidates agree,
/// bounded in (0, 1] otherwise, maximized at an even split.
fn split_score(outcomes: &[ExecutionOutcome]) -> f64 {
    let tally = tally_outcomes(outcomes);
    if tally.len() <= 1 {
        return 0.0;
    }
    let largest = tally.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let rest = outcomes.len() - largest;
    if rest == 0 {
        return 0.0;
    }
    largest.min(rest) as f64 / largest.max(rest) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TableExecutor;

    fn pool_of(sources: &[&str]) -> Vec<Candidate> {
        sources.iter().map(|source| Candidate::new(*source)).collect()
    }

    #[tokio::test]
    async fn unanimous_test_scores_zero() {
        let pool = pool_of(&["a", "b", "c"]);
        let mut executor = TableExecutor::new();
        for candidate in &pool {
            executor = executor.with_row(candidate, "t", "1");
        }

        let ranked = rank_by_discriminating_power(&executor, &["t".to_string()], &pool).await;
        assert_eq!(ranked, vec![("t".to_string(), 0.0)]);
    }

    #[tokio::test]
    async fn even_split_scores_one() {
        let pool = pool_of(&["a", "b", "c", "d"]);
        let executor = TableExecutor::new()
            .with_row(&pool[0], "t", "1")
            .with_row(&pool[1], "t", "1")
            .with_row(&pool[2], "t", "2")
            .with_row(&pool[3], "t", "2");

        let ranked = rank_by_discriminating_power(&executor, &["t".to_string()], &pool).await;
        assert_eq!(ranked[0].1, 1.0);
    }

    #[tokio::test]
    async fn ranking_is_descending() {
        let pool = pool_of(&["a", "b", "c", "d"]);
        // "even" splits 2/2, "skewed" splits 3/1, "flat" is unanimous.
        let executor = TableExecutor::new()
            .with_row(&pool[0], "even", "1")
            .with_row(&pool[1], "even", "1")
            .with_row(&pool[2], "even", "2")
            .with_row(&pool[3], "even", "2")
            .with_row(&pool[0], "skewed", "1")
            .with_row(&pool[1], "skewed", "1")
            .with_row(&pool[2], "skewed", "1")
            .with_row(&pool[3], "skewed", "2")
            .with_row(&pool[0], "flat", "1")
            .with_row(&pool[1], "flat", "1")
            .with_row(&pool[2], "flat", "1")
            .with_row(&pool[3], "flat", "1");

        let tests = vec!["flat".to_string(), "skewed".to_string(), "even".to_string()];
        let ranked = rank_by_discriminating_power(&executor, &tests, &pool).await;

        assert_eq!(ranked[0].0, "even");
        assert_eq!(ranked[0].1, 1.0);
        assert_eq!(ranked[1].0, "skewed");
        assert!((ranked[1].1 - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(ranked[2].0, "flat");
        assert_eq!(ranked[2].1, 0.0);
    }

    #[tokio::test]
    async fn failure_group_participates_in_the_split() {
        // One candidate fails, two agree: the split is 2 vs 1 even though
        // one side of it is the failure group.
        let pool = pool_of(&["a", "b", "c"]);
        let executor = TableExecutor::new()
            .with_row(&pool[0], "t", "1")
            .with_row(&pool[1], "t", "1");

        let ranked = rank_by_discriminating_power(&executor, &["t".to_string()], &pool).await;
        assert!((ranked[0].1 - 0.5).abs() < 1e-12);
    }

    #[tokio::test]
    async fn equal_scores_keep_supplied_order() {
        let pool = pool_of(&["a", "b"]);
        let executor = TableExecutor::new()
            .with_row(&pool[0], "t1", "1")
            .with_row(&pool[1], "t1", "2")
            .with_row(&pool[0], "t2", "3")
            .with_row(&pool[1], "t2", "4");

        let tests = vec!["t1".to_string(), "t2".to_string()];
        let ranked = rank_by_discriminating_power(&executor, &tests, &pool).await;
        assert_eq!(ranked[0].0, "t1");
        assert_eq!(ranked[1].0, "t2");
    }
}
