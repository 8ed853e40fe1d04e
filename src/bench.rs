//! Wall-clock comparison harness for the change-making solvers.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::change::Composition;
use crate::error::Result;

/// Repeat count used by the demonstration driver.
pub const DEFAULT_RUNS: usize = 5;

/// Times `solver` on each amount and returns the mean seconds per call.
///
/// Every amount is solved `runs` times; each invocation is timed
/// individually and the arithmetic mean is recorded. The solver output
/// is discarded, and a failing solve is still a timed solve, so
/// unreachable amounts can be measured too. No warm-up runs are
/// excluded and no outliers are trimmed.
///
/// # Panics
///
/// Panics if `runs` is zero.
///
/// # Examples
///
/// ```
/// use coinchange::{benchmark, min_coin_change};
///
/// let timings = benchmark(min_coin_change, &[10, 100], &[25, 10, 1], 3);
/// assert_eq!(timings.len(), 2);
/// ```
pub fn benchmark<F>(
    solver: F,
    amounts: &[usize],
    denominations: &[usize],
    runs: usize,
) -> BTreeMap<usize, f64>
where
    F: Fn(&[usize], usize) -> Result<Composition>,
{
    assert!(runs > 0, "benchmark needs at least one run per amount");

    let mut results = BTreeMap::new();

    for &amount in amounts {
        let mut elapsed = 0.0;

        for _ in 0..runs {
            let start = Instant::now();
            let _ = solver(denominations, amount);
            elapsed += start.elapsed().as_secs_f64();
        }

        let mean = elapsed / runs as f64;
        log::debug!("amount {}: mean {:.9}s over {} runs", amount, mean, runs);
        results.insert(amount, mean);
    }

    results
}
