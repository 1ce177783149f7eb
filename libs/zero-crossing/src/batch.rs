//! # Batch Scans
//!
//! Collect-all over many independent sequences in parallel. Each scan owns
//! its cursor and previous value, so no coordination is needed between them.

use rayon::prelude::*;
use tracing::debug;

use crate::detector::CrossingDetector;
use crate::gap::Scalar;

/// Run [`CrossingDetector::collect_all`] on every sequence, in parallel.
///
/// Results keep the order of `sequences`.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::{zero_cross_batch, ScalarDetector};
///
/// let channels = vec![vec![-1.0, 1.0], vec![1.0, 2.0], vec![2.0, -2.0, 2.0]];
/// let found = zero_cross_batch(&ScalarDetector::new(), &channels);
/// assert_eq!(found, vec![vec![1.0], vec![], vec![-2.0, 2.0]]);
/// ```
pub fn zero_cross_batch<Q, T, P, S>(
    detector: &CrossingDetector<P, S>,
    sequences: &[Q],
) -> Vec<Vec<T>>
where
    Q: AsRef<[T]> + Sync,
    T: Clone + Send + Sync,
    P: Fn(&T) -> S + Sync,
    S: Scalar + Sync,
{
    let results: Vec<Vec<T>> = sequences
        .par_iter()
        .map(|sequence| detector.collect_all(sequence.as_ref().iter().cloned()))
        .collect();

    debug!(
        sequences = sequences.len(),
        crossings = results.iter().map(Vec::len).sum::<usize>(),
        "batch zero-crossing scan finished"
    );
    results
}
