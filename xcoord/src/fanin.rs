//! Fan-out/fan-in summation over partitioned sequences.
//!
//! The input is split into two contiguous partitions, each summed on its
//! own task; both partial sums arrive on one shared rendezvous channel and
//! are combined by the coordinator. The rendezvous is order-independent
//! per value and addition is commutative, so the result does not depend on
//! which worker finishes first.

use std::time::{Duration, Instant};

use log::debug;

use crate::channel::{self, Receiver};
use crate::error::{Error, Result};
use crate::pool::TaskPool;

/// Sums `values` by splitting at the midpoint across two worker tasks.
pub fn partitioned_sum(pool: &TaskPool, values: &[i64]) -> Result<i64> {
    partitioned_sum_at(pool, values, values.len() / 2)
}

/// Sums `values` split at an arbitrary point, empty partitions included.
///
/// The coordinator performs exactly two blocking receives; worker
/// completion order is unspecified. A worker that dies without sending
/// surfaces as [`Error::Disconnected`], but a worker that stays alive
/// without ever sending blocks this call indefinitely — that is the bare
/// fan-in semantics. Use [`partitioned_sum_deadline`] for a bounded wait.
pub fn partitioned_sum_at(pool: &TaskPool, values: &[i64], split: usize) -> Result<i64> {
    let results = spawn_partition_workers(pool, values, split)?;

    let first = results.recv().ok_or(Error::Disconnected)?;
    let second = results.recv().ok_or(Error::Disconnected)?;
    debug!("combining partial sums {first} and {second}");

    Ok(first + second)
}

/// Bounded-wait variant of [`partitioned_sum_at`].
///
/// Both partial sums must arrive within `wait` of the call, otherwise
/// [`Error::Timeout`] is returned and the stragglers are abandoned to
/// finish on their own.
pub fn partitioned_sum_deadline(
    pool: &TaskPool,
    values: &[i64],
    split: usize,
    wait: Duration,
) -> Result<i64> {
    let results = spawn_partition_workers(pool, values, split)?;
    let deadline = Instant::now() + wait;

    let mut total = 0i64;
    for _ in 0..2 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        total += results.recv_timeout(remaining)?;
    }

    Ok(total)
}

fn spawn_partition_workers(
    pool: &TaskPool,
    values: &[i64],
    split: usize,
) -> Result<Receiver<i64>> {
    if split > values.len() {
        return Err(Error::SplitOutOfBounds {
            index: split,
            len: values.len(),
        });
    }
    let (low, high) = values.split_at(split);

    let (tx, rx) = channel::bounded(0);
    for (name, part) in [("sum-low", low.to_vec()), ("sum-high", high.to_vec())] {
        let tx = tx.clone();
        pool.spawn(name, move || {
            let partial: i64 = part.iter().sum();
            debug!("summed {} values into {partial}", part.len());
            // The coordinator may have given up on a deadline; a departed
            // receiver is not this worker's failure.
            let _ = tx.send(partial);
        })?;
    }

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_split() {
        let pool = TaskPool::new("test");
        let values = [7, 2, 8, -9, 4, 0];
        assert_eq!(partitioned_sum(&pool, &values).unwrap(), 12);
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_any_split_point_gives_the_same_sum() {
        let pool = TaskPool::new("test");
        let values = [7, 2, 8, -9, 4, 0];
        for split in 0..=values.len() {
            assert_eq!(partitioned_sum_at(&pool, &values, split).unwrap(), 12);
        }
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_empty_sequence() {
        let pool = TaskPool::new("test");
        assert_eq!(partitioned_sum(&pool, &[]).unwrap(), 0);
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_split_out_of_bounds() {
        let pool = TaskPool::new("test");
        let result = partitioned_sum_at(&pool, &[1, 2, 3], 4);
        assert!(matches!(
            result,
            Err(Error::SplitOutOfBounds { index: 4, len: 3 })
        ));
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_deadline_variant_completes() {
        let pool = TaskPool::new("test");
        let values = [7, 2, 8, -9, 4, 0];
        let total = partitioned_sum_deadline(&pool, &values, 3, Duration::from_secs(1)).unwrap();
        assert_eq!(total, 12);
        pool.shutdown().unwrap();
    }
}
