//! Inclusive prefix-sum scan over the candy counts.
//!
//! `sums[i]` is the candy total of homes `0..=i`. Counts are non-negative,
//! so the sequence is non-decreasing, which is what lets the bounded search
//! binary-search over it. Sums are `u64` against `u32` counts, so the scan
//! cannot overflow.

use anyhow::{Result, anyhow};

/// Sequential inclusive scan. O(n), always correct; the fallback for small
/// inputs and the reference the parallel scan is validated against.
pub fn inclusive_scan(pieces: &[u32]) -> Vec<u64> {
    let mut sums = Vec::with_capacity(pieces.len());
    let mut running = 0u64;
    for &count in pieces {
        running += u64::from(count);
        sums.push(running);
    }
    sums
}

/// Stride-doubling (Hillis-Steele) scan across a worker pool.
///
/// Each round reads a snapshot of the previous round's buffer and writes a
/// fresh one, so no lane ever reads a slot another lane is overwriting. The
/// end of a round's thread scope is the barrier between rounds: every write
/// lands before the next round starts reading. O(n log n) work, O(log n)
/// rounds, identical output to [`inclusive_scan`].
pub fn inclusive_scan_parallel(pieces: &[u32], workers: usize) -> Result<Vec<u64>> {
    let n = pieces.len();
    if workers <= 1 || n < 2 {
        return Ok(inclusive_scan(pieces));
    }

    let mut current: Vec<u64> = pieces.iter().map(|&count| u64::from(count)).collect();
    let mut next = vec![0u64; n];
    let chunk_len = n.div_ceil(workers);

    let mut stride = 1usize;
    while stride < n {
        let snapshot = &current;
        crossbeam::thread::scope(|s| {
            for (chunk_index, out) in next.chunks_mut(chunk_len).enumerate() {
                let base = chunk_index * chunk_len;
                s.spawn(move |_| {
                    for (offset, slot) in out.iter_mut().enumerate() {
                        let i = base + offset;
                        *slot = if i >= stride {
                            snapshot[i] + snapshot[i - stride]
                        } else {
                            snapshot[i]
                        };
                    }
                });
            }
        })
        .map_err(|_| anyhow!("Worker panic during prefix scan"))?;

        std::mem::swap(&mut current, &mut next);
        stride *= 2;
    }

    Ok(current)
}
