//! Candy-run solvers.
//!
//! Two strategies compute the same contract. The sliding window scan is the
//! O(n) single-threaded baseline and the correctness reference. The parallel
//! pipeline builds an inclusive prefix-sum sequence, runs an independent
//! bounded search per end home, and reduces the per-home candidates into one
//! global best. A single entry point, [`Solver::solve`], picks the strategy
//! from the configured mode and the available hardware.

pub mod prefix;
pub mod search;
pub mod sliding;

use crate::input::RouteInput;
use crate::parallel::ExecutionStrategy;
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// A contiguous run of homes and its candy total.
///
/// `start` and `end` are 0-based inclusive indices into the street; the
/// presentation layer converts to 1-based homes. A run only exists with
/// `pieces > 0` and `pieces <= capacity`; "no valid run" is `None` at the
/// API boundary, never a partially filled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandyRun {
    pub start: usize,
    pub end: usize,
    pub pieces: u64,
}

/// Preference order for candidate runs: more candy wins, then the earlier
/// start, then the earlier end. Greater means better.
///
/// The third key makes this a total order even between equal-total runs that
/// differ only in a zero-candy tail, so folding candidates with `max` is
/// associative and commutative and every merge order (sequential fold, tree
/// reduction, lanes over a channel) yields the same answer. It also matches
/// the sliding window exactly, which keeps the first run it discovers:
/// smallest `end`, and for that `end` the smallest reachable `start`.
impl Ord for CandyRun {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pieces
            .cmp(&other.pieces)
            .then_with(|| other.start.cmp(&self.start))
            .then_with(|| other.end.cmp(&self.end))
    }
}

impl PartialOrd for CandyRun {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fold one candidate into a running best under the [`CandyRun`] order.
pub(crate) fn merge_best(best: Option<CandyRun>, candidate: Option<CandyRun>) -> Option<CandyRun> {
    match (best, candidate) {
        (Some(held), Some(new)) => Some(held.max(new)),
        (held, new) => held.or(new),
    }
}

/// Processing mode for a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMode {
    /// Pick parallel or sequential based on workload and cores
    Auto,
    /// Force the prefix-sum search over a worker pool
    Parallel,
    /// Force the single-threaded sliding window
    Sequential,
}

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub mode: SolveMode,
    /// Hard cap on worker threads (0 = derive from CPU cores)
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100)
    pub thread_percentage: u8,
    /// Minimum number of homes before auto mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: SolveMode::Auto,
            max_threads: 0,
            thread_percentage: 75,
            parallel_threshold: 1024,
        }
    }
}

/// Result of one solve call.
#[derive(Debug)]
pub struct SolveReport {
    /// The best run, or `None` when no non-empty run fits the bag.
    pub run: Option<CandyRun>,
    /// The strategy that produced it.
    pub strategy: ExecutionStrategy,
}

/// Entry point that owns strategy selection and dispatch.
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Solve one route. Total over any well-formed input: an empty street or
    /// an all-zero street yields `run: None`, not an error. The only failure
    /// is a worker panic in the parallel strategy.
    pub fn solve(&self, input: &RouteInput) -> Result<SolveReport> {
        let strategy = self.pick_strategy(input.num_homes());
        debug!(
            homes = input.num_homes(),
            capacity = input.capacity(),
            %strategy,
            "solving candy route"
        );

        let run = match strategy {
            ExecutionStrategy::Sequential => sliding::best_run(input),
            ExecutionStrategy::Parallel { workers } => {
                let prefix = prefix::inclusive_scan_parallel(input.pieces(), workers)?;
                search::best_run_parallel(input, &prefix, workers)?
            }
        };

        Ok(SolveReport { run, strategy })
    }

    fn pick_strategy(&self, num_homes: usize) -> ExecutionStrategy {
        match self.config.mode {
            SolveMode::Sequential => ExecutionStrategy::Sequential,
            SolveMode::Parallel => {
                let max_workers = ExecutionStrategy::calculate_optimal_workers(
                    self.config.max_threads,
                    self.config.thread_percentage,
                );
                ExecutionStrategy::Parallel {
                    workers: std::cmp::min(max_workers, num_homes.max(1)),
                }
            }
            SolveMode::Auto => {
                let max_workers = ExecutionStrategy::calculate_optimal_workers(
                    self.config.max_threads,
                    self.config.thread_percentage,
                );
                ExecutionStrategy::auto(num_homes, self.config.parallel_threshold, max_workers)
            }
        }
    }
}
