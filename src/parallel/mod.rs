//! Execution strategy selection and worker sizing.
//!
//! This module owns system resource management only: it knows about CPU
//! cores and thread limits, not about homes or candy. Solvers decide what
//! counts as a work item and what threshold makes parallelism worthwhile;
//! this module turns those numbers into a concrete strategy.

/// How a solve call is scheduled across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Single-threaded execution.
    Sequential,
    /// Fixed worker pool of the given size.
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    /// Maximum workers allowed by the machine and the user's limits.
    ///
    /// `thread_percentage` is the share of CPU cores to use (1-100).
    /// `max_threads` is a hard cap; 0 means the percentage alone decides.
    pub fn calculate_optimal_workers(max_threads: usize, thread_percentage: u8) -> usize {
        let cpu_cores = num_cpus::get();

        let max_by_percentage = std::cmp::max(1, (cpu_cores * thread_percentage as usize) / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, max_by_percentage)
        } else {
            max_by_percentage
        }
    }

    /// Pick a strategy for `work_count` items: parallel when the workload
    /// reaches `min_threshold` and more than one worker is available,
    /// sequential otherwise. Never sizes the pool past the work count.
    pub fn auto(work_count: usize, min_threshold: usize, max_workers: usize) -> Self {
        let workers = std::cmp::min(max_workers, work_count.max(1));
        if work_count >= min_threshold && workers > 1 {
            ExecutionStrategy::Parallel { workers }
        } else {
            ExecutionStrategy::Sequential
        }
    }

    /// Worker count implied by the strategy.
    pub fn workers(&self) -> usize {
        match self {
            ExecutionStrategy::Sequential => 1,
            ExecutionStrategy::Parallel { workers } => *workers,
        }
    }
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStrategy::Sequential => write!(f, "sequential"),
            ExecutionStrategy::Parallel { workers } => write!(f, "parallel ({workers} workers)"),
        }
    }
}
