//! # Candyrun - Bounded Candy Route Planning
//!
//! Given an ordered street of homes, each handing out a known number of
//! candy pieces, and a bag that holds at most a fixed number of pieces,
//! find the contiguous run of homes whose candy total is the largest value
//! that still fits in the bag.
//!
//! Two interchangeable solvers compute the same answer:
//!
//! - a single-threaded **sliding window** scan, O(n) time and O(1) space;
//! - a **prefix-sum + bounded search** pipeline that is data-parallel
//!   across a fixed worker pool.
//!
//! ## Quick Start
//!
//! ```bash
//! # Solve the default input.txt in the current directory
//! candyrun
//!
//! # Solve a specific route, forcing the parallel strategy
//! candyrun route.txt --mode parallel --stats
//! ```

pub mod cli;
pub mod input;
pub mod parallel;
pub mod solver;

pub use cli::{Cli, Output};
pub use input::RouteInput;
pub use solver::{CandyRun, SolveMode, Solver, SolverConfig};

/// Result type alias for candyrun operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
