//! Route input loading and validation.
//!
//! An input file carries, separated by any whitespace: the home count, the
//! candy limit, then one candy count per home. The loader either produces a
//! fully populated [`RouteInput`] or fails with context; the solvers never
//! touch the raw stream themselves.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// In-memory model of one solve request: per-home candy counts plus the bag
/// capacity. Read-only once loaded.
///
/// Candy counts are `u32` while every running sum in the crate is `u64`, so
/// a sum over any addressable sequence cannot overflow.
#[derive(Debug, Clone)]
pub struct RouteInput {
    pieces: Vec<u32>,
    capacity: u64,
}

impl RouteInput {
    /// Build a route directly from its parts.
    pub fn new(pieces: Vec<u32>, capacity: u64) -> Self {
        Self { pieces, capacity }
    }

    /// Load a route from a text file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid input file {}", path.display()))
    }

    /// Parse the whitespace-separated wire format. Tokens after the declared
    /// number of homes are ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tokens = raw.split_whitespace();

        let num_homes: usize = match tokens.next() {
            Some(tok) => tok
                .parse()
                .with_context(|| format!("Invalid home count '{tok}'"))?,
            None => bail!("Missing home count"),
        };
        let capacity: u64 = match tokens.next() {
            Some(tok) => tok
                .parse()
                .with_context(|| format!("Invalid candy limit '{tok}'"))?,
            None => bail!("Missing candy limit"),
        };

        let mut pieces = Vec::with_capacity(num_homes);
        for home in 0..num_homes {
            match tokens.next() {
                Some(tok) => {
                    let count: u32 = tok.parse().with_context(|| {
                        format!("Invalid candy count '{}' for home {}", tok, home + 1)
                    })?;
                    pieces.push(count);
                }
                None => bail!("Declared {num_homes} homes but found only {home} candy counts"),
            }
        }

        Ok(Self { pieces, capacity })
    }

    /// Candy counts, one per home, in street order.
    pub fn pieces(&self) -> &[u32] {
        &self.pieces
    }

    /// Inclusive upper bound on the candy a run may collect.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn num_homes(&self) -> usize {
        self.pieces.len()
    }
}
