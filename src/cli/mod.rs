//! Command-line interface for candyrun.
//!
//! A single command: point it at a route file (or let it pick up
//! `input.txt`) and it prints where to start, where to stop, and how much
//! candy the bag ends up holding.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod output;
pub use output::Output;

use crate::input::RouteInput;
use crate::solver::{CandyRun, SolveMode, SolveReport, Solver, SolverConfig};

/// Candyrun - plan the best candy route through the neighborhood
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Route file: home count, candy limit, then one candy count per home
    #[arg(value_name = "INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: SolveMode,

    /// Maximum worker threads (0 = derive from CPU cores)
    #[arg(long, env = "CANDYRUN_THREADS", default_value_t = 0)]
    pub threads: usize,

    /// Percentage of CPU cores to use (1-100)
    #[arg(long, default_value_t = 75)]
    pub thread_percentage: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show statistics after solving
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (result line only)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sentence
    Text,
    /// JSON object with the run and solve statistics
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        self.init_tracing();
        let output = Output::new(self.verbose, self.quiet);

        let input = RouteInput::from_path(&self.input)?;
        output.verbose_step(
            "🏠",
            &format!(
                "Loaded {} homes with a candy limit of {}",
                input.num_homes(),
                input.capacity()
            ),
        );

        let solver = Solver::new(SolverConfig {
            mode: self.mode,
            max_threads: self.threads,
            thread_percentage: self.thread_percentage.clamp(1, 100),
            ..SolverConfig::default()
        });

        let started = Instant::now();
        let report = solver.solve(&input)?;
        let elapsed = started.elapsed();

        match self.format {
            OutputFormat::Json => print_json(&input, &report, elapsed)?,
            OutputFormat::Text => {
                println!("{}", render_run(report.run.as_ref()));
                if self.stats {
                    output.section_header("Solve statistics");
                    output.key_value("Homes:", &input.num_homes().to_string());
                    output.key_value("Candy limit:", &input.capacity().to_string());
                    output.key_value("Strategy:", &report.strategy.to_string());
                    output.key_value("Solve time:", &format!("{}ms", elapsed.as_millis()));
                }
            }
        }

        Ok(())
    }

    fn init_tracing(&self) {
        // Quiet mode keeps stderr clear of warnings so the result line
        // stays the only thing scripts have to parse.
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    }
}

/// Render the answer the way trick-or-treaters read it: 1-based homes,
/// inclusive on both ends.
pub fn render_run(run: Option<&CandyRun>) -> String {
    match run {
        Some(run) => format!(
            "Start at home {} and go to home {} getting {} pieces of candy",
            run.start + 1,
            run.end + 1,
            run.pieces
        ),
        None => "Don't go here".to_string(),
    }
}

fn print_json(input: &RouteInput, report: &SolveReport, elapsed: Duration) -> Result<()> {
    use serde_json::json;

    let rendered = json!({
        "run": report.run.map(|run| json!({
            "start_home": run.start + 1,
            "end_home": run.end + 1,
            "pieces": run.pieces,
        })),
        "statistics": {
            "homes": input.num_homes(),
            "candy_limit": input.capacity(),
            "strategy": report.strategy.to_string(),
            "solve_duration_ms": elapsed.as_millis() as u64,
        }
    });

    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
