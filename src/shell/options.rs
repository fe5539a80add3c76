use clap::Parser;

use crate::prelude::*;

/// Command-line options for the tetrify shell.
#[derive(Clone, Debug, Parser)]
pub struct ShellOptions {
    /// Log level for the stderr diagnostics.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Fixes the solver's RNG so a run can be reproduced exactly.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stops the solution stream after this many results.
    #[arg(short, long)]
    pub max_solutions: Option<u64>,
}

impl ShellOptions {
    /// Folds the request tolerances and the command-line knobs into a
    /// solver configuration.
    pub fn solver_config(&self, request: &SolveRequest) -> SolverConfig {
        SolverConfig {
            allowed_false_positives: request.false_positives,
            allowed_false_negatives: request.false_negatives,
            enforce_gravity: request.enforce_gravity,
            reduce_is: request.reduce_is,
            seed: self.seed,
        }
    }
}
