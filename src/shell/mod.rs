mod options;
mod protocol;

pub use options::ShellOptions;
pub use protocol::{Channel, EOF_SENTINEL, SolveRequest};

use crate::prelude::*;

/// Serves one tetrify request over the stdin/stdout JSON channel: read the
/// target and tolerances, run the search, and stream a frames line per
/// solution until the space is exhausted or the reader goes away.
pub struct Shell {
    options: ShellOptions,
}

impl Shell {
    /// Produces a new shell with the given configuration.
    pub fn new(options: ShellOptions) -> Shell {
        Shell { options }
    }

    /// Runs the request to completion.
    pub fn run(&mut self) -> Result<()> {
        let request = self.read_request()?;
        let board = Board::from_target(&request.target()?)?;

        let mut channel = Channel::new(std::io::stdout());
        channel.log("Running...")?;
        log::debug!("target board:\n{}", board.pretty());

        log::info!(
            "solving a {}x{} target (fp<={}, fn<={}, gravity={}, reduce_Is={})",
            board.width(),
            board.height(),
            request.false_positives,
            request.false_negatives,
            request.enforce_gravity,
            request.reduce_is
        );

        let budget = self.options.max_solutions;
        let mut streamed: u64 = 0;
        let mut solver = Solver::new(self.options.solver_config(&request));
        let stats = solver.solve(&board, |animation| {
            if channel.frames(&animation).is_err() {
                // The reader hung up; there is nobody left to stream to.
                return false;
            }
            streamed += 1;
            budget.map_or(true, |max| streamed < max)
        })?;

        log::info!("served {streamed} of {} solutions found", stats.solutions);
        Ok(())
    }

    /// Reads the one JSON request line from stdin, skipping blank lines.
    fn read_request(&self) -> Result<SolveRequest> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = std::io::stdin().read_line(&mut line)?;
            if read == 0 {
                return Err(anyhow!("stdin closed before a request arrived"));
            }
            if line.trim().is_empty() {
                continue;
            }
            return serde_json::from_str(line.trim()).context("malformed request");
        }
    }
}
