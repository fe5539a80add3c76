mod animator;
mod evaluator;
mod placements;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::tetrify::prelude::*;

pub use animator::animate;
pub use evaluator::{Evaluator, Feature};
pub use placements::Placement;

/// Per-request solver parameters. The tolerances are invariant inputs
/// across the whole search; the seed fixes the RNG for reproducible runs.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    pub allowed_false_positives: u32,
    pub allowed_false_negatives: u32,
    pub enforce_gravity: bool,
    pub reduce_is: bool,
    pub seed: Option<u64>,
}

/// The verdict on a single search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NotDone,
    Success,
    Failure,
}

/// Counters for one solve run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Search nodes entered, the root included.
    pub nodes: u64,
    /// Boards rejected by the failure predicate, during enumeration and at
    /// node entry alike.
    pub prunes: u64,
    /// Solutions streamed to the caller.
    pub solutions: u64,
}

/// The tetrify solver: a depth-first, score-guided, backtracking search
/// over tetromino placements. Solutions are streamed through a callback as
/// they are found; the search keeps going until the space is exhausted or
/// the callback asks it to stop.
pub struct Solver {
    config: SolverConfig,
    evaluator: Evaluator,
    rng: StdRng,
    stats: SearchStats,
    cancelled: bool,
}

impl Solver {
    /// Builds a solver for one request.
    pub fn new(config: SolverConfig) -> Solver {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Solver {
            config,
            evaluator: Evaluator::new(config.reduce_is),
            rng,
            stats: SearchStats::default(),
            cancelled: false,
        }
    }

    /// The counters of the most recent run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether this board already busts its budgets: hard false positives
    /// over the line, or enough stranded stragglers that covering them all
    /// must push it over. The second clause is a heuristic lower bound, not
    /// an exact feasibility oracle, but it only ever rejects boards that
    /// genuinely need at least one false positive per open island.
    pub fn did_fail(&mut self, board: &Board) -> bool {
        let (stragglers, islands) = board.count_stragglers();
        let false_positives = board.count_false_positives();
        let failed = false_positives > self.config.allowed_false_positives
            || (false_positives + islands > self.config.allowed_false_positives
                && stragglers > self.config.allowed_false_negatives);
        if failed {
            self.stats.prunes += 1;
        }
        failed
    }

    /// Runs the search to exhaustion, invoking `on_success` with the reified
    /// animation for every solution found. A `false` from the callback stops
    /// the stream cooperatively.
    pub fn solve<F>(&mut self, board: &Board, mut on_success: F) -> Result<SearchStats>
    where
        F: FnMut(Animation) -> bool,
    {
        self.stats = SearchStats::default();
        self.cancelled = false;

        let mut sequence: Vec<Placement> = Vec::new();
        self.search(board, board, &mut sequence, 0, &mut on_success)?;

        log::info!(
            "search finished: {} nodes, {} prunes, {} solutions",
            self.stats.nodes,
            self.stats.prunes,
            self.stats.solutions
        );
        Ok(self.stats)
    }

    /// The verdict on a node: dead, solved, or still worth expanding.
    fn evaluate(&mut self, board: &Board) -> Status {
        if self.did_fail(board) {
            Status::Failure
        } else if board.count_false_negatives() <= self.config.allowed_false_negatives {
            Status::Success
        } else {
            Status::NotDone
        }
    }

    /// One node of the depth-first search. Every success is streamed from
    /// the node that detects it, then deliberately reported upward as a
    /// failure so the traversal moves on to the next candidate (anytime
    /// streaming). Each recursion level owns its board clone, so undoing a
    /// candidate is simply dropping it.
    fn search<F>(
        &mut self,
        origin: &Board,
        board: &Board,
        sequence: &mut Vec<Placement>,
        depth: usize,
        on_success: &mut F,
    ) -> Result<Status>
    where
        F: FnMut(Animation) -> bool,
    {
        self.stats.nodes += 1;
        if self.cancelled {
            return Ok(Status::Failure);
        }

        match self.evaluate(board) {
            Status::Failure => return Ok(Status::Failure),
            Status::Success => {
                self.stats.solutions += 1;
                log::debug!("streaming a {}-placement solution at depth {depth}", sequence.len());
                if !on_success(animate(origin, sequence)?) {
                    self.cancelled = true;
                }
                return Ok(Status::Failure);
            }
            Status::NotDone => {}
        }

        for placement in self.candidates(board)? {
            if self.cancelled {
                break;
            }

            let mut child = board.clone();
            child.apply(&placement.shape, placement.anchor, !self.config.enforce_gravity)?;

            sequence.push(placement);
            self.search(origin, &child, sequence, depth + 1, on_success)?;
            sequence.pop();
        }
        Ok(Status::Failure)
    }

    /// The node's exploration order: placements for all pieces (visited in a
    /// random order), sorted by score descending, with every equal-score run
    /// shuffled uniformly at random.
    fn candidates(&mut self, board: &Board) -> Result<Vec<Placement>> {
        let mut pieces = Piece::all();
        pieces.shuffle(&mut self.rng);

        let mut placements: Vec<Placement> = Vec::new();
        for piece in pieces {
            placements.extend(self.scored_placements(board, piece)?);
        }

        placements.sort_by(|a, b| b.score.cmp(&a.score));
        let mut start = 0;
        while start < placements.len() {
            let mut end = start + 1;
            while end < placements.len() && placements[end].score == placements[start].score {
                end += 1;
            }
            placements[start..end].shuffle(&mut self.rng);
            start = end;
        }
        Ok(placements)
    }
}
