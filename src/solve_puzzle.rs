//! Breadth-first search for the shortest move sequence.
//!
//! Boards leave the frontier in non-decreasing order of depth, and each
//! fingerprint is enqueued at most once, at the first (shallowest) depth it is
//! reached. The first dequeued board that satisfies the goal therefore has the
//! fewest possible moves.

use crate::board::Board;
use crate::config::{PROGRESS_LOG_INTERVAL, SEEN_CAPACITY_HINT};
use crate::fingerprint::Fingerprint;
use crate::goal::Goal;
use crate::structs::Move;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use thousands::Separable;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub configurations: usize, // distinct fingerprints seen, start included
    pub skipped: usize,        // generated boards discarded as already seen
    pub expanded: usize,       // boards dequeued and expanded
    pub max_frontier: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_configurations: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search stopped after {observed} configurations (limit {limit})")]
    LimitExceeded {
        limit: usize,
        observed: usize,
        stats: SearchStats,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub board: Board,
    pub stats: SearchStats,
}

impl Solution {
    pub fn moves(&self) -> &[Move] {
        self.board.moves()
    }

    pub fn len(&self) -> usize {
        self.board.depth()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    Unsolvable(SearchStats),
}

impl Outcome {
    pub fn stats(&self) -> SearchStats {
        match self {
            Outcome::Solved(solution) => solution.stats,
            Outcome::Unsolvable(stats) => *stats,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Unsolvable(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// One board was expanded; the search goes on.
    Expanded { depth: usize, frontier: usize },
    /// The search has finished. Repeated calls return the same outcome.
    Done(Outcome),
}

/// State of one breadth-first run. Owns its frontier and seen-set, so
/// separate searches never share anything.
pub struct Search<G> {
    goal: G,
    limits: SearchLimits,
    frontier: VecDeque<Board>,
    seen: HashSet<Fingerprint>,
    stats: SearchStats,
    outcome: Option<Outcome>,
    halted: Option<SearchError>,
}

impl<G: Goal> Search<G> {
    pub fn new(start: Board, goal: G) -> Self {
        Self::with_limits(start, goal, SearchLimits::default())
    }

    pub fn with_limits(start: Board, goal: G, limits: SearchLimits) -> Self {
        log::info!(
            "Searching {}x{} board with {} pieces",
            start.width(),
            start.height(),
            start.piece_count()
        );

        let capacity = limits
            .max_configurations
            .map_or(SEEN_CAPACITY_HINT, |max| max.min(SEEN_CAPACITY_HINT));
        let mut seen = HashSet::with_capacity(capacity);
        seen.insert(start.fingerprint());

        let mut frontier = VecDeque::with_capacity(capacity);
        frontier.push_back(start);

        Self {
            goal,
            limits,
            frontier,
            seen,
            stats: SearchStats {
                configurations: 1,
                max_frontier: 1,
                ..SearchStats::default()
            },
            outcome: None,
            halted: None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Dequeues one board: reports it if it is a goal, otherwise enqueues
    /// its unseen children.
    ///
    /// Once the configuration budget is exceeded every later call returns the
    /// same error; the search is not resumed from a partial expansion.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }
        if let Some(outcome) = &self.outcome {
            return Ok(Step::Done(outcome.clone()));
        }

        let Some(current) = self.frontier.pop_front() else {
            log::info!(
                "No solution after {} configurations",
                self.stats.configurations.separate_with_commas()
            );
            return Ok(self.finish(Outcome::Unsolvable(self.stats)));
        };

        if self.goal.is_goal(&current) {
            log::info!(
                "Found solution ({} moves, {} configurations, {} skipped)",
                current.depth(),
                self.stats.configurations.separate_with_commas(),
                self.stats.skipped.separate_with_commas()
            );
            let solution = Solution {
                board: current,
                stats: self.stats,
            };
            return Ok(self.finish(Outcome::Solved(solution)));
        }

        for mv in current.legal_moves() {
            let next = current.apply(&mv);
            let fingerprint = next.fingerprint();
            if self.seen.contains(&fingerprint) {
                self.stats.skipped += 1;
                continue;
            }
            if let Some(limit) = self.limits.max_configurations {
                if self.seen.len() >= limit {
                    let err = SearchError::LimitExceeded {
                        limit,
                        observed: self.seen.len() + 1,
                        stats: self.stats,
                    };
                    log::info!("{err}");
                    self.frontier.clear();
                    self.halted = Some(err.clone());
                    return Err(err);
                }
            }
            self.seen.insert(fingerprint);
            self.stats.configurations = self.seen.len();
            self.frontier.push_back(next);
        }

        self.stats.expanded += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());

        if self.stats.expanded % PROGRESS_LOG_INTERVAL == 0 {
            log::debug!(
                "Expanded {} boards, depth {}, frontier {}, configurations {}",
                self.stats.expanded.separate_with_commas(),
                current.depth(),
                self.frontier.len().separate_with_commas(),
                self.stats.configurations.separate_with_commas()
            );
        }

        Ok(Step::Expanded {
            depth: current.depth(),
            frontier: self.frontier.len(),
        })
    }

    /// Steps until the search finishes.
    pub fn run(mut self) -> Result<Outcome, SearchError> {
        loop {
            if let Step::Done(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        self.frontier.clear();
        self.outcome = Some(outcome.clone());
        Step::Done(outcome)
    }
}

/// Finds the shortest move sequence from `start` to a board satisfying `goal`.
pub fn solve_puzzle(
    start: Board,
    goal: impl Goal,
    limits: SearchLimits,
) -> Result<Outcome, SearchError> {
    Search::with_limits(start, goal, limits).run()
}
