//! Shortest-path solver for sliding block puzzles.
//!
//! Rigid rectangular pieces slide one cell at a time on a small grid without
//! overlapping or leaving it. [`solve_puzzle::solve_puzzle`] runs a
//! breadth-first search from a starting [`board::Board`] to any board that
//! satisfies a [`goal::Goal`], and returns the fewest-move solution.

pub mod board;
pub mod config;
pub mod fingerprint;
pub mod goal;
pub mod piece;
pub mod puzzles;
pub mod solve_puzzle;
pub mod structs;
pub mod util;
