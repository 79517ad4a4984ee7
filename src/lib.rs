//! State-space formulations of combinatorial optimization problems.
//!
//! Exposes classic problems through a uniform capability contract so that
//! generic search algorithms (best-first, beam, branch-and-bound,
//! hill-climbing, simulated annealing, ...) can consume them without knowing
//! anything problem-specific:
//!
//! - **Tree-construction assignment**: builds a complete row-to-column
//!   assignment one cell at a time, with an admissible lower-bound heuristic
//!   for informed and bound-based search.
//! - **Local-search assignment**: starts from a complete permutation and
//!   improves it through pairwise swaps with constant-time incremental cost
//!   updates.
//! - **Local-search graph partition**: starts from a random vertex subset
//!   and improves the edge cut through membership swaps that preserve the
//!   partition size.
//!
//! # Architecture
//!
//! The dependency is strictly one-directional: a search algorithm holds a
//! [`problem::Problem`] implementation, repeatedly asks it for successors, a
//! value estimate, or a goal test, and decides which [`problem::Node`]s to
//! keep exploring. Formulations never call back into the algorithms; they
//! only describe states, transitions, and bounds. Successor generation is
//! lazy, so width-limited consumers can evaluate a prefix of a neighborhood
//! without materializing the full fan-out.
//!
//! All randomized operations draw from an explicitly injected [`rand::Rng`],
//! never from ambient global state, so any run is reproducible from a seed.

pub mod assignment;
pub mod generate;
pub mod partition;
pub mod problem;
