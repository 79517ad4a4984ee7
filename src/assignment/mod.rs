//! Weighted bipartite assignment.
//!
//! Two formulations of the same problem over an n×n [`CostMatrix`]:
//!
//! - [`AssignmentProblem`]: tree construction. Grows a partial assignment
//!   cell by cell, with an admissible lower-bound heuristic for informed
//!   and bound-based search.
//! - [`LocalAssignmentProblem`]: neighborhood search. Starts from a
//!   complete permutation and improves it through pairwise swaps with
//!   constant-time incremental cost updates.

mod local;
mod matrix;
mod tree;

pub use local::LocalAssignmentProblem;
pub use matrix::CostMatrix;
pub use tree::{AssignmentProblem, TreeAssignmentContext};
