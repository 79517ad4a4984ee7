//! Local-search formulation of the assignment problem.

use std::rc::Rc;

use rand::Rng;

use super::matrix::CostMatrix;
use crate::generate::random_permutation;
use crate::problem::{Node, Problem, ProblemNode};

/// Pairwise-swap neighborhood over complete assignments.
///
/// Every state is a full permutation of `0..n` (row `p` is assigned column
/// `state[p]`); there are no partial states. A neighbor swaps the columns of
/// two row positions, and its cost is derived from the parent's cost by a
/// four-term constant-time update instead of an O(n) recomputation. There is
/// no terminal state: [`goal_test`](Problem::goal_test) is always false and
/// the consuming algorithm's own budget decides when to stop.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use statespace::assignment::{CostMatrix, LocalAssignmentProblem};
/// use statespace::problem::Problem;
///
/// let costs = CostMatrix::new(vec![vec![1.0, 5.0], vec![5.0, 1.0]]).unwrap();
/// let problem = LocalAssignmentProblem::new(costs, vec![1, 0]).unwrap();
/// let start = Rc::new(problem.initial());
/// let improved = problem.successors(&start).next().unwrap();
/// assert_eq!(improved.cost(), 2.0);
/// ```
#[derive(Debug)]
pub struct LocalAssignmentProblem {
    costs: Rc<CostMatrix>,
    initial: Vec<usize>,
}

impl LocalAssignmentProblem {
    /// Creates the formulation with an explicit starting assignment.
    ///
    /// Returns an error if the matrix has fewer than 2 rows (no swap pair
    /// exists) or if `initial` is not a permutation of `0..n`.
    pub fn new(costs: CostMatrix, initial: Vec<usize>) -> Result<Self, String> {
        let n = costs.n();
        if n < 2 {
            return Err(format!("pairwise swaps need at least 2 rows, matrix has {n}"));
        }
        validate_permutation(&initial, n)?;
        Ok(Self {
            costs: Rc::new(costs),
            initial,
        })
    }

    /// Creates the formulation starting from a uniformly random assignment.
    pub fn with_random_initial<R: Rng>(costs: CostMatrix, rng: &mut R) -> Result<Self, String> {
        let initial = random_permutation(costs.n(), rng);
        Self::new(costs, initial)
    }

    /// Child of `node` that swaps the columns assigned to `p0` and `p1`.
    ///
    /// The cost update removes both positions' old terms and adds the two
    /// crossed terms, so it costs O(1) per successor.
    fn swap_successor(node: &Rc<ProblemNode<Self>>, p0: usize, p1: usize) -> ProblemNode<Self> {
        let costs = node.context();
        let state = node.state();
        let cost = node.cost() - costs.cost(p0, state[p0]) - costs.cost(p1, state[p1])
            + costs.cost(p0, state[p1])
            + costs.cost(p1, state[p0]);
        let mut swapped = state.clone();
        swapped.swap(p0, p1);
        Node::child(node, swapped, (p0, p1), cost)
    }
}

fn validate_permutation(assignment: &[usize], n: usize) -> Result<(), String> {
    if assignment.len() != n {
        return Err(format!(
            "assignment has {} entries, expected {n}",
            assignment.len()
        ));
    }
    let mut seen = vec![false; n];
    for &col in assignment {
        if col >= n {
            return Err(format!("column {col} out of range for a {n}x{n} matrix"));
        }
        if seen[col] {
            return Err(format!("column {col} assigned twice"));
        }
        seen[col] = true;
    }
    Ok(())
}

impl Problem for LocalAssignmentProblem {
    type State = Vec<usize>;
    type Action = (usize, usize);
    type Context = CostMatrix;

    fn initial(&self) -> ProblemNode<Self> {
        let cost = self.costs.assignment_cost(&self.initial);
        Node::root(self.initial.clone(), cost, Rc::clone(&self.costs))
    }

    fn successors<'a>(
        &'a self,
        node: &Rc<ProblemNode<Self>>,
    ) -> Box<dyn Iterator<Item = ProblemNode<Self>> + 'a> {
        let n = node.state().len();
        let parent = Rc::clone(node);
        Box::new((0..n).flat_map(move |p0| {
            let parent = Rc::clone(&parent);
            ((p0 + 1)..n).map(move |p1| Self::swap_successor(&parent, p0, p1))
        }))
    }

    fn goal_test(&self, _node: &ProblemNode<Self>) -> bool {
        // No terminal state; the owning algorithm's stopping criterion
        // (budget, cooling schedule, convergence) governs termination.
        false
    }

    fn random_successor<R: Rng>(
        &self,
        node: &Rc<ProblemNode<Self>>,
        rng: &mut R,
    ) -> ProblemNode<Self> {
        let n = node.state().len();
        assert!(n >= 2, "pairwise swap needs at least 2 positions, state has {n}");
        let p0 = rng.random_range(0..n);
        let mut p1 = p0;
        while p1 == p0 {
            p1 = rng.random_range(0..n);
        }
        Self::swap_successor(node, p0, p1)
    }

    fn random_node<R: Rng>(&self, rng: &mut R) -> ProblemNode<Self> {
        let state = random_permutation(self.costs.n(), rng);
        let cost = self.costs.assignment_cost(&state);
        Node::root(state, cost, Rc::clone(&self.costs))
    }
}
