//! Tree-construction formulation of the assignment problem.

use std::rc::Rc;

use super::matrix::CostMatrix;
use crate::problem::{Node, Problem, ProblemNode};

/// Immutable payload carried by the nodes of a tree-assignment search.
///
/// The cost matrix is shared structurally by every node of a run;
/// `unassigned` is rebuilt per child as columns get used up.
#[derive(Debug)]
pub struct TreeAssignmentContext {
    /// Cost matrix, shared by all nodes.
    pub costs: Rc<CostMatrix>,
    /// Columns not yet assigned to any row, ascending.
    pub unassigned: Vec<usize>,
}

/// Builds a complete assignment one cell at a time.
///
/// The initial node has every row unassigned; each expansion fills one
/// still-empty row with one still-unused column. A node with `k` empty rows
/// has `k²` successors, not `k`: rows are not committed in a fixed order, so
/// the same complete assignment is reachable through several expansion
/// orders. Graph-search consumers that deduplicate should therefore key
/// their visited set on the state alone, not on path identity.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use statespace::assignment::{AssignmentProblem, CostMatrix};
/// use statespace::problem::Problem;
///
/// let costs = CostMatrix::new(vec![vec![1.0, 5.0], vec![5.0, 1.0]]).unwrap();
/// let problem = AssignmentProblem::new(costs);
/// let root = Rc::new(problem.initial());
/// assert_eq!(problem.successors(&root).count(), 4);
/// assert_eq!(problem.node_value(&root), 2.0);
/// ```
#[derive(Debug)]
pub struct AssignmentProblem {
    costs: Rc<CostMatrix>,
}

impl AssignmentProblem {
    /// Creates the formulation for the given cost matrix.
    pub fn new(costs: CostMatrix) -> Self {
        Self {
            costs: Rc::new(costs),
        }
    }

    /// Admissible lower bound on the cost of completing `node`.
    ///
    /// Sums, for every unassigned row, the cheapest entry of that row
    /// restricted to the still-unassigned columns. This relaxes the
    /// each-column-used-once constraint, so it never overestimates the true
    /// completion cost: each row must pay at least its own cheapest
    /// remaining option.
    ///
    /// # Panics
    ///
    /// If an unassigned row has no candidate column left. The formulation
    /// keeps empty rows and unused columns in lockstep, so this signals an
    /// inconsistent caller-built state rather than a normal input error.
    pub fn min_cost_heuristic(&self, node: &ProblemNode<Self>) -> f64 {
        let ctx = node.context();
        let mut bound = 0.0;
        for (row, slot) in node.state().iter().enumerate() {
            if slot.is_some() {
                continue;
            }
            assert!(
                !ctx.unassigned.is_empty(),
                "unassigned row {row} has no candidate columns"
            );
            let cheapest = ctx
                .unassigned
                .iter()
                .map(|&col| ctx.costs.cost(row, col))
                .fold(f64::INFINITY, f64::min);
            bound += cheapest;
        }
        bound
    }
}

impl Problem for AssignmentProblem {
    type State = Vec<Option<usize>>;
    type Action = (usize, usize);
    type Context = TreeAssignmentContext;

    fn initial(&self) -> ProblemNode<Self> {
        let n = self.costs.n();
        let context = TreeAssignmentContext {
            costs: Rc::clone(&self.costs),
            unassigned: (0..n).collect(),
        };
        Node::root(vec![None; n], 0.0, Rc::new(context))
    }

    fn successors<'a>(
        &'a self,
        node: &Rc<ProblemNode<Self>>,
    ) -> Box<dyn Iterator<Item = ProblemNode<Self>> + 'a> {
        let empty_rows: Vec<usize> = node
            .state()
            .iter()
            .enumerate()
            .filter_map(|(row, slot)| slot.is_none().then_some(row))
            .collect();
        let parent = Rc::clone(node);
        Box::new(empty_rows.into_iter().flat_map(move |row| {
            let parent = Rc::clone(&parent);
            let columns = parent.context().unassigned.clone();
            columns.into_iter().map(move |col| {
                let ctx = parent.context();
                let mut state = parent.state().clone();
                state[row] = Some(col);
                let remaining: Vec<usize> = ctx
                    .unassigned
                    .iter()
                    .copied()
                    .filter(|&c| c != col)
                    .collect();
                let cost = parent.cost() + ctx.costs.cost(row, col);
                let child_context = TreeAssignmentContext {
                    costs: Rc::clone(&ctx.costs),
                    unassigned: remaining,
                };
                Node::child_with_context(&parent, state, (row, col), cost, Rc::new(child_context))
            })
        }))
    }

    fn goal_test(&self, node: &ProblemNode<Self>) -> bool {
        node.state().iter().all(|slot| slot.is_some())
    }

    fn node_value(&self, node: &ProblemNode<Self>) -> f64 {
        node.cost() + self.min_cost_heuristic(node)
    }
}
