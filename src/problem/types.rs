//! The capability contract consumed by search algorithms.

use std::rc::Rc;

use rand::Rng;

use super::node::Node;

/// The node type a [`Problem`] implementation produces.
pub type ProblemNode<P> =
    Node<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Context>;

/// Describes a search problem: states, transitions, and bounds.
///
/// A generic search algorithm holds a `Problem` implementation and
/// repeatedly asks it for successors, a value estimate, or a goal test; the
/// formulation never calls back into the algorithm. Required operations are
/// [`initial`](Problem::initial), [`successors`](Problem::successors), and
/// [`goal_test`](Problem::goal_test); the optional operations carry default
/// implementations so bound-based and stochastic consumers can always call
/// them, and formulations override only what they can do better.
///
/// # Minimization
///
/// Costs and value estimates are minimized. For maximization, negate the
/// cost.
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
/// for child in problem.successors(&root).take(2) {
///     assert!(problem.node_value(&child) >= child.cost());
/// }
/// ```
pub trait Problem {
    /// The problem-specific state representation.
    type State;

    /// The transition recorded on each child node.
    type Action;

    /// The immutable payload shared structurally by a run's nodes.
    type Context;

    /// The root node of a search run.
    fn initial(&self) -> ProblemNode<Self>;

    /// All direct successors of `node`, produced lazily.
    ///
    /// The sequence is finite and each element is computed on demand, so a
    /// width-limited consumer can evaluate a prefix and drop the iterator
    /// without paying for the full fan-out. The sequence is not resumable
    /// once dropped; call again to restart from scratch.
    fn successors<'a>(
        &'a self,
        node: &Rc<ProblemNode<Self>>,
    ) -> Box<dyn Iterator<Item = ProblemNode<Self>> + 'a>;

    /// Whether `node` is an accepted solution.
    fn goal_test(&self, node: &ProblemNode<Self>) -> bool;

    /// Estimate of the best cost achievable from `node` onward.
    ///
    /// Informed and bound-based consumers use this for ordering and pruning.
    /// The default returns the weakest possible bound
    /// ([`f64::NEG_INFINITY`]), which never prunes anything; override it
    /// when the formulation has a real lower bound.
    fn node_value(&self, _node: &ProblemNode<Self>) -> f64 {
        f64::NEG_INFINITY
    }

    /// One successor of `node`, sampled from the injected random source.
    ///
    /// Stochastic local-search consumers call this to get a single cheap
    /// neighbor per iteration. The default materializes
    /// [`successors`](Problem::successors) and picks uniformly; override it
    /// when one neighbor can be built without enumerating the rest.
    ///
    /// # Panics
    ///
    /// If `node` has no successors. Callers are expected to respect the
    /// formulation's input preconditions.
    fn random_successor<R: Rng>(
        &self,
        node: &Rc<ProblemNode<Self>>,
        rng: &mut R,
    ) -> ProblemNode<Self> {
        let mut successors: Vec<ProblemNode<Self>> = self.successors(node).collect();
        assert!(
            !successors.is_empty(),
            "random_successor called on a node with no successors"
        );
        let pick = rng.random_range(0..successors.len());
        successors.swap_remove(pick)
    }

    /// An independently generated valid node, for restarts/diversification.
    ///
    /// Not necessarily a successor of any existing node. The default
    /// returns [`initial`](Problem::initial); formulations with a
    /// randomized construction rule override it.
    fn random_node<R: Rng>(&self, _rng: &mut R) -> ProblemNode<Self> {
        self.initial()
    }
}
