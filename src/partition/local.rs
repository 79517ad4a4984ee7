//! Local-search formulation of graph bipartition.

use std::collections::BTreeSet;
use std::rc::Rc;

use rand::Rng;

use super::graph::Graph;
use crate::generate::random_partition;
use crate::problem::{Node, Problem, ProblemNode};

/// Membership-swap neighborhood over vertex subsets.
///
/// A state is the subset `P` of vertices on one side of the cut, kept as an
/// ordered set so graph-search consumers can key visited sets on it. Every
/// transition moves exactly one vertex out of `P` and one vertex of the
/// complement in, so `|P|` never changes from the initial partition onward:
/// balance is a property of the transitions, not a re-validated constraint,
/// and a caller that mutates states outside the defined transitions can
/// break it.
///
/// Each child's cost is the cut size of the child's own (post-swap)
/// partition, whether it was produced by [`successors`](Problem::successors)
/// or by [`random_successor`](Problem::random_successor).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use std::rc::Rc;
/// use statespace::partition::{Graph, LocalGraphPartitionProblem};
/// use statespace::problem::Problem;
///
/// let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
/// let p: BTreeSet<usize> = [0, 2].into_iter().collect();
/// let problem = LocalGraphPartitionProblem::new(graph, p).unwrap();
/// assert_eq!(problem.initial().cost(), 3.0);
/// ```
#[derive(Debug)]
pub struct LocalGraphPartitionProblem {
    graph: Rc<Graph>,
    initial: BTreeSet<usize>,
}

impl LocalGraphPartitionProblem {
    /// Creates the formulation with an explicit starting partition.
    ///
    /// The partition must be a nonempty proper subset of the vertex range,
    /// so that both sides of a membership swap exist.
    pub fn new(graph: Graph, initial: BTreeSet<usize>) -> Result<Self, String> {
        let n = graph.n();
        if let Some(&v) = initial.iter().find(|&&v| v >= n) {
            return Err(format!("partition vertex {v} out of range for {n} vertices"));
        }
        if initial.is_empty() {
            return Err("initial partition must contain at least one vertex".into());
        }
        if initial.len() == n {
            return Err("initial partition must leave at least one vertex out".into());
        }
        Ok(Self {
            graph: Rc::new(graph),
            initial,
        })
    }

    /// Creates the formulation from a uniformly random half-split.
    pub fn with_random_initial<R: Rng>(graph: Graph, rng: &mut R) -> Result<Self, String> {
        if graph.n() < 2 {
            return Err(format!(
                "membership swaps need at least 2 vertices, graph has {}",
                graph.n()
            ));
        }
        let initial = random_partition(graph.n(), rng);
        Self::new(graph, initial)
    }

    /// Child of `node` in which `leaves` exits the partition and `joins`
    /// enters it. The cost is the cut of the resulting partition.
    fn swap_successor(
        node: &Rc<ProblemNode<Self>>,
        leaves: usize,
        joins: usize,
    ) -> ProblemNode<Self> {
        let mut partition = node.state().clone();
        partition.remove(&leaves);
        partition.insert(joins);
        let cost = node.context().cutsize(&partition) as f64;
        Node::child(node, partition, (leaves, joins), cost)
    }

    fn complement(node: &ProblemNode<Self>) -> Vec<usize> {
        (0..node.context().n())
            .filter(|v| !node.state().contains(v))
            .collect()
    }
}

impl Problem for LocalGraphPartitionProblem {
    type State = BTreeSet<usize>;
    type Action = (usize, usize);
    type Context = Graph;

    fn initial(&self) -> ProblemNode<Self> {
        let cost = self.graph.cutsize(&self.initial) as f64;
        Node::root(self.initial.clone(), cost, Rc::clone(&self.graph))
    }

    fn successors<'a>(
        &'a self,
        node: &Rc<ProblemNode<Self>>,
    ) -> Box<dyn Iterator<Item = ProblemNode<Self>> + 'a> {
        let inside: Vec<usize> = node.state().iter().copied().collect();
        let outside = Self::complement(node);
        let parent = Rc::clone(node);
        Box::new(inside.into_iter().flat_map(move |leaves| {
            let parent = Rc::clone(&parent);
            let outside = outside.clone();
            outside
                .into_iter()
                .map(move |joins| Self::swap_successor(&parent, leaves, joins))
        }))
    }

    fn goal_test(&self, _node: &ProblemNode<Self>) -> bool {
        // No terminal state; the owning algorithm's stopping criterion
        // governs termination.
        false
    }

    fn random_successor<R: Rng>(
        &self,
        node: &Rc<ProblemNode<Self>>,
        rng: &mut R,
    ) -> ProblemNode<Self> {
        let inside: Vec<usize> = node.state().iter().copied().collect();
        let outside = Self::complement(node);
        assert!(
            !inside.is_empty() && !outside.is_empty(),
            "membership swap needs a nonempty partition and complement"
        );
        let leaves = inside[rng.random_range(0..inside.len())];
        let joins = outside[rng.random_range(0..outside.len())];
        Self::swap_successor(node, leaves, joins)
    }

    fn random_node<R: Rng>(&self, rng: &mut R) -> ProblemNode<Self> {
        let partition = random_partition(self.graph.n(), rng);
        let cost = self.graph.cutsize(&partition) as f64;
        Node::root(partition, cost, Rc::clone(&self.graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::generate::random_graph;

    fn path_graph() -> Graph {
        Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    fn path_problem() -> LocalGraphPartitionProblem {
        let p: BTreeSet<usize> = [0, 2].into_iter().collect();
        LocalGraphPartitionProblem::new(path_graph(), p).unwrap()
    }

    #[test]
    fn test_initial_cut_all_edges_cross() {
        let problem = path_problem();
        assert_eq!(problem.initial().cost(), 3.0);
    }

    #[test]
    fn test_successor_cost_is_post_swap_cut() {
        // Pins the resolved cost semantics: each child carries the cut of
        // its own partition, not the parent's. Witness: from P = {0, 2}
        // (cut 3), swapping 0 out and 1 in gives {1, 2} with cut 2.
        let problem = path_problem();
        let start = Rc::new(problem.initial());
        let child = problem
            .successors(&start)
            .find(|c| c.action() == Some(&(0, 1)))
            .unwrap();
        assert_eq!(child.state(), &[1, 2].into_iter().collect::<BTreeSet<_>>());
        assert_eq!(child.cost(), 2.0);
        assert_ne!(child.cost(), start.cost());
        for child in problem.successors(&start) {
            assert_eq!(child.cost(), problem.initial().context().cutsize(child.state()) as f64);
        }
    }

    #[test]
    fn test_random_successor_agrees_with_enumeration() {
        let problem = path_problem();
        let start = Rc::new(problem.initial());
        let mut rng = StdRng::seed_from_u64(23);
        let sampled = problem.random_successor(&start, &mut rng);
        assert!(problem
            .successors(&start)
            .any(|c| c.state() == sampled.state() && c.cost() == sampled.cost()));
    }

    #[test]
    fn test_neighborhood_size_is_inside_times_outside() {
        let problem = path_problem();
        let start = Rc::new(problem.initial());
        assert_eq!(problem.successors(&start).count(), 4); // |P| * |V \ P|
    }

    #[test]
    fn test_goal_test_is_never_true() {
        let problem = path_problem();
        let mut rng = StdRng::seed_from_u64(29);
        assert!(!problem.goal_test(&problem.initial()));
        assert!(!problem.goal_test(&problem.random_node(&mut rng)));
    }

    #[test]
    fn test_node_value_is_weakest_bound() {
        let problem = path_problem();
        assert_eq!(problem.node_value(&problem.initial()), f64::NEG_INFINITY);
    }

    #[test]
    fn test_random_node_is_a_half_split() {
        let problem = path_problem();
        let mut rng = StdRng::seed_from_u64(31);
        let node = problem.random_node(&mut rng);
        assert_eq!(node.state().len(), 2);
        assert_eq!(node.cost(), problem.initial().context().cutsize(node.state()) as f64);
    }

    #[test]
    fn test_new_rejects_bad_partitions() {
        let all: BTreeSet<usize> = (0..4).collect();
        assert!(LocalGraphPartitionProblem::new(path_graph(), BTreeSet::new()).is_err());
        assert!(LocalGraphPartitionProblem::new(path_graph(), all).is_err());
        let out_of_range: BTreeSet<usize> = [7].into_iter().collect();
        assert!(LocalGraphPartitionProblem::new(path_graph(), out_of_range).is_err());
    }

    #[test]
    fn test_with_random_initial_rejects_tiny_graph() {
        let graph = Graph::new(1, vec![]).unwrap();
        let mut rng = StdRng::seed_from_u64(37);
        assert!(LocalGraphPartitionProblem::with_random_initial(graph, &mut rng).is_err());
    }

    proptest! {
        // |P| is preserved by every successor and every random successor.
        #[test]
        fn prop_partition_size_is_invariant(n in 2usize..10, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = random_graph(n, 0.5, &mut rng).unwrap();
            let problem =
                LocalGraphPartitionProblem::with_random_initial(graph, &mut rng).unwrap();
            let start = Rc::new(problem.initial());
            let size = start.state().len();
            for child in problem.successors(&start) {
                prop_assert_eq!(child.state().len(), size);
            }
            for _ in 0..10 {
                let child = problem.random_successor(&start, &mut rng);
                prop_assert_eq!(child.state().len(), size);
            }
        }

        // Successor costs always equal the cut of the stored partition.
        #[test]
        fn prop_child_cost_matches_own_cut(n in 2usize..8, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = random_graph(n, 0.5, &mut rng).unwrap();
            let problem =
                LocalGraphPartitionProblem::with_random_initial(graph.clone(), &mut rng).unwrap();
            let start = Rc::new(problem.initial());
            for child in problem.successors(&start) {
                prop_assert_eq!(child.cost(), graph.cutsize(child.state()) as f64);
            }
        }
    }
}
