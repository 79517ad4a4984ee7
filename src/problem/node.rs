//! Search-tree nodes.

use std::rc::Rc;

/// One vertex of the (implicit) search tree.
///
/// A node owns its state and cumulative cost, holds shared ownership of its
/// immutable parent (for path reconstruction only), and carries an opaque
/// per-formulation context shared structurally with its children. Nodes are
/// never mutated after construction; the parent links form a tree rooted at
/// the initial node of a search run, so no cycles exist.
///
/// # Type Parameters
///
/// * `S` - the problem-specific state
/// * `A` - the action (transition) that produced the node
/// * `X` - the formulation's immutable context payload
#[derive(Debug)]
pub struct Node<S, A, X> {
    state: S,
    parent: Option<Rc<Node<S, A, X>>>,
    action: Option<A>,
    cost: f64,
    context: Rc<X>,
}

impl<S, A, X> Node<S, A, X> {
    /// Creates a root node: no parent, no producing action.
    pub fn root(state: S, cost: f64, context: Rc<X>) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            cost,
            context,
        }
    }

    /// Creates a child of `parent`, inheriting the parent's context.
    ///
    /// The context is shared by reference count, never deep-copied.
    pub fn child(parent: &Rc<Self>, state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            cost,
            context: Rc::clone(&parent.context),
        }
    }

    /// Creates a child of `parent` with its own context.
    ///
    /// For formulations whose context changes along a path (e.g. a shrinking
    /// set of unassigned columns); anything shared between parent and child
    /// should still be reference-counted inside the new context.
    pub fn child_with_context(
        parent: &Rc<Self>,
        state: S,
        action: A,
        cost: f64,
        context: Rc<X>,
    ) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            cost,
            context,
        }
    }

    /// The problem-specific state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cost accumulated along the path from the initial node.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The transition that produced this node; `None` at roots.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// The parent node; `None` at roots.
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// The formulation's immutable context payload.
    pub fn context(&self) -> &X {
        &self.context
    }

    /// Number of transitions between this node and its root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Walks from this node to the root, starting with this node itself.
    pub fn ancestors(&self) -> Ancestors<'_, S, A, X> {
        Ancestors { next: Some(self) }
    }

    /// Actions taken from the root to this node, in order.
    pub fn path_actions(&self) -> Vec<&A> {
        let mut actions: Vec<&A> = self.ancestors().filter_map(|node| node.action.as_ref()).collect();
        actions.reverse();
        actions
    }
}

/// Iterator over a node's chain of parents, yielded nearest-first.
#[derive(Debug)]
pub struct Ancestors<'a, S, A, X> {
    next: Option<&'a Node<S, A, X>>,
}

impl<'a, S, A, X> Iterator for Ancestors<'a, S, A, X> {
    type Item = &'a Node<S, A, X>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Rc<Node<u32, char, ()>> {
        let root = Rc::new(Node::root(0, 0.0, Rc::new(())));
        let a = Rc::new(Node::child(&root, 1, 'a', 1.0));
        let b = Rc::new(Node::child(&a, 2, 'b', 3.0));
        b
    }

    #[test]
    fn test_root_has_no_parent_or_action() {
        let root: Node<u32, char, ()> = Node::root(7, 0.0, Rc::new(()));
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_path_reconstruction() {
        let leaf = chain();
        assert_eq!(leaf.depth(), 2);
        let states: Vec<u32> = leaf.ancestors().map(|n| *n.state()).collect();
        assert_eq!(states, vec![2, 1, 0]);
        assert_eq!(leaf.path_actions(), vec![&'a', &'b']);
    }

    #[test]
    fn test_context_shared_not_copied() {
        let context = Rc::new(vec![1, 2, 3]);
        let root = Rc::new(Node::<u32, char, Vec<i32>>::root(0, 0.0, Rc::clone(&context)));
        let child = Node::child(&root, 1, 'a', 1.0);
        assert!(std::ptr::eq(root.context(), child.context()));
    }

    #[test]
    fn test_child_with_context_keeps_parent_link() {
        let root = Rc::new(Node::<u32, char, u8>::root(0, 0.0, Rc::new(1)));
        let child = Node::child_with_context(&root, 1, 'a', 1.0, Rc::new(2));
        assert_eq!(*child.context(), 2);
        assert_eq!(*child.parent().unwrap().state(), 0);
    }
}
