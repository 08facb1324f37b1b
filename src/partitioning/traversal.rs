use crate::partitioning::SpatialNode;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Controls the execution flow of [`traverse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalAction {
    /// The traversal will continue on the children of the tested node.
    Continue,
    /// The traversal will skip all descendants of the tested node.
    Prune,
}

/// Traverses a spatial index in depth-first order.
///
/// `check_node` is called on every visited node and decides whether its children are
/// visited too. Children are visited in the order given by [`SpatialNode::children`].
///
/// The traversal uses an explicit stack rather than recursion, so arbitrarily deep or
/// unbalanced indices cannot overflow the call stack. No allocation happens unless more
/// than a few dozen nodes are pending at once.
pub fn traverse<'a, N: SpatialNode>(
    root: &'a N,
    mut check_node: impl FnMut(&'a N) -> TraversalAction,
) {
    let mut stack: SmallVec<[&'a N; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
    stack.push(root);

    while let Some(node) = stack.pop() {
        if check_node(node) == TraversalAction::Continue {
            let first_child = stack.len();
            stack.extend(node.children());
            // Reversed so the first child is popped first.
            stack[first_child..].reverse();
        }
    }
}
