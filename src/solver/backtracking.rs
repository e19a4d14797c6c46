use crate::path::Path;

use super::node::Node;

/// Follows `prev` links from `final_node` back to the root.
pub(crate) fn backtrack_path(final_node: &Node<'_>) -> Path {
    let mut actions = Vec::with_capacity(final_node.state.depth() as usize);
    let mut cur = final_node;
    while let (Some(action), Some(prev)) = (cur.action, cur.prev) {
        actions.push(action);
        cur = prev;
    }
    actions.reverse();
    Path::new(actions)
}
