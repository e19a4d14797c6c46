use crate::data::Action;
use crate::state::State;

/// A search node living in the search's arena.
///
/// Only the action that produced the node is stored here,
/// the rest of the path is found by following `prev`.
/// The state is kept whole because the closed set borrows it straight from the arena.
#[derive(Debug)]
pub(crate) struct Node<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a Node<'a>>,
    pub(crate) action: Option<Action>,
}

impl<'a> Node<'a> {
    pub(crate) fn root(state: State) -> Self {
        Node {
            state,
            prev: None,
            action: None,
        }
    }

    pub(crate) fn child(prev: &'a Node<'a>, action: Action, state: State) -> Self {
        Node {
            state,
            prev: Some(prev),
            action: Some(action),
        }
    }
}
