use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::data::Score;

use super::node::Node;

/// Discovered but not yet expanded nodes.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a Node<'a>, priority: Score);

    fn pop(&mut self) -> Option<&'a Node<'a>>;

    fn len(&self) -> usize;
}

/// BFS order, priorities are ignored.
#[derive(Debug, Default)]
pub(crate) struct Fifo<'a>(VecDeque<&'a Node<'a>>);

impl<'a> Fifo<'a> {
    pub(crate) fn new() -> Self {
        Fifo(VecDeque::new())
    }
}

impl<'a> Frontier<'a> for Fifo<'a> {
    fn push(&mut self, node: &'a Node<'a>, _priority: Score) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a Node<'a>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Lowest priority first, equal priorities in insertion order.
#[derive(Debug, Default)]
pub(crate) struct PriorityQueue<'a> {
    heap: BinaryHeap<Queued<'a>>,
    next_seq: u64,
}

impl<'a> PriorityQueue<'a> {
    pub(crate) fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<'a> Frontier<'a> for PriorityQueue<'a> {
    fn push(&mut self, node: &'a Node<'a>, priority: Score) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued {
            priority,
            seq,
            node,
        });
    }

    fn pop(&mut self) -> Option<&'a Node<'a>> {
        self.heap.pop().map(|queued| queued.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Queued<'a> {
    priority: Score,
    seq: u64,
    node: &'a Node<'a>,
}

impl PartialOrd for Queued<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl PartialEq for Queued<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Queued<'_> {}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use super::*;
    use crate::data::Pos;
    use crate::state::State;

    fn node(x: i32) -> Node<'static> {
        Node::root(State::new(vec![Pos::new(x, 0)], vec![], 0))
    }

    fn drain<'a, F: Frontier<'a>>(mut frontier: F) -> Vec<i32> {
        let mut xs = Vec::new();
        while let Some(n) = frontier.pop() {
            xs.push(n.state.agent_pos().x);
        }
        xs
    }

    #[test]
    fn fifo_ignores_priority() {
        let arena = Arena::new();
        let mut fifo = Fifo::new();
        for (x, p) in [(0, 5), (1, 1), (2, 3)].iter() {
            let n: &Node<'_> = arena.alloc(node(*x));
            fifo.push(n, *p);
        }
        assert_eq!(fifo.len(), 3);
        assert_eq!(drain(fifo), vec![0, 1, 2]);
    }

    #[test]
    fn priority_is_stable() {
        let arena = Arena::new();
        let mut queue = PriorityQueue::new();
        for (x, p) in [(0, 5), (1, 3), (2, 1), (3, 3), (4, 1), (5, 3)].iter() {
            let n: &Node<'_> = arena.alloc(node(*x));
            queue.push(n, *p);
        }
        assert_eq!(queue.len(), 6);
        assert_eq!(drain(queue), vec![2, 4, 1, 3, 5, 0]);
    }
}
