use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use super::node::Node;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Deepest level any node was created at.
    pub fn max_depth(&self) -> usize {
        self.created_states.len().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, node: &Node<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &Node<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &Node<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<usize>, node: &Node<'_>) -> bool {
        let depth = node.state.depth() as usize;
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} created, {} visited, {} duplicates, max depth {}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string(),
            self.max_depth()
        )?;
        writeln!(f, "  created:    {:?}", self.created_states)?;
        writeln!(f, "  visited:    {:?}", self.visited_states)?;
        writeln!(f, "  duplicates: {:?}", self.duplicate_states)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        // created_states is the longest vec
        for i in 0..self.created_states.len() {
            let visited = self.visited_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            let left = self.created_states[i] - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                self.created_states[i].separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;
    use crate::state::State;

    fn node_at(depth: u32) -> Node<'static> {
        let mut state = State::new(vec![Pos::new(0, 0)], vec![], 0);
        state.depth = depth;
        Node {
            state,
            prev: None,
            action: None,
        }
    }

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(&node_at(0)));
        assert!(stats.add_created(&node_at(2)));
        assert!(!stats.add_created(&node_at(1)));
        assert!(stats.add_unique_visited(&node_at(0)));
        assert!(stats.add_reached_duplicate(&node_at(2)));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.max_depth(), 2);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created(&node_at(0));
        }
        stats.add_unique_visited(&node_at(0));

        let text = stats.to_string();
        assert!(text.starts_with("States created total: 1,500\n"));
        assert!(text.contains("Created but not reached total: 1,499\n"));
        assert!(text.contains("0:             1,500"));

        let debug = format!("{:?}", stats);
        assert!(debug.starts_with("1,500 created, 1 visited, 0 duplicates, max depth 0\n"));
    }
}
