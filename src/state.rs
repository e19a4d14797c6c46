use std::hash::{Hash, Hasher};

use crate::data::{AgentId, Pos};

/// A snapshot of the game.
///
/// Two states are the same node iff positions, walls and turn are equal.
/// `cost` and `depth` describe how the node was reached and are excluded from `Eq` and `Hash`.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) positions: Vec<Pos>,
    pub(crate) walls: Vec<Pos>,
    pub(crate) turn: AgentId,
    pub(crate) cost: u32,
    pub(crate) depth: u32,
}

impl State {
    pub(crate) fn new(positions: Vec<Pos>, mut walls: Vec<Pos>, turn: AgentId) -> State {
        // sorted so the same set of walls always compares equal
        walls.sort();
        walls.dedup();
        State {
            positions,
            walls,
            turn,
            cost: 0,
            depth: 0,
        }
    }

    /// Position of the agent whose move produced this state.
    pub fn agent_pos(&self) -> Pos {
        self.positions[self.turn]
    }

    pub fn pos_of(&self, agent: AgentId) -> Pos {
        self.positions[agent]
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn walls(&self) -> &[Pos] {
        &self.walls
    }

    pub fn turn(&self) -> AgentId {
        self.turn
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of actions since the search root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.binary_search(&pos).is_ok()
    }

    pub(crate) fn add_wall(&mut self, pos: Pos) {
        if let Err(i) = self.walls.binary_search(&pos) {
            self.walls.insert(i, pos);
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &State) -> bool {
        self.positions == other.positions && self.walls == other.walls && self.turn == other.turn
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.positions.hash(state);
        self.walls.hash(state);
        self.turn.hash(state);
    }
}
