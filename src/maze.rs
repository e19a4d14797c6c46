use crate::data::{AgentId, Pos};

/// The part of the world that never changes during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    destination: Pos,
    agents: Vec<String>,
}

impl Maze {
    pub fn new(width: i32, height: i32, destination: Pos, agents: Vec<String>) -> Self {
        Maze {
            width,
            height,
            destination,
            agents,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn destination(&self) -> Pos {
        self.destination
    }

    pub fn contains(&self, pos: Pos) -> bool {
        0 <= pos.x && pos.x < self.width && 0 <= pos.y && pos.y < self.height
    }

    pub fn cells(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn agent_cnt(&self) -> usize {
        self.agents.len()
    }

    pub fn agent_name(&self, id: AgentId) -> &str {
        &self.agents[id]
    }

    pub fn agent_id(&self, name: &str) -> Option<AgentId> {
        self.agents.iter().position(|a| a == name)
    }

    /// The first other agent in roster order.
    pub fn opponent_of(&self, id: AgentId) -> Option<AgentId> {
        (0..self.agents.len()).find(|&other| other != id)
    }

    /// Number of distinct states the frontier searches can ever reach:
    /// positions of the moving agent x turn x every subset of cells being a wall.
    /// Saturates - for anything but tiny boards this is effectively unbounded.
    pub fn state_space_bound(&self) -> usize {
        let cells = self.cells();
        let wall_subsets = if cells >= 64 {
            usize::max_value()
        } else {
            1usize.checked_shl(cells as u32).unwrap_or(usize::max_value())
        };
        cells
            .saturating_mul(self.agents.len().max(1))
            .saturating_mul(wall_subsets)
    }
}
