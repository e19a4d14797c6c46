use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::Pos;
use crate::level::Level;
use crate::maze::Maze;
use crate::state::State;

/// What the referee tells an agent each time it asks for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percept {
    pub agents: Vec<(String, Pos)>,
    pub walls: Vec<Pos>,
    pub size: (i32, i32),
    pub destination: Pos,
    pub turn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerceptErr {
    EmptyBoard,
    UnknownAgent(String),
    DuplicateAgent(String),
    AgentOutOfBounds(String),
    WallOutOfBounds(Pos),
    DestinationOutOfBounds,
    DestinationIsWall,
}

impl Display for PerceptErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PerceptErr::EmptyBoard => write!(f, "Board has no cells"),
            PerceptErr::UnknownAgent(ref name) => write!(f, "Unknown agent: {}", name),
            PerceptErr::DuplicateAgent(ref name) => write!(f, "Agent listed twice: {}", name),
            PerceptErr::AgentOutOfBounds(ref name) => {
                write!(f, "Agent outside the board: {}", name)
            }
            PerceptErr::WallOutOfBounds(pos) => write!(f, "Wall outside the board: {}", pos),
            PerceptErr::DestinationOutOfBounds => write!(f, "Destination outside the board"),
            PerceptErr::DestinationIsWall => write!(f, "Destination is a wall"),
        }
    }
}

impl Error for PerceptErr {}

impl Percept {
    /// Checks the percept and builds the search root as seen by `me`.
    ///
    /// The root's turn is `me` - its position is the one goal checks look at.
    pub fn to_level(&self, me: &str) -> Result<Level, PerceptErr> {
        let (width, height) = self.size;
        if width <= 0 || height <= 0 {
            return Err(PerceptErr::EmptyBoard);
        }

        let mut names: Vec<String> = Vec::with_capacity(self.agents.len());
        let mut positions = Vec::with_capacity(self.agents.len());
        for (name, pos) in &self.agents {
            if names.contains(name) {
                return Err(PerceptErr::DuplicateAgent(name.clone()));
            }
            names.push(name.clone());
            positions.push(*pos);
        }

        let maze = Maze::new(width, height, self.destination, names);

        for (name, pos) in &self.agents {
            if !maze.contains(*pos) {
                return Err(PerceptErr::AgentOutOfBounds(name.clone()));
            }
        }
        if let Some(&wall) = self.walls.iter().find(|&&w| !maze.contains(w)) {
            return Err(PerceptErr::WallOutOfBounds(wall));
        }
        if !maze.contains(self.destination) {
            return Err(PerceptErr::DestinationOutOfBounds);
        }
        if self.walls.contains(&self.destination) {
            return Err(PerceptErr::DestinationIsWall);
        }
        if maze.agent_id(&self.turn).is_none() {
            return Err(PerceptErr::UnknownAgent(self.turn.clone()));
        }
        let me = maze
            .agent_id(me)
            .ok_or_else(|| PerceptErr::UnknownAgent(me.to_string()))?;

        let state = State::new(positions, self.walls.clone(), me);
        Ok(Level::new(maze, state))
    }
}
