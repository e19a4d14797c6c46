use crate::data::{AgentId, Pos};
use crate::maze::Maze;
use crate::path::Path;
use crate::rules;
use crate::state::State;

/// A maze plus the state a search starts from.
///
/// Built by `Percept::to_level` or `Level::single`, so the roster and the positions always match.
#[derive(Debug, Clone)]
pub struct Level {
    pub(crate) maze: Maze,
    pub(crate) state: State,
}

impl Level {
    pub(crate) fn new(maze: Maze, state: State) -> Self {
        assert_eq!(maze.agent_cnt(), state.positions().len());
        assert!(state.turn() < maze.agent_cnt());
        Level { maze, state }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// One agent called "me" - the usual setup for pathfinding.
    pub fn single(size: (i32, i32), start: Pos, destination: Pos, walls: Vec<Pos>) -> Self {
        let maze = Maze::new(size.0, size.1, destination, vec!["me".to_string()]);
        Level::new(maze, State::new(vec![start], walls, 0))
    }

    /// The agent searching from this level.
    pub fn me(&self) -> AgentId {
        self.state.turn()
    }

    pub fn is_solved(&self) -> bool {
        rules::is_goal(&self.maze, &self.state)
    }

    /// Applies `path` to the initial state.
    pub fn replay(&self, path: &Path) -> Option<State> {
        rules::replay(&self.maze, &self.state, self.me(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Action, Dir};

    #[test]
    fn single_agent() {
        let level = Level::single((3, 3), Pos::new(0, 0), Pos::new(2, 0), vec![Pos::new(1, 0)]);
        assert_eq!(level.me(), 0);
        assert!(!level.is_solved());

        let path = Path::new(vec![Action::Jump(Dir::E)]);
        let end = level.replay(&path).unwrap();
        assert!(rules::is_goal(level.maze(), &end));
        assert_eq!(end.walls(), &[Pos::new(0, 0), Pos::new(1, 0)]);
    }

    #[test]
    fn roster_matches_positions() {
        let level = Level::single((3, 3), Pos::new(1, 1), Pos::new(2, 2), vec![]);
        assert_eq!(level.maze().agent_cnt(), level.state().positions().len());
        assert!(level.state().turn() < level.maze().agent_cnt());
    }

    #[test]
    #[should_panic]
    fn mismatched_roster() {
        let maze = Maze::new(3, 3, Pos::new(2, 2), vec!["a".to_string(), "b".to_string()]);
        let state = State::new(vec![Pos::new(0, 0)], vec![], 0);
        Level::new(maze, state);
    }
}
