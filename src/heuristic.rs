use crate::data::Score;
use crate::maze::Maze;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Estimated total cost of reaching the destination - less is better.
    Cooperative,
    /// Advantage of the agent whose move produced the state over its opponent - more is better.
    Adversarial,
}

pub fn heuristic(maze: &Maze, state: &State, mode: Mode) -> Score {
    let dest = maze.destination();

    if mode == Mode::Adversarial {
        if let Some(opponent) = maze.opponent_of(state.turn()) {
            let mover_dist = state.agent_pos().dist(dest);
            let opponent_dist = state.pos_of(opponent).dist(dest);
            return opponent_dist - mover_dist;
        }
        // alone on the board - nobody to compare against
    }

    state.cost() as Score + state.agent_pos().dist(dest)
}
