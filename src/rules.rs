use crate::data::{Action, AgentId, DIRECTIONS};
use crate::maze::Maze;
use crate::path::Path;
use crate::state::State;

/// Applies `action` for `actor`, or returns `None` if the action isn't allowed.
///
/// MOVE and JUMP leave a wall on the cell the actor left.
/// Only the landing / wall cell is checked here. Bounds and the wall a jump goes over
/// are checked when generating children in `expand`.
pub fn transition(maze: &Maze, state: &State, actor: AgentId, action: Action) -> Option<State> {
    let from = state.positions[actor];

    let mut new_state = match action {
        Action::Wait => state.clone(),
        Action::Move(dir) => {
            let target = from + dir;
            if state.is_wall(target) {
                return None;
            }
            let mut new_state = state.clone();
            new_state.positions[actor] = target;
            new_state.add_wall(from);
            new_state
        }
        Action::Jump(dir) => {
            let target = from + dir + dir;
            if state.is_wall(target) {
                return None;
            }
            let mut new_state = state.clone();
            new_state.positions[actor] = target;
            new_state.add_wall(from);
            new_state
        }
        Action::PlaceWall(dir) => {
            // the agent stays where it is
            let wall = from + dir;
            if state.is_wall(wall) || wall == maze.destination() {
                return None;
            }
            let mut new_state = state.clone();
            new_state.add_wall(wall);
            new_state
        }
    };

    new_state.turn = actor;
    new_state.cost += action.cost();
    new_state.depth += 1;
    Some(new_state)
}

/// All states `actor` can produce from `state`, with the action producing each.
///
/// Order: wait, then for each direction in `DIRECTIONS`: move, jump, place wall.
/// Searches break ties using this order.
pub fn expand(maze: &Maze, state: &State, actor: AgentId) -> Vec<(Action, State)> {
    let mut children = Vec::with_capacity(1 + 3 * DIRECTIONS.len());
    let from = state.positions[actor];

    let mut push = |action: Action| {
        if let Some(child) = transition(maze, state, actor, action) {
            children.push((action, child));
        }
    };

    push(Action::Wait);
    for &dir in &DIRECTIONS {
        let next = from + dir;
        if maze.contains(next) {
            push(Action::Move(dir));
        }
        if state.is_wall(next) && maze.contains(next + dir) {
            push(Action::Jump(dir));
        }
        if maze.contains(next) {
            push(Action::PlaceWall(dir));
        }
    }

    children
}

pub fn is_goal(maze: &Maze, state: &State) -> bool {
    state.agent_pos() == maze.destination()
}

/// Replays `path` for `actor` one action at a time.
/// Returns `None` if any action is rejected along the way.
pub fn replay(maze: &Maze, root: &State, actor: AgentId, path: &Path) -> Option<State> {
    let mut state = root.clone();
    for &action in path {
        state = transition(maze, &state, actor, action)?;
    }
    Some(state)
}

/// Like `replay` but also checks each action was one `expand` offers (bounds, jumped walls).
pub fn replay_strict(maze: &Maze, root: &State, actor: AgentId, path: &Path) -> Option<State> {
    let mut state = root.clone();
    for &action in path {
        state = expand(maze, &state, actor)
            .into_iter()
            .find(|&(a, _)| a == action)
            .map(|(_, child)| child)?;
    }
    Some(state)
}
