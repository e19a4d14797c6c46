// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod agent;
pub mod config;
pub mod data;
pub mod heuristic;
pub mod level;
pub mod maze;
pub mod path;
pub mod percept;
pub mod rules;
pub mod solver;
pub mod state;

use crate::config::{Method, MinimaxConfig, SearchConfig};
use crate::data::Action;
use crate::solver::minimax::{Decision, MinimaxStats};
use crate::solver::{SolverErr, SolverOk};
use crate::state::State;

pub trait Solve {
    fn solve(&self, method: Method, config: &SearchConfig) -> Result<SolverOk, SolverErr>;
}

pub trait Decide {
    fn decide(&self, config: &MinimaxConfig) -> (Decision<Action, State>, MinimaxStats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;
    use crate::level::Level;

    #[test]
    fn both_searches_on_one_level() {
        let _ = env_logger::try_init();

        let walls = vec![Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)];
        let level = Level::single((5, 4), Pos::new(2, 0), Pos::new(2, 3), walls);

        for &method in &[Method::Bfs, Method::AStar] {
            let solution = level.solve(method, &SearchConfig::default()).unwrap();
            let path = solution.path.unwrap();
            let end = level.replay(&path).unwrap();
            assert_eq!(end.agent_pos(), level.maze.destination());
        }

        // alone on the board the agent plays both sides
        let config = MinimaxConfig {
            max_depth: 2,
            ..MinimaxConfig::default()
        };
        let (decision, stats) = level.decide(&config);
        assert!(decision.mov.is_some());
        assert!(stats.expanded > 0);
    }
}
