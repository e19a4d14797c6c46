//! What the referee talks to: a percept comes in, one action goes out.

use std::collections::VecDeque;

use crate::config::{Method, MinimaxConfig, SearchConfig};
use crate::data::Action;
use crate::percept::Percept;
use crate::{Decide, Solve};

pub trait Agent {
    fn name(&self) -> &str;

    /// Never fails - anything that goes wrong ends up as `Action::Wait`.
    fn act(&mut self, percept: &Percept) -> Action;
}

/// Finds a whole path with BFS or A* on its first turn and then follows it.
#[derive(Debug, Clone)]
pub struct PlanningAgent {
    name: String,
    method: Method,
    config: SearchConfig,
    plan: Option<VecDeque<Action>>,
}

impl PlanningAgent {
    pub fn new(name: &str, method: Method, config: SearchConfig) -> Self {
        PlanningAgent {
            name: name.to_string(),
            method,
            config,
            plan: None,
        }
    }

    pub fn bfs(name: &str) -> Self {
        PlanningAgent::new(name, Method::Bfs, SearchConfig::default())
    }

    pub fn a_star(name: &str) -> Self {
        PlanningAgent::new(name, Method::AStar, SearchConfig::default())
    }

    /// Actions left in the cached plan, `None` before a successful search.
    pub fn plan_len(&self) -> Option<usize> {
        self.plan.as_ref().map(VecDeque::len)
    }

    fn make_plan(&self, percept: &Percept) -> Option<VecDeque<Action>> {
        let level = match percept.to_level(&self.name) {
            Ok(level) => level,
            Err(e) => {
                warn!("{}: bad percept: {}", self.name, e);
                return None;
            }
        };

        match level.solve(self.method, &self.config) {
            Ok(solution) => match solution.path {
                Some(path) => {
                    info!("{}: {} found a path of length {}", self.name, self.method, path.len());
                    Some(path.into_iter().collect())
                }
                None => {
                    warn!("{}: {} found no path", self.name, self.method);
                    None
                }
            },
            Err(e) => {
                warn!("{}: {} failed: {}", self.name, self.method, e);
                None
            }
        }
    }
}

impl Agent for PlanningAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, percept: &Percept) -> Action {
        if percept.turn != self.name {
            return Action::Wait;
        }

        if self.plan.is_none() {
            self.plan = self.make_plan(percept);
        }

        match self.plan {
            Some(ref mut plan) => plan.pop_front().unwrap_or(Action::Wait),
            None => Action::Wait,
        }
    }
}

/// Runs minimax from scratch every turn.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    config: MinimaxConfig,
}

impl MinimaxAgent {
    pub fn new(name: &str, config: MinimaxConfig) -> Self {
        MinimaxAgent {
            name: name.to_string(),
            config,
        }
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, percept: &Percept) -> Action {
        if percept.turn != self.name {
            return Action::Wait;
        }

        let level = match percept.to_level(&self.name) {
            Ok(level) => level,
            Err(e) => {
                warn!("{}: bad percept: {}", self.name, e);
                return Action::Wait;
            }
        };

        let (decision, stats) = level.decide(&self.config);
        debug!(
            "{}: value {}, visited {}, cutoffs {}",
            self.name, decision.value, stats.visited, stats.cutoffs
        );
        decision.mov.unwrap_or(Action::Wait)
    }
}
