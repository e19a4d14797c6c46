use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Pathfinding strategies - minimax is configured separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfs,
    AStar,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "bfs"),
            Method::AStar => write!(f, "a-star"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Method::Bfs),
            "a-star" | "astar" => Ok(Method::AStar),
            _ => Err(format!("Unknown method: {}", s)),
        }
    }
}

/// Limits for BFS and A*.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// `None` means the maze's state space bound.
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

/// How minimax values nodes below `max_depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizon {
    /// +1 / -1 depending on which side is to move, same as a reached goal.
    Indicator,
    /// The adversarial heuristic, negated on minimizing plies.
    Heuristic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimaxConfig {
    pub max_depth: u32,
    pub alpha_beta: bool,
    pub horizon: Horizon,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            max_depth: 5,
            alpha_beta: true,
            horizon: Horizon::Indicator,
        }
    }
}
