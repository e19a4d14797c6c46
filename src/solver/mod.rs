pub mod minimax;

mod backtracking;
mod frontier;
mod node;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::config::{Method, SearchConfig};
use crate::data::Score;
use crate::heuristic::{heuristic, Mode};
use crate::level::Level;
use crate::maze::Maze;
use crate::path::Path;
use crate::rules::{expand, is_goal};
use crate::state::State;
use crate::Solve;

use self::backtracking::backtrack_path;
use self::frontier::{Fifo, Frontier, PriorityQueue};
use self::node::Node;

pub use self::stats::Stats;

/// How often the clock is checked when there's a time limit.
const TIME_CHECK_INTERVAL: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    ExpansionLimit(usize),
    TimedOut,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::ExpansionLimit(limit) => {
                write!(f, "Gave up after expanding {} states", limit)
            }
            SolverErr::TimedOut => write!(f, "Time limit reached"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if every reachable state was expanded without reaching the destination.
    pub path: Option<Path>,
    /// The goal state `path` leads to.
    pub end: Option<State>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn solved(path: Path, end: State, stats: Stats, method: Method) -> Self {
        Self {
            path: Some(path),
            end: Some(end),
            stats,
            method,
        }
    }

    fn no_solution(stats: Stats, method: Method) -> Self {
        Self {
            path: None,
            end: None,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "{}: {}", self.method, path.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, config: &SearchConfig) -> Result<SolverOk, SolverErr> {
        match method {
            Method::Bfs => bfs(self, config),
            Method::AStar => a_star(self, config),
        }
    }
}

/// Fewest actions.
pub fn bfs(level: &Level, config: &SearchConfig) -> Result<SolverOk, SolverErr> {
    let arena = Arena::new();
    search(level, config, Method::Bfs, &arena, Fifo::new(), |_, _| 0)
}

/// Lowest cost + distance first.
pub fn a_star(level: &Level, config: &SearchConfig) -> Result<SolverOk, SolverErr> {
    let arena = Arena::new();
    search(
        level,
        config,
        Method::AStar,
        &arena,
        PriorityQueue::new(),
        |maze, state| heuristic(maze, state, Mode::Cooperative),
    )
}

fn search<'a, F, P>(
    level: &Level,
    config: &SearchConfig,
    method: Method,
    arena: &'a Arena<Node<'a>>,
    mut frontier: F,
    priority: P,
) -> Result<SolverOk, SolverErr>
where
    F: Frontier<'a>,
    P: Fn(&Maze, &State) -> Score,
{
    debug!("Search called: {}", method);

    let maze = &level.maze;
    let me = level.me();
    let max_expansions = config
        .max_expansions
        .unwrap_or_else(|| maze.state_space_bound());
    let started = Instant::now();

    let mut stats = Stats::new();
    let mut closed: FnvHashSet<&'a State> = FnvHashSet::default();
    let mut expansions = 0;

    let start: &'a Node<'a> = arena.alloc(Node::root(level.state.clone()));
    stats.add_created(start);
    frontier.push(start, priority(maze, &start.state));

    while let Some(cur) = frontier.pop() {
        if closed.contains(&cur.state) {
            stats.add_reached_duplicate(cur);
            continue;
        }
        if stats.add_unique_visited(cur) {
            debug!("Visited new depth: {}", cur.state.depth());
            trace!("Frontier size: {}\n{:?}", frontier.len(), stats);
        }

        if is_goal(maze, &cur.state) {
            debug!("Solved, backtracking path");
            let path = backtrack_path(cur);
            return Ok(SolverOk::solved(path, cur.state.clone(), stats, method));
        }

        if expansions >= max_expansions {
            warn!("{}: expansion limit {} reached", method, max_expansions);
            return Err(SolverErr::ExpansionLimit(max_expansions));
        }
        if let Some(limit) = config.time_limit {
            if expansions % TIME_CHECK_INTERVAL == 0 && started.elapsed() >= limit {
                warn!("{}: time limit reached after {} expansions", method, expansions);
                return Err(SolverErr::TimedOut);
            }
        }
        expansions += 1;

        for (action, child) in expand(maze, &cur.state, me) {
            let h = priority(maze, &child);
            let next: &'a Node<'a> = arena.alloc(Node::child(cur, action, child));
            stats.add_created(next);
            frontier.push(next, h);
        }

        closed.insert(&cur.state);
    }

    debug!("Frontier exhausted, no solution");
    Ok(SolverOk::no_solution(stats, method))
}
