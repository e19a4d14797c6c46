//! Depth-limited minimax with alpha-beta pruning.
//!
//! Values are always from the maximizing side's point of view.
//! Two scales are mixed on purpose: a reached goal (and, with `Horizon::Indicator`,
//! the depth cutoff) is worth exactly +1 / -1, nodes without children are worth
//! their heuristic evaluation.

use std::hash::Hash;

use fnv::FnvHashSet;

use crate::config::{Horizon, MinimaxConfig};
use crate::data::{Action, AgentId, Score};
use crate::heuristic::{heuristic, Mode};
use crate::level::Level;
use crate::maze::Maze;
use crate::rules;
use crate::state::State;
use crate::Decide;

/// A two player game as seen by minimax.
pub trait GameTree {
    type Move: Copy;
    type State: Clone + Eq + Hash;

    /// Children when the maximizing (or minimizing) side is about to move, in a fixed order.
    fn children(&self, state: &Self::State, maximizing: bool) -> Vec<(Self::Move, Self::State)>;

    /// The side that produced `state` has won.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Heuristic value for the side about to move - more is better for them.
    fn evaluate(&self, state: &Self::State) -> Score;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<M, S> {
    /// `None` if the root had no children worth taking.
    pub mov: Option<M>,
    /// The chosen child or the root itself.
    pub state: S,
    pub value: Score,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStats {
    /// Nodes the search was called on.
    pub visited: usize,
    /// Nodes whose children were generated.
    pub expanded: usize,
    /// Times the remaining children of a node were skipped.
    pub cutoffs: usize,
}

pub fn minimax<G: GameTree>(
    game: &G,
    root: &G::State,
    config: &MinimaxConfig,
) -> (Decision<G::Move, G::State>, MinimaxStats) {
    let mut search = Minimax {
        game,
        config: *config,
        stats: MinimaxStats::default(),
    };
    let (best, value) = search.alpha_beta(root, Score::min_value(), Score::max_value(), true, 0);
    debug!("Minimax done, value {}, {:?}", value, search.stats);

    let decision = match best {
        Some((mov, state)) => Decision {
            mov: Some(mov),
            state,
            value,
        },
        None => Decision {
            mov: None,
            state: root.clone(),
            value,
        },
    };
    (decision, search.stats)
}

struct Minimax<'g, G> {
    game: &'g G,
    config: MinimaxConfig,
    stats: MinimaxStats,
}

impl<G: GameTree> Minimax<'_, G> {
    fn alpha_beta(
        &mut self,
        state: &G::State,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        depth: u32,
    ) -> (Option<(G::Move, G::State)>, Score) {
        self.stats.visited += 1;

        if depth > self.config.max_depth {
            let value = match self.config.horizon {
                Horizon::Indicator => indicator(maximizing),
                Horizon::Heuristic => self.leaf_value(state, maximizing),
            };
            return (None, value);
        }
        if self.game.is_goal(state) {
            return (None, indicator(maximizing));
        }

        let children = self.game.children(state, maximizing);
        if children.is_empty() {
            return (None, self.leaf_value(state, maximizing));
        }
        self.stats.expanded += 1;

        let mut best_value = if maximizing {
            Score::min_value()
        } else {
            Score::max_value()
        };
        let mut best = None;

        // only guards against repeated children of this one node
        let mut visited = FnvHashSet::default();

        for (mov, child) in children {
            if visited.contains(&child) {
                continue;
            }

            let (_, value) = self.alpha_beta(&child, alpha, beta, !maximizing, depth + 1);

            if maximizing {
                alpha = alpha.max(value);
                if value > best_value {
                    best_value = value;
                    best = Some((mov, child.clone()));
                }
            } else {
                beta = beta.min(value);
                if value < best_value {
                    best_value = value;
                    best = Some((mov, child.clone()));
                }
            }

            visited.insert(child);

            if self.config.alpha_beta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some(best) => (Some(best), best_value),
            None => (None, 0),
        }
    }

    fn leaf_value(&self, state: &G::State, maximizing: bool) -> Score {
        let value = self.game.evaluate(state);
        if maximizing {
            value
        } else {
            -value
        }
    }
}

/// Whoever produced the node won - good for max iff min is about to move.
fn indicator(maximizing: bool) -> Score {
    if maximizing {
        -1
    } else {
        1
    }
}

/// The maze from the point of view of `me` playing against `opponent`.
#[derive(Debug, Clone, Copy)]
pub struct MazeGame<'a> {
    maze: &'a Maze,
    me: AgentId,
    opponent: AgentId,
}

impl<'a> MazeGame<'a> {
    /// Without another agent `me` plays both sides.
    pub fn new(maze: &'a Maze, me: AgentId) -> Self {
        let opponent = maze.opponent_of(me).unwrap_or(me);
        MazeGame { maze, me, opponent }
    }
}

impl GameTree for MazeGame<'_> {
    type Move = Action;
    type State = State;

    fn children(&self, state: &State, maximizing: bool) -> Vec<(Action, State)> {
        let actor = if maximizing { self.me } else { self.opponent };
        rules::expand(self.maze, state, actor)
    }

    fn is_goal(&self, state: &State) -> bool {
        rules::is_goal(self.maze, state)
    }

    fn evaluate(&self, state: &State) -> Score {
        // the heuristic favors whoever produced the state, the other side moves next
        -heuristic(self.maze, state, Mode::Adversarial)
    }
}

impl Decide for Level {
    fn decide(&self, config: &MinimaxConfig) -> (Decision<Action, State>, MinimaxStats) {
        let game = MazeGame::new(&self.maze, self.me());
        minimax(&game, &self.state, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dir, Pos};
    use crate::percept::Percept;

    /// Explicit tree, node 0 is the root, values are for the side to move at the leaf.
    struct Tree {
        children: Vec<Vec<usize>>,
        values: Vec<Score>,
    }

    impl Tree {
        fn textbook() -> Self {
            // root -> 3 min nodes -> 3 leaves each
            let mut children = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10, 11, 12]];
            children.extend((4..13).map(|_| Vec::new()));
            let mut values = vec![0; 4];
            values.extend(&[3, 12, 8, 2, 4, 6, 14, 5, 2]);
            Tree { children, values }
        }
    }

    impl GameTree for Tree {
        type Move = usize;
        type State = usize;

        fn children(&self, state: &usize, _maximizing: bool) -> Vec<(usize, usize)> {
            self.children[*state].iter().map(|&c| (c, c)).collect()
        }

        fn is_goal(&self, _state: &usize) -> bool {
            false
        }

        fn evaluate(&self, state: &usize) -> Score {
            self.values[*state]
        }
    }

    fn no_pruning() -> MinimaxConfig {
        MinimaxConfig {
            alpha_beta: false,
            ..MinimaxConfig::default()
        }
    }

    #[test]
    fn textbook_tree() {
        let tree = Tree::textbook();

        let (pruned, pruned_stats) = minimax(&tree, &0, &MinimaxConfig::default());
        let (full, full_stats) = minimax(&tree, &0, &no_pruning());

        assert_eq!(pruned.value, 3);
        assert_eq!(pruned.mov, Some(1));
        assert_eq!(pruned, full);

        assert_eq!(full_stats.visited, 13);
        assert_eq!(full_stats.cutoffs, 0);
        assert_eq!(pruned_stats.visited, 11);
        assert!(pruned_stats.visited <= full_stats.visited);
        assert!(pruned_stats.expanded <= full_stats.expanded);
    }

    #[test]
    fn leaves_negated_on_min_nodes() {
        // root -> one leaf, the leaf is a min node
        let tree = Tree {
            children: vec![vec![1], vec![]],
            values: vec![0, 7],
        };
        let (decision, _) = minimax(&tree, &0, &MinimaxConfig::default());
        assert_eq!(decision.value, -7);
        assert_eq!(decision.mov, Some(1));
    }

    #[test]
    fn cutoff_values() {
        let tree = Tree::textbook();
        let shallow = MinimaxConfig {
            max_depth: 0,
            ..MinimaxConfig::default()
        };
        // children of the root are below the limit and min is to move there
        let (decision, stats) = minimax(&tree, &0, &shallow);
        assert_eq!(decision.value, 1);
        assert_eq!(decision.mov, Some(1));
        assert_eq!(stats.expanded, 1);

        let heuristic = MinimaxConfig {
            horizon: Horizon::Heuristic,
            ..shallow
        };
        let (decision, _) = minimax(&tree, &0, &heuristic);
        assert_eq!(decision.value, 0);
    }

    #[test]
    fn childless_root() {
        let tree = Tree {
            children: vec![vec![]],
            values: vec![5],
        };
        let (decision, stats) = minimax(&tree, &0, &MinimaxConfig::default());
        assert_eq!(decision.mov, None);
        assert_eq!(decision.state, 0);
        assert_eq!(decision.value, 5);
        assert_eq!(stats.expanded, 0);
    }

    fn duel(me: Pos, them: Pos, destination: Pos) -> Level {
        Percept {
            agents: vec![("me".to_string(), me), ("them".to_string(), them)],
            walls: vec![],
            size: (4, 4),
            destination,
            turn: "me".to_string(),
        }
        .to_level("me")
        .unwrap()
    }

    #[test]
    fn goal_at_root_is_a_loss() {
        let level = duel(Pos::new(2, 2), Pos::new(0, 0), Pos::new(2, 2));
        let config = MinimaxConfig {
            max_depth: 0,
            ..MinimaxConfig::default()
        };
        let (decision, stats) = level.decide(&config);
        assert_eq!(decision.value, -1);
        assert_eq!(decision.mov, None);
        assert_eq!(decision.state, level.state);
        assert_eq!(stats.visited, 1);
    }

    #[test]
    fn takes_the_win() {
        let level = duel(Pos::new(2, 3), Pos::new(0, 0), Pos::new(3, 3));
        let config = MinimaxConfig {
            max_depth: 1,
            ..MinimaxConfig::default()
        };
        let (decision, _) = level.decide(&config);
        assert_eq!(decision.value, 1);
        assert_eq!(decision.mov, Some(Action::Move(Dir::E)));
        assert_eq!(decision.state.agent_pos(), Pos::new(3, 3));
    }

    #[test]
    fn pruning_keeps_the_decision() {
        let level = duel(Pos::new(0, 3), Pos::new(3, 0), Pos::new(2, 2));
        for &horizon in &[Horizon::Indicator, Horizon::Heuristic] {
            let pruned = MinimaxConfig {
                max_depth: 2,
                alpha_beta: true,
                horizon,
            };
            let full = MinimaxConfig {
                alpha_beta: false,
                ..pruned
            };
            let (a, a_stats) = level.decide(&pruned);
            let (b, b_stats) = level.decide(&full);
            assert_eq!(a.value, b.value);
            assert_eq!(a.mov, b.mov);
            assert!(a_stats.visited <= b_stats.visited);
        }
    }

    #[test]
    fn heuristic_horizon_heads_for_the_goal() {
        // no win in reach, so the heuristic decides
        let level = duel(Pos::new(0, 1), Pos::new(3, 2), Pos::new(0, 3));
        let config = MinimaxConfig {
            max_depth: 0,
            alpha_beta: true,
            horizon: Horizon::Heuristic,
        };
        let (decision, _) = level.decide(&config);
        assert_eq!(decision.mov, Some(Action::Move(Dir::S)));
        // them 4 away, me 1 away after the move
        assert_eq!(decision.value, 3);
    }
}
