use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Index of an agent in the maze's roster.
pub type AgentId = usize;

/// Higher is better for whoever is maximizing.
pub type Score = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    N,
    S,
    E,
    O,
}

/// The order children are generated in - changing it changes tie-breaks in all searches.
pub const DIRECTIONS: [Dir; 4] = [Dir::N, Dir::S, Dir::E, Dir::O];

impl Dir {
    /// `y` grows southwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::N => (0, -1),
            Dir::S => (0, 1),
            Dir::E => (1, 0),
            Dir::O => (-1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::N => 'N',
            Dir::S => 'S',
            Dir::E => 'E',
            Dir::O => 'O',
        };
        write!(f, "{}", c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Jump,
    PlaceWall,
    Wait,
}

impl ActionKind {
    pub fn cost(self) -> u32 {
        match self {
            ActionKind::Move => 1,
            ActionKind::Jump => 2,
            ActionKind::PlaceWall => 3,
            ActionKind::Wait => 0,
        }
    }

    /// Name used on the referee boundary.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Move => "MOVE",
            ActionKind::Jump => "JUMP",
            ActionKind::PlaceWall => "PLACE_WALL",
            ActionKind::Wait => "WAIT",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Wait,
    Move(Dir),
    Jump(Dir),
    PlaceWall(Dir),
}

impl Action {
    pub fn kind(self) -> ActionKind {
        match self {
            Action::Wait => ActionKind::Wait,
            Action::Move(_) => ActionKind::Move,
            Action::Jump(_) => ActionKind::Jump,
            Action::PlaceWall(_) => ActionKind::PlaceWall,
        }
    }

    pub fn dir(self) -> Option<Dir> {
        match self {
            Action::Wait => None,
            Action::Move(dir) | Action::Jump(dir) | Action::PlaceWall(dir) => Some(dir),
        }
    }

    pub fn cost(self) -> u32 {
        self.kind().cost()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.dir() {
            None => write!(f, "{}", self.kind()),
            Some(dir) => write!(f, "{} {}", self.kind(), dir),
        }
    }
}
