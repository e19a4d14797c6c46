use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Action, Dir};

/// Actions from a search root to the state where the search stopped.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Action>);

impl Path {
    pub fn new(actions: Vec<Action>) -> Self {
        Path(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cost(&self) -> u32 {
        self.0.iter().map(|a| a.cost()).sum()
    }

    pub fn first(&self) -> Option<Action> {
        self.0.first().cloned()
    }

    #[cfg(test)]
    pub(crate) fn add(&mut self, action: Action) {
        self.0.push(action);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn lower(dir: Dir) -> char {
    match dir {
        Dir::N => 'n',
        Dir::S => 's',
        Dir::E => 'e',
        Dir::O => 'o',
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            match *action {
                Action::Wait => write!(f, ".")?,
                Action::Move(dir) => write!(f, "{}", lower(dir))?,
                Action::Jump(dir) => write!(f, "{}", dir)?,
                Action::PlaceWall(dir) => write!(f, "#{}", lower(dir))?,
            }
        }
        Ok(())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
