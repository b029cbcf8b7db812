use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::traits::SortKeyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Ascending
    }
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A vec kept sorted by [`SortKeyed::sort_key`]. Sorting is stable, so equal
/// keys stay in insertion order in both directions.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SortedVec<T> {
    v: Vec<T>,
    direction: Direction,
}

impl<T> Default for SortedVec<T> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.v
    }
}

impl<T> SortedVec<T> {
    pub fn new(direction: Direction) -> Self {
        Self {
            v: Vec::new(),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (self.v.len() > index).then(|| self.v.remove(index))
    }

    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.v.iter().position(pred)
    }
}

impl<T: SortKeyed> SortedVec<T> {
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.v.extend(iter);
        self.sort();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.sort();
    }

    fn sort(&mut self) {
        match self.direction {
            Direction::Ascending => self.v.sort_by_key(|t| t.sort_key()),
            Direction::Descending => self.v.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
        }
    }
}
