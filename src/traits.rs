use thiserror::Error;
use tui::layout::Rect;

use crate::container::ItemId;

/// Anything that can be ordered by the container.
pub trait SortKeyed {
    fn sort_key(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("construction budget of {budget} items is exhausted")]
    Exhausted { budget: usize },
}

/// Builds the visual for a requested kind of item.
pub trait ItemFactory {
    type Kind: Clone;
    type Visual;

    /// Checks that `n` more items can be built before any of them is.
    fn reserve(&mut self, _n: usize) -> Result<(), ConstructionError> {
        Ok(())
    }

    /// Returns a freshly built visual together with the sort key of `kind`.
    fn create(&mut self, kind: &Self::Kind) -> Result<(Self::Visual, i64), ConstructionError>;
}

/// Where items are actually placed on screen.
pub trait DisplaySurface {
    /// Place `id` at the end of the display order.
    fn attach(&mut self, id: ItemId);
    fn detach(&mut self, id: ItemId);
    /// Replace the display order with `ids`.
    fn set_order(&mut self, ids: &[ItemId]);
    fn bounds(&self, id: ItemId) -> Option<Rect>;
}
