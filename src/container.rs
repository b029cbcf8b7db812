use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::{
    sorted_vec::{Direction, SortedVec},
    traits::{ConstructionError, DisplaySurface, ItemFactory, SortKeyed},
    util::{contains, Point},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<K, V> {
    pub id: ItemId,
    pub kind: K,
    pub sort_key: i64,
    pub visual: V,
}

impl<K, V> SortKeyed for Item<K, V> {
    fn sort_key(&self) -> i64 {
        self.sort_key
    }
}

pub type FactoryItem<F> = Item<<F as ItemFactory>::Kind, <F as ItemFactory>::Visual>;

/// Owns a set of items and keeps them, and the surface showing them, sorted
/// by sort key.
pub struct OrderedContainer<F: ItemFactory> {
    factory: F,
    items: SortedVec<FactoryItem<F>>,
}

impl<F: ItemFactory> OrderedContainer<F> {
    pub fn new(factory: F, direction: Direction) -> Self {
        Self {
            factory,
            items: SortedVec::new(direction),
        }
    }

    pub fn direction(&self) -> Direction {
        self.items.direction()
    }

    pub fn items(&self) -> &[FactoryItem<F>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Builds one item per kind and inserts them all. Either every item is
    /// added or, if the factory fails, none are.
    pub fn add_items<S, I>(&mut self, surface: &mut S, kinds: I) -> Result<usize, ConstructionError>
    where
        S: DisplaySurface,
        I: IntoIterator<Item = F::Kind>,
    {
        let kinds = kinds.into_iter().collect::<Vec<_>>();
        self.factory.reserve(kinds.len())?;
        let mut built = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let (visual, sort_key) = self.factory.create(&kind)?;
            built.push(Item {
                id: ItemId::new(),
                kind,
                sort_key,
                visual,
            });
        }

        let n = built.len();
        for item in &built {
            debug!(id = %item.id, key = item.sort_key, "adding item");
            surface.attach(item.id);
        }
        self.items.extend(built);
        self.sync(surface);
        Ok(n)
    }

    pub fn set_direction<S: DisplaySurface>(&mut self, surface: &mut S, direction: Direction) {
        debug!(?direction, "changing sort direction");
        self.items.set_direction(direction);
        self.sync(surface);
    }

    pub fn toggle_direction<S: DisplaySurface>(&mut self, surface: &mut S) {
        self.set_direction(surface, self.direction().toggled())
    }

    /// Removes the first item, in display order, whose bounds contain `point`
    /// and hands it back. `None` when nothing is under `point`.
    pub fn remove_at<S: DisplaySurface>(&mut self, surface: &mut S, point: Point) -> Option<FactoryItem<F>> {
        let hit = self
            .items
            .iter()
            .find(|i| surface.bounds(i.id).map_or(false, |r| contains(r, point)))
            .map(|i| i.id);
        match hit {
            Some(id) => self.remove(surface, id),
            None => {
                debug!(?point, "nothing to remove");
                None
            }
        }
    }

    pub fn remove<S: DisplaySurface>(&mut self, surface: &mut S, id: ItemId) -> Option<FactoryItem<F>> {
        let index = self.items.position(|i| i.id == id)?;
        let item = self.items.remove(index)?;
        debug!(%id, key = item.sort_key, "removed item");
        surface.detach(id);
        Some(item)
    }

    /// Pushes the current order to the surface.
    fn sync<S: DisplaySurface>(&self, surface: &mut S) {
        let ids = self.items.iter().map(|i| i.id).collect::<Vec<_>>();
        surface.set_order(&ids);
    }
}
