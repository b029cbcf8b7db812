use tui::layout::{Direction, Rect};

use crate::{container::ItemId, traits::DisplaySurface, util::equal_split};

/// A vertical stack where every item gets an equal share of the height.
#[derive(Debug, Clone, Default)]
pub struct StackSurface {
    order: Vec<ItemId>,
    area: Rect,
    spacing: u16,
}

impl StackSurface {
    pub fn new(spacing: u16) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Bounds of every item that got at least one row, in display order.
    /// Each item gets an equal slot; all but the last give up `spacing`
    /// rows at their bottom.
    pub fn layout(&self) -> impl Iterator<Item = (ItemId, Rect)> + '_ {
        let last = self.order.len().saturating_sub(1);
        let spacing = self.spacing;
        equal_split(self.area, self.order.len(), Direction::Vertical)
            .into_iter()
            .zip(&self.order)
            .enumerate()
            .map(move |(i, (slot, id))| {
                let height = if i == last {
                    slot.height
                } else {
                    slot.height.saturating_sub(spacing)
                };
                (*id, Rect { height, ..slot })
            })
            .filter(|(_, r)| r.height > 0)
    }
}

impl DisplaySurface for StackSurface {
    fn attach(&mut self, id: ItemId) {
        self.order.push(id);
    }

    fn detach(&mut self, id: ItemId) {
        self.order.retain(|i| *i != id);
    }

    fn set_order(&mut self, ids: &[ItemId]) {
        self.order.clear();
        self.order.extend_from_slice(ids);
    }

    fn bounds(&self, id: ItemId) -> Option<Rect> {
        self.layout().find(|(i, _)| *i == id).map(|(_, r)| r)
    }
}
