use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tui::style::Color;

use crate::traits::{ConstructionError, ItemFactory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    ViewA,
    ViewB,
    ViewC,
    ViewD,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [Self::ViewA, Self::ViewB, Self::ViewC, Self::ViewD];

    pub fn raw(self) -> i64 {
        match self {
            Self::ViewA => 0,
            Self::ViewB => 1,
            Self::ViewC => 2,
            Self::ViewD => 3,
        }
    }

    /// Keys start at 1.
    pub fn sort_key(self) -> i64 {
        self.raw() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ViewA => "viewA",
            Self::ViewB => "viewB",
            Self::ViewC => "viewC",
            Self::ViewD => "viewD",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub color: Color,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct SwatchFactory {
    budget: Option<usize>,
    built: usize,
}

impl SwatchFactory {
    pub fn new(budget: Option<usize>) -> Self {
        Self { budget, built: 0 }
    }

    pub fn remaining(&self) -> Option<usize> {
        self.budget.map(|b| b.saturating_sub(self.built))
    }
}

fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    Color::Rgb(rng.gen(), rng.gen(), rng.gen())
}

impl ItemFactory for SwatchFactory {
    type Kind = ViewKind;
    type Visual = Swatch;

    fn reserve(&mut self, n: usize) -> Result<(), ConstructionError> {
        match self.budget {
            Some(budget) if self.built + n > budget => Err(ConstructionError::Exhausted { budget }),
            _ => Ok(()),
        }
    }

    fn create(&mut self, kind: &ViewKind) -> Result<(Swatch, i64), ConstructionError> {
        if let Some(budget) = self.budget {
            if self.built >= budget {
                return Err(ConstructionError::Exhausted { budget });
            }
        }
        self.built += 1;
        let swatch = Swatch {
            color: random_color(),
            label: format!("{} [{}]", kind, kind.raw()),
        };
        Ok((swatch, kind.sort_key()))
    }
}
