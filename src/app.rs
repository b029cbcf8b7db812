mod config;
mod surface;
mod swatch;

use tracing::{debug, info, warn};
use tui::layout::Rect;

pub use config::{load_config, store_config, Config};
pub use surface::StackSurface;
pub use swatch::{SwatchFactory, ViewKind};

use crate::{
    container::{FactoryItem, OrderedContainer},
    keymap::{self, Command},
    sorted_vec::Direction,
    ui,
    util::{contains, Point},
};

pub type Status = Result<String, String>;

pub struct App {
    stack: OrderedContainer<SwatchFactory>,
    surface: StackSurface,
    button_bar: Rect,
    status: Option<Status>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            stack: OrderedContainer::new(SwatchFactory::new(config.swatch_budget), config.order),
            surface: StackSurface::new(config.spacing),
            button_bar: Rect::default(),
            status: None,
        };
        app.add_all(config.initial_items.iter().copied());
        app
    }

    pub fn items(&self) -> &[FactoryItem<SwatchFactory>] {
        self.stack.items()
    }

    pub fn direction(&self) -> Direction {
        self.stack.direction()
    }

    pub fn surface(&self) -> &StackSurface {
        &self.surface
    }

    pub fn button_bar(&self) -> Rect {
        self.button_bar
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn remaining_swatches(&self) -> Option<usize> {
        self.stack.factory().remaining()
    }

    /// Recomputes where the stack and the buttons live for a terminal of
    /// size `area`.
    pub fn set_viewport(&mut self, area: Rect) {
        let chunks = ui::split(area);
        self.surface.set_area(chunks.items);
        self.button_bar = chunks.buttons;
    }

    pub fn add(&mut self, kind: ViewKind) {
        self.add_all([kind]);
    }

    fn add_all<I: IntoIterator<Item = ViewKind>>(&mut self, kinds: I) {
        match self.stack.add_items(&mut self.surface, kinds) {
            Ok(n) => {
                debug!(added = n, total = self.stack.len(), "stack grew");
                self.status = None;
            }
            Err(e) => {
                warn!(%e, "could not build swatch");
                self.status = Some(Err(e.to_string()));
            }
        }
    }

    pub fn toggle_order(&mut self) {
        self.stack.toggle_direction(&mut self.surface);
        info!(direction = ?self.stack.direction(), "sort order toggled");
        self.status = None;
    }

    /// A left click: buttons first, then the stack.
    pub fn click(&mut self, point: Point) {
        let button = ui::button_rects(self.button_bar, keymap::buttons().len())
            .into_iter()
            .zip(keymap::buttons())
            .find(|(r, _)| contains(*r, point))
            .map(|(_, b)| b.command);
        if let Some(command) = button {
            self.handle(command);
        } else if let Some(item) = self.stack.remove_at(&mut self.surface, point) {
            info!(kind = %item.kind, "removed by click");
            self.status = Some(Ok(format!(
                "removed {}, {} left",
                item.visual.label,
                self.stack.len()
            )));
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Toggle => self.toggle_order(),
            Command::Add(kind) => self.add(kind),
            Command::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(app: &App) -> Vec<ViewKind> {
        app.items().iter().map(|i| i.kind).collect()
    }

    fn app(config: Config) -> App {
        let mut app = App::new(&config);
        app.set_viewport(Rect::new(0, 0, 40, 30));
        app
    }

    fn center(r: Rect) -> Point {
        Point::new(r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn starts_with_every_kind_sorted() {
        let app = app(Config::default());
        assert_eq!(kinds(&app), ViewKind::ALL);
        assert_eq!(app.surface().layout().count(), 4);
    }

    #[test]
    fn toggle_button_reverses() {
        let mut app = app(Config::default());
        let toggle = ui::button_rects(app.button_bar(), keymap::buttons().len())[0];
        app.click(center(toggle));
        assert_eq!(app.direction(), Direction::Descending);
        assert_eq!(
            kinds(&app),
            [ViewKind::ViewD, ViewKind::ViewC, ViewKind::ViewB, ViewKind::ViewA]
        );
    }

    #[test]
    fn add_button_inserts_in_place() {
        let mut app = app(Config::default());
        let add_b = ui::button_rects(app.button_bar(), keymap::buttons().len())[2];
        app.click(center(add_b));
        assert_eq!(
            kinds(&app),
            [
                ViewKind::ViewA,
                ViewKind::ViewB,
                ViewKind::ViewB,
                ViewKind::ViewC,
                ViewKind::ViewD
            ]
        );
    }

    #[test]
    fn clicking_an_item_removes_it() {
        let mut app = app(Config::default());
        let target = app.items()[1].id;
        let bounds = app.surface().layout().find(|(id, _)| *id == target).unwrap().1;

        app.click(center(bounds));
        assert_eq!(kinds(&app), [ViewKind::ViewA, ViewKind::ViewC, ViewKind::ViewD]);
        assert!(matches!(app.status(), Some(Ok(_))));
    }

    #[test]
    fn clicking_outside_does_nothing() {
        let mut app = app(Config::default());
        app.click(Point::new(200, 200));
        assert_eq!(app.items().len(), 4);
        assert!(app.status().is_none());
    }

    #[test]
    fn exhausted_budget_reports_error() {
        let mut app = app(Config {
            swatch_budget: Some(4),
            ..Config::default()
        });
        app.add(ViewKind::ViewA);
        assert_eq!(app.items().len(), 4);
        assert!(matches!(app.status(), Some(Err(_))));
        assert_eq!(app.remaining_swatches(), Some(0));
    }

    #[test]
    fn failed_batch_keeps_budget() {
        let mut app = app(Config {
            swatch_budget: Some(5),
            ..Config::default()
        });
        app.add_all([ViewKind::ViewA, ViewKind::ViewB]);
        assert_eq!(app.items().len(), 4);
        assert_eq!(app.remaining_swatches(), Some(1));
        assert!(matches!(app.status(), Some(Err(_))));

        app.add(ViewKind::ViewC);
        assert_eq!(app.items().len(), 5);
        assert!(app.status().is_none());
        assert_eq!(app.remaining_swatches(), Some(0));
    }

    #[test]
    fn seed_larger_than_budget_leaves_budget_free() {
        let mut app = app(Config {
            swatch_budget: Some(2),
            ..Config::default()
        });
        assert!(app.items().is_empty());
        assert_eq!(app.remaining_swatches(), Some(2));

        app.add(ViewKind::ViewD);
        app.add(ViewKind::ViewB);
        assert_eq!(kinds(&app), [ViewKind::ViewB, ViewKind::ViewD]);
    }

    #[test]
    fn config_seeds_order_and_items() {
        let app = app(Config {
            order: Direction::Descending,
            initial_items: vec![ViewKind::ViewB, ViewKind::ViewD, ViewKind::ViewA],
            ..Config::default()
        });
        assert_eq!(kinds(&app), [ViewKind::ViewD, ViewKind::ViewB, ViewKind::ViewA]);
    }
}
