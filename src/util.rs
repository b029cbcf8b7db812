use tui::layout::{Constraint, Direction, Layout, Rect};

/// A terminal cell, as reported by a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

pub fn contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x
        && p.y >= rect.y
        && u32::from(p.x) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(p.y) < u32::from(rect.y) + u32::from(rect.height)
}

/// Splits `area` into `n` equal parts along `direction`.
pub fn equal_split(area: Rect, n: usize, direction: Direction) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(direction)
        .constraints(vec![Constraint::Ratio(1, n as u32); n])
        .split(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 2, 3, 2);
        assert!(contains(r, Point::new(2, 2)));
        assert!(contains(r, Point::new(4, 3)));
        assert!(!contains(r, Point::new(5, 3)));
        assert!(!contains(r, Point::new(4, 4)));
        assert!(!contains(r, Point::new(1, 2)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!contains(Rect::new(0, 0, 0, 0), Point::new(0, 0)));
    }

    #[test]
    fn equal_split_tiles_the_area() {
        let area = Rect::new(3, 1, 40, 12);
        let parts = equal_split(area, 4, Direction::Vertical);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].y, area.y);
        for pair in parts.windows(2) {
            assert_eq!(pair[0].y + pair[0].height, pair[1].y);
        }
        let last = parts[3];
        assert_eq!(last.y + last.height, area.y + area.height);
        assert!(parts.iter().all(|p| p.x == area.x && p.width == area.width && p.height == 3));
    }

    #[test]
    fn equal_split_of_nothing() {
        assert!(equal_split(Rect::new(0, 0, 10, 10), 0, Direction::Horizontal).is_empty());
    }
}
