use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    app::App,
    keymap::{self, Command},
    sorted_vec::Direction,
    util::equal_split,
};

pub struct Chunks {
    /// The bordered stack, including its block.
    pub stack: Rect,
    /// Where the items are laid out.
    pub items: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

fn stack_block(direction: Direction) -> Block<'static> {
    let title = match direction {
        Direction::Ascending => "Stack (ascending)",
        Direction::Descending => "Stack (descending)",
    };
    Block::default().borders(Borders::ALL).title(title)
}

pub fn split(area: Rect) -> Chunks {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    Chunks {
        stack: chunks[0],
        items: stack_block(Direction::Ascending).inner(chunks[0]),
        buttons: chunks[1],
        status: chunks[2],
    }
}

pub fn button_rects(bar: Rect, n: usize) -> Vec<Rect> {
    equal_split(bar, n, LayoutDirection::Horizontal)
}

pub fn ui<B: Backend>(frame: &mut Frame<B>, app: &App) {
    let chunks = split(frame.size());
    render_stack(frame, chunks.stack, app);
    render_buttons(frame, app.button_bar());
    render_status(frame, chunks.status, app);
}

fn render_stack<B: Backend>(frame: &mut Frame<B>, rect: Rect, app: &App) {
    frame.render_widget(stack_block(app.direction()), rect);
    let placed = app
        .surface()
        .layout()
        .filter_map(|(id, bounds)| app.items().iter().find(|i| i.id == id).map(|i| (i, bounds)));
    for (item, bounds) in placed {
        frame.render_widget(
            Block::default().style(Style::default().bg(item.visual.color)),
            bounds,
        );
        let label = Paragraph::new(item.visual.label.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(item.visual.color)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(label, centered_row(bounds));
    }
}

/// The middle row of `rect`, where the label goes.
fn centered_row(rect: Rect) -> Rect {
    Rect::new(rect.x, rect.y + rect.height / 2, rect.width, rect.height.min(1))
}

fn render_buttons<B: Backend>(frame: &mut Frame<B>, bar: Rect) {
    let buttons = keymap::buttons();
    for (button, rect) in buttons.iter().zip(button_rects(bar, buttons.len())) {
        let paragraph = Paragraph::new(button.title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Blue))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, rect);
    }
}

fn key_names(command: Command) -> String {
    keymap::keys_for(command)
        .map(|k| match k {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "esc".to_string(),
            other => format!("{:?}", other),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app: &App) {
    let line = match app.status() {
        Some(Ok(msg)) => Spans::from(Span::styled(msg.clone(), Style::default().fg(Color::Green))),
        Some(Err(msg)) => Spans::from(Span::styled(msg.clone(), Style::default().fg(Color::Red))),
        None => {
            let mut help = format!(
                "{} toggle, a-d add, click an item to remove it, {} quit",
                key_names(Command::Toggle),
                key_names(Command::Quit),
            );
            if let Some(n) = app.remaining_swatches() {
                help.push_str(&format!(" ({} swatches left)", n));
            }
            Spans::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
        }
    };
    frame.render_widget(Paragraph::new(line), rect);
}
