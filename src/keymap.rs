use crossterm::event::KeyCode;
use lazy_static::lazy_static;

use crate::app::ViewKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Add(ViewKind),
    Quit,
}

/// An entry of the button bar.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub title: &'static str,
    pub command: Command,
}

lazy_static! {
    static ref BINDINGS: Vec<(KeyCode, Command)> = vec![
        (KeyCode::Char(' '), Command::Toggle),
        (KeyCode::Char('s'), Command::Toggle),
        (KeyCode::Char('a'), Command::Add(ViewKind::ViewA)),
        (KeyCode::Char('b'), Command::Add(ViewKind::ViewB)),
        (KeyCode::Char('c'), Command::Add(ViewKind::ViewC)),
        (KeyCode::Char('d'), Command::Add(ViewKind::ViewD)),
        (KeyCode::Char('q'), Command::Quit),
        (KeyCode::Esc, Command::Quit),
    ];
    static ref BUTTONS: Vec<Button> = std::iter::once(Button {
        title: "↕",
        command: Command::Toggle,
    })
    .chain(ViewKind::ALL.iter().map(|k| Button {
        title: button_title(*k),
        command: Command::Add(*k),
    }))
    .collect();
}

fn button_title(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::ViewA => "A",
        ViewKind::ViewB => "B",
        ViewKind::ViewC => "C",
        ViewKind::ViewD => "D",
    }
}

pub fn command(key: KeyCode) -> Option<Command> {
    BINDINGS.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
}

pub fn buttons() -> &'static [Button] {
    BUTTONS.as_slice()
}

/// Keys bound to `command`, for the help line.
pub fn keys_for(command: Command) -> impl Iterator<Item = KeyCode> {
    BINDINGS
        .iter()
        .filter(move |(_, c)| *c == command)
        .map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_add_their_kind() {
        assert_eq!(command(KeyCode::Char('c')), Some(Command::Add(ViewKind::ViewC)));
        assert_eq!(command(KeyCode::Char(' ')), Some(Command::Toggle));
        assert_eq!(command(KeyCode::Char('z')), None);
    }

    #[test]
    fn bar_starts_with_toggle() {
        let titles = buttons().iter().map(|b| b.title).collect::<Vec<_>>();
        assert_eq!(titles, ["↕", "A", "B", "C", "D"]);
        assert_eq!(buttons()[0].command, Command::Toggle);
    }

    #[test]
    fn quit_has_two_keys() {
        assert_eq!(
            keys_for(Command::Quit).collect::<Vec<_>>(),
            [KeyCode::Char('q'), KeyCode::Esc]
        );
    }
}
