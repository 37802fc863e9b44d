use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A user action against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectGenre(String),
    OrderByTitle,
    OrderByDate,
    ShowAll,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::SelectGenre(genre) => format!("genre \"{}\"", genre),
            Action::OrderByTitle => "order by title".to_string(),
            Action::OrderByDate => "order by date".to_string(),
            Action::ShowAll => "show all".to_string(),
        }
    }
}

/// Map a list-view key to a catalog action.
///
/// Genre selection goes through the picker, so it never comes from a single key.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char('t') => Some(Action::OrderByTitle),
        KeyCode::Char('d') => Some(Action::OrderByDate),
        KeyCode::Char('a') => Some(Action::ShowAll),
        _ => None,
    }
}
