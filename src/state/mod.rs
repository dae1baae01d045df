pub mod persistence;
pub mod selection;
pub mod theme;

use crate::i18n::Language;
pub use selection::{Selection, SelectionMessage};
pub use theme::{ThemePreference, ThemeState};

#[derive(Debug)]
pub struct State {
    pub language: Language,
    pub theme: ThemeState,
    pub selection: Selection,
}

impl State {
    pub fn new(theme: ThemeState) -> Self {
        Self {
            language: Language::default(),
            theme,
            selection: Selection::default(),
        }
    }
}
