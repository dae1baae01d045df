use std::fmt;
use std::str::FromStr;

use iced::Theme;
use thiserror::Error;

use super::persistence::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Key under which the preference is persisted.
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Reads the persisted preference. Anything but a valid stored value,
/// including a failing store, yields the default.
pub fn initial_theme(store: &dyn PreferenceStore) -> ThemePreference {
    match store.read(ThemePreference::STORAGE_KEY) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|err: UnknownTheme| {
            tracing::debug!(%err, "ignoring stored theme");
            ThemePreference::default()
        }),
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            tracing::debug!(%err, "theme preference unavailable");
            ThemePreference::default()
        }
    }
}

pub fn toggle_theme(current: ThemePreference) -> ThemePreference {
    current.toggled()
}

/// The active theme and the store it is written through to.
#[derive(Debug)]
pub struct ThemeState {
    current: ThemePreference,
    store: Box<dyn PreferenceStore>,
}

impl ThemeState {
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            current: initial_theme(store.as_ref()),
            store,
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(toggle_theme(self.current));
        self.current
    }

    pub fn set(&mut self, preference: ThemePreference) {
        if preference == self.current {
            return;
        }

        self.current = preference;

        if let Err(err) = self
            .store
            .write(ThemePreference::STORAGE_KEY, preference.as_str())
        {
            tracing::debug!(%err, theme = %preference, "theme preference not persisted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::persistence::MemoryStore;
    use proptest::prelude::*;

    fn any_theme() -> impl Strategy<Value = ThemePreference> {
        prop_oneof![Just(ThemePreference::Dark), Just(ThemePreference::Light)]
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(theme in any_theme()) {
            prop_assert_eq!(toggle_theme(toggle_theme(theme)), theme);
            prop_assert_ne!(toggle_theme(theme), theme);
        }

        #[test]
        fn persisted_copy_follows_every_toggle(toggles in 0usize..8) {
            let mut state = ThemeState::load(Box::new(MemoryStore::default()));
            for _ in 0..toggles {
                state.toggle();
            }
            let stored = state.store.read(ThemePreference::STORAGE_KEY).unwrap();
            let expected = if toggles % 2 == 0 {
                ThemePreference::Dark
            } else {
                ThemePreference::Light
            };

            prop_assert_eq!(state.current(), expected);
            if toggles > 0 {
                prop_assert_eq!(stored, Some(expected.to_string()));
            } else {
                prop_assert_eq!(stored, None);
            }
        }
    }

    #[test]
    fn defaults_to_dark_without_stored_value() {
        assert_eq!(initial_theme(&MemoryStore::default()), ThemePreference::Dark);
    }

    #[test]
    fn reads_stored_value() {
        let store = MemoryStore::with(ThemePreference::STORAGE_KEY, "light");
        assert_eq!(initial_theme(&store), ThemePreference::Light);
    }

    #[test]
    fn corrupted_value_is_treated_as_absent() {
        let store = MemoryStore::with(ThemePreference::STORAGE_KEY, "sepia");
        assert_eq!(initial_theme(&store), ThemePreference::Dark);
    }

    #[test]
    fn unavailable_store_is_treated_as_absent() {
        assert_eq!(initial_theme(&MemoryStore::unavailable()), ThemePreference::Dark);
    }

    #[test]
    fn toggle_survives_a_restart() {
        let mut state = ThemeState::load(Box::new(MemoryStore::default()));
        assert_eq!(state.current(), ThemePreference::Dark);

        assert_eq!(state.toggle(), ThemePreference::Light);

        let restarted = initial_theme(state.store.as_ref());
        assert_eq!(restarted, ThemePreference::Light);
    }

    #[test]
    fn write_failures_keep_the_in_memory_value() {
        let mut state = ThemeState::load(Box::new(MemoryStore::unavailable()));

        assert_eq!(state.toggle(), ThemePreference::Light);
        assert_eq!(state.current(), ThemePreference::Light);
        assert_eq!(state.toggle(), ThemePreference::Dark);
    }

    #[test]
    fn setting_the_same_value_does_not_write() {
        let mut state = ThemeState::load(Box::new(MemoryStore::default()));
        state.set(ThemePreference::Dark);

        assert_eq!(state.store.read(ThemePreference::STORAGE_KEY), Ok(None));
    }

    #[test]
    fn maps_to_iced_themes() {
        assert!(matches!(ThemePreference::Dark.theme(), Theme::Dark));
        assert!(matches!(ThemePreference::Light.theme(), Theme::Light));
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!(" light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!(
            "Dark".parse::<ThemePreference>(),
            Err(UnknownTheme("Dark".to_string()))
        );
    }
}
