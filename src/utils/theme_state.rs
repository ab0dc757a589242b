use std::rc::Rc;

use dioxus::prelude::*;

use crate::theme::{
    app_theme_manager, AppThemeManager, PreferenceStore, PresentationSurface, Theme,
    ThemePreferenceManager, THEME_DARK,
};

/// What the surface currently reflects: the stored preference verbatim,
/// as applied by the manager.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    applied: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Theme::default().into()
    }
}

impl ThemeState {
    pub fn load<S: PreferenceStore, P: PresentationSurface>(
        manager: &ThemePreferenceManager<S, P>,
    ) -> Self {
        match manager.get_theme() {
            Ok(applied) => Self { applied },
            Err(e) => {
                log::error!("Failed to read theme preference: {}", e);
                Self::default()
            }
        }
    }

    /// Only a stored `"dark"` renders dark.
    pub fn is_dark(&self) -> bool {
        self.applied == THEME_DARK
    }

    pub fn is(&self, theme: Theme) -> bool {
        self.applied == theme.as_str()
    }

    /// Value for the root `data-theme` attribute and class.
    pub fn class_name(&self) -> &str {
        &self.applied
    }
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self {
            applied: theme.as_str().to_string(),
        }
    }
}

/// Context shared by the views: the preference manager (absent when the
/// platform store could not be opened) and the rendered state.
#[derive(Clone)]
pub struct ThemeHandle {
    manager: Option<Rc<AppThemeManager>>,
    state: Signal<ThemeState>,
}

impl ThemeHandle {
    pub fn state(&self) -> ThemeState {
        self.state.read().clone()
    }

    pub fn toggle(&mut self) {
        let Some(manager) = self.manager.clone() else {
            return;
        };
        match manager.toggle_theme() {
            Ok(theme) => self.state.set(theme.into()),
            Err(e) => log::error!("Failed to toggle theme: {}", e),
        }
    }

    pub fn set(&mut self, theme: Theme) {
        let Some(manager) = self.manager.clone() else {
            return;
        };
        match manager.set_theme(theme.as_str()) {
            Ok(()) => self.state.set(ThemeState::load(&*manager)),
            Err(e) => log::error!("Failed to set theme {}: {}", theme, e),
        }
    }
}

/// Opens the platform manager, applies the stored theme before the first
/// render, and provides a [`ThemeHandle`] to descendants.
pub fn use_theme_provider() -> ThemeHandle {
    let manager = use_hook(|| match app_theme_manager() {
        Ok(manager) => {
            if let Err(e) = manager.init_theme() {
                log::error!("Failed to initialise theme: {}", e);
            }
            Some(Rc::new(manager))
        }
        Err(e) => {
            log::error!("Theme preference unavailable: {}", e);
            None
        }
    });

    let state = use_signal(|| {
        manager
            .as_deref()
            .map(ThemeState::load)
            .unwrap_or_default()
    });

    use_context_provider(move || ThemeHandle { manager, state })
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryStore, MemorySurface, STORAGE_KEY, THEME_ATTRIBUTE};

    fn manager_with(stored: &str) -> ThemePreferenceManager<MemoryStore, MemorySurface> {
        ThemePreferenceManager::new(
            MemoryStore::with_item(STORAGE_KEY, stored),
            MemorySurface::default(),
        )
    }

    #[test]
    fn loads_dark_only_for_dark_literal() {
        for (stored, expected) in [("dark", true), ("light", false), ("sepia", false)] {
            let manager = manager_with(stored);
            assert_eq!(ThemeState::load(&manager).is_dark(), expected, "{}", stored);
        }
    }

    #[test]
    fn class_name_matches_what_init_applied() {
        for stored in ["light", "dark", "sepia"] {
            let manager = manager_with(stored);
            manager.init_theme().unwrap();
            let state = ThemeState::load(&manager);

            assert_eq!(
                manager.surface().root_attribute(THEME_ATTRIBUTE).as_deref(),
                Some(state.class_name())
            );
            assert_eq!(manager.surface().content_classes(), vec![state.class_name()]);
        }
    }

    #[test]
    fn foreign_value_matches_neither_button() {
        let state = ThemeState::load(&manager_with("sepia"));
        assert!(!state.is(Theme::Light));
        assert!(!state.is(Theme::Dark));
    }

    #[test]
    fn empty_store_loads_light() {
        let manager = ThemePreferenceManager::new(MemoryStore::new(), MemorySurface::default());
        assert_eq!(ThemeState::load(&manager), ThemeState::default());
        assert_eq!(ThemeState::default().class_name(), "light");
        assert_eq!(ThemeState::from(Theme::Dark).class_name(), "dark");
    }
}
