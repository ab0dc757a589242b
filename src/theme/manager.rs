use crate::error::ThemeError;
use crate::theme::{
    PreferenceStore, PresentationSurface, Theme, STORAGE_KEY, THEME_ATTRIBUTE, THEME_DARK,
    THEME_LIGHT,
};

/// Reads, validates, persists and applies the light/dark preference.
///
/// The store owns the durable value; the surface only ever holds a
/// reflection of it that [`init_theme`](Self::init_theme) can rebuild.
#[derive(Clone, Debug)]
pub struct ThemePreferenceManager<S, P> {
    store: S,
    surface: P,
}

impl<S: PreferenceStore, P: PresentationSurface> ThemePreferenceManager<S, P> {
    pub fn new(store: S, surface: P) -> Self {
        Self { store, surface }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Stored value verbatim, or `"light"` when nothing (or an empty
    /// string) has been stored. Foreign values are not validated here.
    pub fn get_theme(&self) -> Result<String, ThemeError> {
        let saved = self
            .store
            .get_item(STORAGE_KEY)?
            .filter(|theme| !theme.is_empty());
        Ok(saved.unwrap_or_else(|| THEME_LIGHT.to_string()))
    }

    /// Typed view of [`get_theme`](Self::get_theme); `None` when storage
    /// holds something other than the two known literals.
    pub fn current_theme(&self) -> Result<Option<Theme>, ThemeError> {
        Ok(self.get_theme()?.parse().ok())
    }

    /// Persists and applies `theme`. Anything but `"light"` or `"dark"` is
    /// rejected with a warning and leaves storage and document untouched.
    pub fn set_theme(&self, theme: &str) -> Result<(), ThemeError> {
        let theme = match theme.parse::<Theme>() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("{}", e);
                return Ok(());
            }
        };

        self.store.set_item(STORAGE_KEY, theme.as_str())?;
        log::debug!("Persisted theme preference: {}", theme);
        self.apply_theme(theme.as_str())
    }

    /// Reflects `theme` onto the surface without validating it: sets the
    /// root attribute, clears both theme classes, then adds `theme`.
    pub fn apply_theme(&self, theme: &str) -> Result<(), ThemeError> {
        self.surface.set_root_attribute(THEME_ATTRIBUTE, theme)?;
        self.surface
            .remove_content_classes(&[THEME_LIGHT, THEME_DARK])?;
        self.surface.add_content_class(theme)?;
        log::debug!("Applied theme to document: {}", theme);
        Ok(())
    }

    /// Switches to the other mode and returns it. A stored value that is
    /// not `"dark"` (including a foreign one) switches to dark.
    pub fn toggle_theme(&self) -> Result<Theme, ThemeError> {
        let next = match self.current_theme()? {
            Some(current) => current.opposite(),
            None => Theme::Dark,
        };
        self.set_theme(next.as_str())?;
        Ok(next)
    }

    /// Re-applies whatever is stored. Nothing is written to the store.
    pub fn init_theme(&self) -> Result<(), ThemeError> {
        let theme = self.get_theme()?;
        self.apply_theme(&theme)
    }

    pub fn is_dark_mode(&self) -> Result<bool, ThemeError> {
        Ok(self.get_theme()? == THEME_DARK)
    }

    pub fn is_light_mode(&self) -> Result<bool, ThemeError> {
        Ok(self.get_theme()? == THEME_LIGHT)
    }
}
