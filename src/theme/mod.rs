//! Light/dark appearance preference: persisted in a key-value store and
//! reflected onto the document root attribute and content-node classes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file_store;
mod manager;
mod store;
mod surface;

#[cfg(target_arch = "wasm32")]
pub use browser::{init_when_ready, BrowserThemeManager, DocumentSurface, LocalStorage};
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
pub use manager::ThemePreferenceManager;
pub use store::{MemoryStore, PreferenceStore};
pub use surface::{MemorySurface, PresentationSurface};

pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

/// Key the preference is persisted under.
pub const STORAGE_KEY: &str = "user-theme-preference";

/// Root element attribute read by the stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => THEME_LIGHT,
            Theme::Dark => THEME_DARK,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            THEME_LIGHT => Ok(Theme::Light),
            THEME_DARK => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_string())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `document.readyState` is a plain string; only `"loading"` means the
/// body may not exist yet.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Manager used by the application shell on the current target.
#[cfg(target_arch = "wasm32")]
pub type AppThemeManager = BrowserThemeManager;

#[cfg(not(target_arch = "wasm32"))]
pub type AppThemeManager = ThemePreferenceManager<FileStore, MemorySurface>;

#[cfg(target_arch = "wasm32")]
pub fn app_theme_manager() -> Result<AppThemeManager, ThemeError> {
    ThemePreferenceManager::browser()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn app_theme_manager() -> Result<AppThemeManager, ThemeError> {
    let path = crate::configs::get_store_path();
    Ok(ThemePreferenceManager::new(FileStore::new(path), MemorySurface::default()))
}
