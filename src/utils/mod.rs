mod theme_state;

pub use theme_state::{use_theme, use_theme_provider, ThemeHandle, ThemeState};
