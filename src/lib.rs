mod views;
mod utils;
mod routes;
mod configs;
mod error;
pub mod theme;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::get_store_path;
pub use crate::error::ThemeError;
pub use crate::theme::{ Theme, ThemePreferenceManager, THEME_DARK, THEME_LIGHT };
