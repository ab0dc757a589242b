use std::path::PathBuf;

pub const STORE_PATH_VAR: &str = "THEME_STORE_PATH";
pub const DEFAULT_STORE_FILE: &str = "theme-preference.json";

pub fn get_store_path() -> PathBuf {
    store_path_from(std::env::var(STORE_PATH_VAR).ok())
}

fn store_path_from(value: Option<String>) -> PathBuf {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(path) => {
            log::info!("Using theme preference store at {}", path);
            PathBuf::from(path)
        }
        None => {
            log::info!("{} not set, using {}", STORE_PATH_VAR, DEFAULT_STORE_FILE);
            PathBuf::from(DEFAULT_STORE_FILE)
        }
    }
}
