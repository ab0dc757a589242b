use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    InvalidTheme(String),
    Storage(String),
    Document(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::InvalidTheme(value) => {
                write!(
                    f,
                    "Invalid theme: {}. Use '{}' or '{}'",
                    value,
                    crate::theme::THEME_LIGHT,
                    crate::theme::THEME_DARK
                )
            }
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Document(msg) => write!(f, "Document Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        ThemeError::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Storage(error.to_string())
    }
}
