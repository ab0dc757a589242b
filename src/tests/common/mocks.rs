use std::cell::RefCell;

use crate::error::ThemeError;
use crate::theme::{PreferenceStore, PresentationSurface};

/// Store whose reads succeed with a fixed value and whose writes fail,
/// like a full or read-only `localStorage`.
pub struct RejectingStore {
    pub stored: Option<String>,
}

impl PreferenceStore for RejectingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.stored.clone())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("QuotaExceededError".to_string()))
    }
}

/// Store that cannot be opened for reading or writing.
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::Storage("storage disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("storage disabled".to_string()))
    }
}

/// Surface that records every call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: RefCell<Vec<String>>,
}

impl PresentationSurface for RecordingSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.calls.borrow_mut().push(format!("attr {}={}", name, value));
        Ok(())
    }

    fn remove_content_classes(&self, classes: &[&str]) -> Result<(), ThemeError> {
        self.calls.borrow_mut().push(format!("remove {}", classes.join(",")));
        Ok(())
    }

    fn add_content_class(&self, class: &str) -> Result<(), ThemeError> {
        self.calls.borrow_mut().push(format!("add {}", class));
        Ok(())
    }
}

/// Surface whose document has no body yet.
pub struct DetachedSurface;

impl PresentationSurface for DetachedSurface {
    fn set_root_attribute(&self, _name: &str, _value: &str) -> Result<(), ThemeError> {
        Ok(())
    }

    fn remove_content_classes(&self, _classes: &[&str]) -> Result<(), ThemeError> {
        Err(ThemeError::Document("document has no body".to_string()))
    }

    fn add_content_class(&self, _class: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Document("document has no body".to_string()))
    }
}
