use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

/// The parts of the document styling rules key off: an attribute on the
/// root element and the class list of the top-level content node.
pub trait PresentationSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    fn remove_content_classes(&self, classes: &[&str]) -> Result<(), ThemeError>;

    fn add_content_class(&self, class: &str) -> Result<(), ThemeError>;
}

#[derive(Debug, Default)]
struct SurfaceState {
    root_attributes: HashMap<String, String>,
    content_classes: Vec<String>,
}

/// Surface held in memory, with token-list semantics for the class set.
/// Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl MemorySurface {
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attributes.get(name).cloned()
    }

    pub fn content_classes(&self) -> Vec<String> {
        self.state.borrow().content_classes.clone()
    }

    pub fn has_content_class(&self, class: &str) -> bool {
        self.state.borrow().content_classes.iter().any(|c| c == class)
    }
}

impl PresentationSurface for MemorySurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.state
            .borrow_mut()
            .root_attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_content_classes(&self, classes: &[&str]) -> Result<(), ThemeError> {
        self.state
            .borrow_mut()
            .content_classes
            .retain(|c| !classes.contains(&c.as_str()));
        Ok(())
    }

    fn add_content_class(&self, class: &str) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if !state.content_classes.iter().any(|c| c == class) {
            state.content_classes.push(class.to_string());
        }
        Ok(())
    }
}

impl<T: PresentationSurface + ?Sized> PresentationSurface for Rc<T> {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_root_attribute(name, value)
    }

    fn remove_content_classes(&self, classes: &[&str]) -> Result<(), ThemeError> {
        (**self).remove_content_classes(classes)
    }

    fn add_content_class(&self, class: &str) -> Result<(), ThemeError> {
        (**self).add_content_class(class)
    }
}
