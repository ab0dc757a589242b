//! `localStorage` and DOM bindings for the theme preference.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Storage};

use crate::error::ThemeError;
use crate::theme::{
    is_loading, PreferenceStore, PresentationSurface, ThemePreferenceManager,
};

pub type BrowserThemeManager = ThemePreferenceManager<LocalStorage, DocumentSurface>;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Document("no document available".to_string()))
}

#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(describe(e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(describe(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(describe(e)))
    }
}

/// `<html>` attribute plus `<body>` class list of the live document.
#[derive(Clone, Debug)]
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn from_window() -> Result<Self, ThemeError> {
        Ok(Self {
            document: document()?,
        })
    }

    fn body(&self) -> Result<web_sys::HtmlElement, ThemeError> {
        self.document
            .body()
            .ok_or_else(|| ThemeError::Document("document has no body".to_string()))
    }
}

impl PresentationSurface for DocumentSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Document("document has no root element".to_string()))?;
        root.set_attribute(name, value)
            .map_err(|e| ThemeError::Document(describe(e)))
    }

    fn remove_content_classes(&self, classes: &[&str]) -> Result<(), ThemeError> {
        let class_list = self.body()?.class_list();
        for class in classes {
            class_list
                .remove_1(class)
                .map_err(|e| ThemeError::Document(describe(e)))?;
        }
        Ok(())
    }

    fn add_content_class(&self, class: &str) -> Result<(), ThemeError> {
        self.body()?
            .class_list()
            .add_1(class)
            .map_err(|e| ThemeError::Document(describe(e)))
    }
}

impl ThemePreferenceManager<LocalStorage, DocumentSurface> {
    pub fn browser() -> Result<Self, ThemeError> {
        Ok(Self::new(
            LocalStorage::from_window()?,
            DocumentSurface::from_window()?,
        ))
    }
}

/// Applies the stored theme as soon as the document can take it: right away
/// if parsing is done, otherwise once on `DOMContentLoaded`.
pub fn init_when_ready(manager: BrowserThemeManager) -> Result<(), ThemeError> {
    let document = document()?;

    if !is_loading(&document.ready_state()) {
        return manager.init_theme();
    }

    let callback = Closure::once_into_js(move || {
        if let Err(e) = manager.init_theme() {
            log::error!("Failed to initialise theme: {}", e);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref::<js_sys::Function>(),
            &options,
        )
        .map_err(|e| ThemeError::Document(describe(e)))?;

    log::debug!("Theme initialisation deferred until DOMContentLoaded");
    Ok(())
}
