//! `web-sys` bindings and the wasm entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is thin glue:
//! `localStorage` behind [`PreferenceStore`], `classList` behind
//! [`ThemeTarget`], and document events behind [`EventSource`].
//!
//! TRADE-OFFS
//! ==========
//! Click listeners are never removed and live as long as the page.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};

use crate::config::ThemeConfig;
use crate::controller::install;
use crate::page::{EventSource, ThemeTarget};
use crate::store::{PreferenceStore, StorageError};

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, resolved on every access so a store disabled
/// mid-session degrades instead of failing permanently.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // Throws when storage is disabled by policy; returns null when absent.
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error_text(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error_text(&e)))
    }
}

#[derive(Clone, Debug)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl ThemeTarget for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let class_list = self.0.class_list();
        class_list.toggle(class).unwrap_or_else(|_| class_list.contains(class))
    }
}

pub struct BrowserPage {
    document: web_sys::Document,
}

impl BrowserPage {
    /// Page for the current window's document, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl EventSource for BrowserPage {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.document.get_element_by_id(id).map(DomElement)
    }

    fn on_ready(&self, handler: Box<dyn FnOnce()>) {
        // DOMContentLoaded has already fired once parsing is done, and the
        // wasm module usually finishes loading after that.
        if self.document.ready_state() != "loading" {
            handler();
            return;
        }
        let cb = Closure::once_into_js(move || handler());
        let _ = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    }

    fn on_click(&self, element: &DomElement, mut handler: Box<dyn FnMut()>) {
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>);
        if element
            .0
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
}

fn start(config: ThemeConfig) {
    let Some(page) = BrowserPage::current() else {
        log::warn!("theme: no document, controller not installed");
        return;
    };
    install(Rc::new(page), LocalStorage, config);
}

fn init_runtime() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed by the host bundle.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Install the theme controller with the default element ids and key.
#[wasm_bindgen]
pub fn hydrate() {
    init_runtime();
    start(ThemeConfig::default());
}

/// Install the theme controller with a JSON configuration override.
///
/// Invalid JSON falls back to the defaults so the page still gets a theme.
#[wasm_bindgen]
pub fn hydrate_with_config(json: &str) {
    init_runtime();
    start(ThemeConfig::from_json_or_default(json));
}
