//! Theme preference controller.
//!
//! Keeps the marker class on the root element in step with the persisted
//! preference. The marker is the source of truth after a toggle: the value
//! written to storage is derived from the class list, never from a cached
//! flag, so the two cannot drift apart.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged and ignored. A failed read renders the light
//! theme; a failed write still flips the page but the choice is lost on
//! reload.

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::page::{EventSource, ThemeTarget};
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, T> {
    store: S,
    root: T,
    storage_key: String,
    marker_class: String,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    #[must_use]
    pub fn new(store: S, root: T, config: &ThemeConfig) -> Self {
        Self {
            store,
            root,
            storage_key: config.storage_key.clone(),
            marker_class: config.marker_class.clone(),
        }
    }

    /// Persisted preference, falling back to light when absent or unreadable.
    #[must_use]
    pub fn stored_theme(&self) -> Theme {
        match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => Theme::from_stored(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme: reading '{}' failed, using light: {e}", self.storage_key);
                Theme::default()
            }
        }
    }

    /// Apply the persisted preference to the root element.
    ///
    /// Only ever adds the marker; a light preference leaves the element as
    /// rendered. Running it twice yields the same state.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored_theme();
        if theme.is_dark() && !self.root.has_class(&self.marker_class) {
            self.root.add_class(&self.marker_class);
        }
        log::debug!("theme: initialized to {theme}");
        theme
    }

    /// Flip the marker class and persist the resulting theme.
    pub fn toggle(&self) -> Theme {
        let theme = Theme::from_marker(self.root.toggle_class(&self.marker_class));
        if let Err(e) = self.store.set(&self.storage_key, theme.as_str()) {
            log::warn!("theme: persisting {theme} failed: {e}");
        }
        log::debug!("theme: toggled to {theme}");
        theme
    }

    /// Theme currently shown, read from the marker class.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_marker(self.root.has_class(&self.marker_class))
    }

    pub fn root(&self) -> &T {
        &self.root
    }
}

/// Wire the controller into `page`.
///
/// Once the page is ready the preference is applied to the element with id
/// `config.root_id`, and clicks on `config.toggle_id` (when present) toggle
/// it. A missing root element disables the controller with a warning; a
/// missing toggle control only disables toggling.
pub fn install<P, S>(page: Rc<P>, store: S, config: ThemeConfig)
where
    P: EventSource + 'static,
    S: PreferenceStore + 'static,
{
    let page_for_ready = Rc::clone(&page);
    page.on_ready(Box::new(move || {
        let page = page_for_ready;
        let Some(root) = page.element_by_id(&config.root_id) else {
            log::warn!("theme: no element with id '{}', controller disabled", config.root_id);
            return;
        };

        let controller = Rc::new(ThemeController::new(store, root, &config));
        controller.initialize();

        let Some(toggle) = page.element_by_id(&config.toggle_id) else {
            log::debug!("theme: no element with id '{}', toggle unavailable", config.toggle_id);
            return;
        };
        page.on_click(
            &toggle,
            Box::new(move || {
                controller.toggle();
            }),
        );
    }));
}
