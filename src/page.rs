//! Host page abstractions: the element carrying the marker class and the
//! event source that signals readiness and clicks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation lives in `browser`. Handlers are plain boxed
//! closures; the host runs each one to completion before dispatching the
//! next, so implementations never need to guard against re-entrancy.

/// An element whose class list the controller reads and mutates.
pub trait ThemeTarget {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    /// Flip `class` and report whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
}

/// Element lookup plus handler registration for a single page.
pub trait EventSource {
    type Element: ThemeTarget + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Run `handler` once the page structure has finished loading.
    fn on_ready(&self, handler: Box<dyn FnOnce()>);

    /// Run `handler` on every click of `element`.
    fn on_click(&self, element: &Self::Element, handler: Box<dyn FnMut()>);
}
