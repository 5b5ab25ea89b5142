//! # theme-toggle
//!
//! Light/dark theme preference controller for server-rendered pages.
//!
//! On page load the controller reads the persisted preference and applies the
//! `dark` marker class to the root display element. Clicking the optional
//! toggle control flips the class and writes the new preference back.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage and page access sit behind the [`store::PreferenceStore`] and
//! [`page::EventSource`] traits so the controller runs natively in tests. The
//! `hydrate` feature adds the `web-sys` bindings and the wasm entry points.

pub mod config;
pub mod controller;
pub mod page;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::{ConfigError, ThemeConfig};
pub use controller::{ThemeController, install};
pub use page::{EventSource, ThemeTarget};
pub use store::{MemoryStore, PreferenceStore, StorageError};
pub use theme::Theme;
