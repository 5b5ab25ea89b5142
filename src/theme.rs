//! The two-valued theme preference.

use std::fmt;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted value. Only `"dark"` selects dark mode; anything
    /// else, including unknown strings, reads as light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// Theme implied by the presence of the marker class.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
