//! Light/dark theme preference and its persistence seam.
//!
//! The preference is read once at startup and written on every apply. The
//! store is injected so the browser build can back it with `localStorage`
//! while tests and native hosts use [`MemoryThemeStore`].

use std::collections::HashMap;
use std::fmt;

use crate::config::{ThemeAppearance, ThemeConfig};
use crate::error::SidebarResult;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Strict parse of a stored value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// How the theme control looks while `self` is active. It always
    /// describes the action a click will perform.
    #[must_use]
    pub fn control_appearance(self, config: &ThemeConfig) -> &ThemeAppearance {
        match self {
            Self::Light => &config.light,
            Self::Dark => &config.dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    /// Stored value for `key`, or `None` if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SidebarError::PersistenceUnavailable`] when the
    /// backend cannot be read.
    fn get(&self, key: &str) -> SidebarResult<Option<String>>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SidebarError::PersistenceUnavailable`] when the
    /// backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> SidebarResult<()>;
}

/// In-process store. Lives as long as the controller does.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    values: HashMap<String, String>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }

    /// Peek at a stored value without going through the trait.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> SidebarResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SidebarResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
