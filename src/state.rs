//! Panel and navigation state.
//!
//! Pure data; the controller owns one of each and drives the transitions.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Whether the panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Which navigation view is visible inside the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Main,
    /// A submenu, keyed by its id.
    Submenu(String),
}

impl NavState {
    #[must_use]
    pub fn is_main(&self) -> bool {
        matches!(self, Self::Main)
    }

    /// Id of the active submenu, if any.
    #[must_use]
    pub fn submenu(&self) -> Option<&str> {
        match self {
            Self::Main => None,
            Self::Submenu(id) => Some(id),
        }
    }
}
