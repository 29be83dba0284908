//! Error taxonomy for the sidebar.
//!
//! None of these reach the user. The controller logs them and disables the
//! affected feature; only configuration errors surface to the host, and the
//! browser entry point falls back to defaults even then.

use crate::ui::Role;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Every way a sidebar operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// An element the feature depends on is not in the document.
    #[error("no element found for role {0}")]
    MissingElement(Role),
    /// Navigation was requested to a submenu that does not exist.
    #[error("submenu '{0}' is not registered")]
    UnregisteredSubmenu(String),
    /// The persistence backend could not be read or written.
    #[error("theme storage unavailable: {0}")]
    PersistenceUnavailable(String),
    /// Configuration JSON could not be parsed.
    #[error("failed to parse sidebar config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// Configuration parsed but holds an unusable value.
    #[error("invalid sidebar config: {0}")]
    InvalidConfig(String),
    /// A DOM call returned an exception.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Result alias for fallible sidebar operations.
pub type SidebarResult<T> = Result<T, SidebarError>;
