//! `localStorage`-backed [`ThemeStore`].
//!
//! Storage can be missing entirely (privacy modes, sandboxed iframes) or
//! throw on access. Both surface as [`SidebarError::PersistenceUnavailable`]
//! so the controller keeps working with the in-page theme.

use web_sys::{Storage, Window};

use super::describe_js;
use crate::error::{SidebarError, SidebarResult};
use crate::theme::ThemeStore;

pub struct LocalStorageThemeStore {
    storage: Option<Storage>,
}

impl LocalStorageThemeStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("sidebar: localStorage unavailable: {}", describe_js(&err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> SidebarResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| SidebarError::PersistenceUnavailable("localStorage is not available".into()))
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn get(&self, key: &str) -> SidebarResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| SidebarError::PersistenceUnavailable(describe_js(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> SidebarResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| SidebarError::PersistenceUnavailable(describe_js(&err)))
    }
}
