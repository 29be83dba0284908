//! Sidebar configuration.
//!
//! Every field has a default matching the stock markup, so hosts only spell
//! out what differs. The browser entry point reads the JSON form from an
//! inline `<script type="application/json">` block.

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACTIVE_CLASS, DARK_MODE_LABEL, HIDDEN_CLASS, LIGHT_MODE_LABEL, MOBILE_BREAKPOINT_PX, MOON_ICON_CLASS,
    NAV_RESET_DELAY_MS, SUN_ICON_CLASS, THEME_ATTRIBUTE, THEME_STORAGE_KEY,
};
use crate::error::{SidebarError, SidebarResult};
use crate::ui::Role;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// What happens to a pending reset-to-main when the panel reopens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Reopening cancels the pending reset.
    #[default]
    CancelOnOpen,
    /// Pending resets always fire, even if the user has reopened the panel
    /// and entered a submenu in the meantime.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Viewport width at or below which navigation closes the panel.
    pub breakpoint_px: f64,
    pub nav_reset_delay_ms: u32,
    pub reset_policy: ResetPolicy,
    pub classes: ClassNames,
    pub theme: ThemeConfig,
    pub selectors: Selectors,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            nav_reset_delay_ms: NAV_RESET_DELAY_MS,
            reset_policy: ResetPolicy::default(),
            classes: ClassNames::default(),
            theme: ThemeConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

impl SidebarConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::ConfigParse`] for malformed JSON and
    /// [`SidebarError::InvalidConfig`] for values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> SidebarResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> SidebarResult<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px < 0.0 {
            return Err(invalid(format!("breakpoint_px must be a finite non-negative width, got {}", self.breakpoint_px)));
        }
        require_token("classes.active", &self.classes.active)?;
        require_token("classes.hidden", &self.classes.hidden)?;
        require_non_empty("theme.storage_key", &self.theme.storage_key)?;
        require_non_empty("theme.attribute", &self.theme.attribute)?;
        require_non_empty("selectors.submenu_attribute", &self.selectors.submenu_attribute)?;
        Ok(())
    }
}

fn invalid(message: String) -> SidebarError {
    SidebarError::InvalidConfig(message)
}

fn require_non_empty(field: &str, value: &str) -> SidebarResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Class names go through `classList`, which rejects whitespace.
fn require_token(field: &str, value: &str) -> SidebarResult<()> {
    require_non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(format!("{field} must be a single class name, got '{value}'")));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Marks the open panel, its toggle and overlay, the visible submenu,
    /// and the link for the current page.
    pub active: String,
    /// Hides the main view while a submenu is showing.
    pub hidden: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self { active: ACTIVE_CLASS.to_owned(), hidden: HIDDEN_CLASS.to_owned() }
    }
}

/// Icon class and label shown on the theme control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAppearance {
    pub icon_class: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Attribute on the document element that carries the theme name.
    pub attribute: String,
    /// Control appearance while the light theme is active (offers dark).
    pub light: ThemeAppearance,
    /// Control appearance while the dark theme is active (offers light).
    pub dark: ThemeAppearance,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            light: ThemeAppearance { icon_class: MOON_ICON_CLASS.to_owned(), label: DARK_MODE_LABEL.to_owned() },
            dark: ThemeAppearance { icon_class: SUN_ICON_CLASS.to_owned(), label: LIGHT_MODE_LABEL.to_owned() },
        }
    }
}

/// CSS selectors locating each role in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub toggle: String,
    pub panel: String,
    pub overlay: String,
    pub main_menu: String,
    pub submenu_trigger: String,
    pub submenu_back: String,
    pub nav_item: String,
    pub theme_toggle: String,
    pub theme_icon: String,
    pub theme_label: String,
    /// Submenu views are looked up by element id `{prefix}{submenu id}`.
    pub submenu_id_prefix: String,
    /// Attribute on a trigger naming the submenu it opens.
    pub submenu_attribute: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            toggle: "#sidebar-toggle".to_owned(),
            panel: "#sidebar-menu".to_owned(),
            overlay: "#sidebar-overlay".to_owned(),
            main_menu: "#sidebar-menu-main".to_owned(),
            submenu_trigger: ".sidebar-submenu-trigger".to_owned(),
            submenu_back: ".sidebar-submenu-back".to_owned(),
            nav_item: ".sidebar-nav-item[href], .sidebar-footer-item".to_owned(),
            theme_toggle: "#theme-toggle".to_owned(),
            theme_icon: "#theme-icon".to_owned(),
            theme_label: "#theme-text".to_owned(),
            submenu_id_prefix: "sidebar-submenu-".to_owned(),
            submenu_attribute: "data-submenu".to_owned(),
        }
    }
}

impl Selectors {
    #[must_use]
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Toggle => &self.toggle,
            Role::Panel => &self.panel,
            Role::Overlay => &self.overlay,
            Role::MainMenu => &self.main_menu,
            Role::SubmenuTrigger => &self.submenu_trigger,
            Role::SubmenuBack => &self.submenu_back,
            Role::NavItem => &self.nav_item,
            Role::ThemeToggle => &self.theme_toggle,
            Role::ThemeIcon => &self.theme_icon,
            Role::ThemeLabel => &self.theme_label,
        }
    }

    /// Element id of the submenu view for `id`.
    #[must_use]
    pub fn submenu_element_id(&self, id: &str) -> String {
        format!("{}{id}", self.submenu_id_prefix)
    }
}
