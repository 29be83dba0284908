//! Shared defaults for the sidebar crate.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width (CSS pixels) at or below which navigation closes the panel.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Delay before the navigation view snaps back to the main menu after close.
/// Matches the panel's closing transition.
pub const NAV_RESET_DELAY_MS: u32 = 300;

// ── Classes ─────────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on the document element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const MOON_ICON_CLASS: &str = "fas fa-moon";
pub const SUN_ICON_CLASS: &str = "fas fa-sun";
pub const DARK_MODE_LABEL: &str = "Dark Mode";
pub const LIGHT_MODE_LABEL: &str = "Light Mode";

// ── Keys ────────────────────────────────────────────────────────

pub const ESCAPE_KEY: &str = "Escape";
