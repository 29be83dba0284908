//! The seam between the controller and the page.
//!
//! DESIGN
//! ======
//! The controller never touches the DOM directly. It asks a [`UiBinding`] for
//! elements by [`Role`], flips classes on them, and registers [`Listener`]s.
//! The binding turns raw DOM events back into [`UiEvent`]s and applies the
//! [`Propagation`] the controller returns. The browser build supplies a
//! `web-sys` binding; tests supply an in-memory one.

use std::fmt;

/// Element roles the controller depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Button that opens and closes the panel.
    Toggle,
    /// The sliding panel container.
    Panel,
    /// Dimmed backdrop behind the panel.
    Overlay,
    /// Default navigation view.
    MainMenu,
    /// Control that opens a submenu; carries the submenu id attribute.
    SubmenuTrigger,
    /// Control inside a submenu that returns to the main view.
    SubmenuBack,
    /// Navigable link or footer action.
    NavItem,
    /// Control that flips the theme.
    ThemeToggle,
    /// Icon describing the pending theme action.
    ThemeIcon,
    /// Label describing the pending theme action.
    ThemeLabel,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Panel => "panel",
            Self::Overlay => "overlay",
            Self::MainMenu => "main-menu",
            Self::SubmenuTrigger => "submenu-trigger",
            Self::SubmenuBack => "submenu-back",
            Self::NavItem => "nav-item",
            Self::ThemeToggle => "theme-toggle",
            Self::ThemeIcon => "theme-icon",
            Self::ThemeLabel => "theme-label",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which controller handler a subscription feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    ToggleClick,
    OverlayClick,
    PanelClick,
    SubmenuTriggerClick,
    SubmenuBackClick,
    NavItemClick,
    ThemeToggleClick,
    /// Document-level key presses.
    KeyDown,
}

impl Listener {
    /// DOM event name to subscribe to.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            _ => "click",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug)]
pub enum Target<'a, E> {
    Element(&'a E),
    Document,
}

/// A user action delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<E> {
    ToggleClicked,
    OverlayClicked,
    PanelClicked,
    /// Carries the trigger so its submenu id is read at click time.
    SubmenuTriggerClicked(E),
    SubmenuBackClicked,
    NavItemClicked,
    ThemeToggleClicked,
    /// Key name as reported by the browser (e.g. `"Escape"`).
    KeyDown(String),
}

/// What the binding should do with the originating DOM event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Propagation {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Propagation {
    /// Let the event continue untouched.
    pub const PASS: Self = Self { prevent_default: false, stop_propagation: false };
    /// Keep the event from reaching outer click handlers.
    pub const CONTAIN: Self = Self { prevent_default: false, stop_propagation: true };
    /// Swallow the event entirely.
    pub const CONSUME: Self = Self { prevent_default: true, stop_propagation: true };
}

/// Capabilities the controller needs from the page.
///
/// Lookups return `None` / empty when the element is absent; the controller
/// treats that as "feature disabled". Mutations are best-effort.
pub trait UiBinding {
    type Element: Clone;

    /// First element for a single-cardinality role.
    fn find(&self, role: Role) -> Option<Self::Element>;

    /// All elements for a repeated role, in document order.
    fn find_all(&self, role: Role) -> Vec<Self::Element>;

    /// The submenu view registered under `id`.
    fn find_submenu(&self, id: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Add (`enabled`) or remove a single class.
    fn set_class(&mut self, element: &Self::Element, class: &str, enabled: bool);

    /// Replace the element's whole class attribute.
    fn set_class_name(&mut self, element: &Self::Element, class_name: &str);

    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Set an attribute on the document root element.
    fn set_document_attribute(&mut self, name: &str, value: &str);

    /// Suspend or restore page background scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Path component of the current document location.
    fn location_path(&self) -> String;

    /// Route `listener`'s DOM event on `target` back to the controller.
    fn subscribe(&mut self, target: Target<'_, Self::Element>, listener: Listener);
}
