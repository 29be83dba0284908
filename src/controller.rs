//! The sidebar controller: panel lifecycle, submenu navigation, active-link
//! marking and the theme switch.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and browser-free. The controller owns a
//! [`UiBinding`] for the page, a [`ThemeStore`] for the saved preference and a
//! [`Scheduler`] for the deferred nav reset, so the whole interaction flow can
//! be driven from plain unit tests. The `browser` module wraps one of these in
//! `Rc<RefCell<_>>` and feeds it DOM events and timer callbacks.
//!
//! STATE
//! =====
//! `PanelState` × `NavState`, plus the list of pending reset tokens. Closing
//! the panel schedules a reset to `Main`; under [`ResetPolicy::CancelOnOpen`]
//! reopening cancels it, under [`ResetPolicy::Preserve`] it always fires.

use crate::config::{ResetPolicy, SidebarConfig};
use crate::consts::ESCAPE_KEY;
use crate::error::{SidebarError, SidebarResult};
use crate::links::is_active_link;
use crate::scheduler::{Scheduler, TimerToken};
use crate::state::{NavState, PanelState};
use crate::theme::{Theme, ThemeStore};
use crate::ui::{Listener, Propagation, Role, Target, UiBinding, UiEvent};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Single-cardinality elements, looked up once at construction.
struct Elements<E> {
    toggle: Option<E>,
    panel: Option<E>,
    overlay: Option<E>,
    main_menu: Option<E>,
    theme_toggle: Option<E>,
    theme_icon: Option<E>,
    theme_label: Option<E>,
}

impl<E> Elements<E> {
    fn lookup<U: UiBinding<Element = E>>(ui: &U) -> Self {
        Self {
            toggle: ui.find(Role::Toggle),
            panel: ui.find(Role::Panel),
            overlay: ui.find(Role::Overlay),
            main_menu: ui.find(Role::MainMenu),
            theme_toggle: ui.find(Role::ThemeToggle),
            theme_icon: ui.find(Role::ThemeIcon),
            theme_label: ui.find(Role::ThemeLabel),
        }
    }
}

pub struct SidebarController<U: UiBinding, S: ThemeStore, T: Scheduler> {
    config: SidebarConfig,
    ui: U,
    store: S,
    scheduler: T,
    elements: Elements<U::Element>,
    panel: PanelState,
    nav: NavState,
    theme: Theme,
    pending_resets: Vec<TimerToken>,
    next_token: u64,
    mounted: bool,
}

impl<U: UiBinding, S: ThemeStore, T: Scheduler> SidebarController<U, S, T> {
    /// Build a controller over an already-parsed page. Call [`Self::mount`]
    /// to wire listeners and apply the saved theme.
    pub fn new(config: SidebarConfig, ui: U, store: S, scheduler: T) -> Self {
        let elements = Elements::lookup(&ui);
        Self {
            config,
            ui,
            store,
            scheduler,
            elements,
            panel: PanelState::Closed,
            nav: NavState::Main,
            theme: Theme::Light,
            pending_resets: Vec::new(),
            next_token: 0,
            mounted: false,
        }
    }

    // --- Setup ---

    /// Subscribe every present control, mark the active link and apply the
    /// persisted theme. Missing elements only disable their own feature.
    pub fn mount(&mut self) {
        if self.mounted {
            log::debug!("sidebar: already mounted");
            return;
        }
        self.mounted = true;

        subscribe_one(&mut self.ui, self.elements.toggle.as_ref(), Role::Toggle, Listener::ToggleClick);
        subscribe_one(&mut self.ui, self.elements.overlay.as_ref(), Role::Overlay, Listener::OverlayClick);
        subscribe_one(&mut self.ui, self.elements.panel.as_ref(), Role::Panel, Listener::PanelClick);
        subscribe_one(
            &mut self.ui,
            self.elements.theme_toggle.as_ref(),
            Role::ThemeToggle,
            Listener::ThemeToggleClick,
        );

        let triggers = self.ui.find_all(Role::SubmenuTrigger);
        for trigger in &triggers {
            self.ui.subscribe(Target::Element(trigger), Listener::SubmenuTriggerClick);
        }
        let backs = self.ui.find_all(Role::SubmenuBack);
        for back in &backs {
            self.ui.subscribe(Target::Element(back), Listener::SubmenuBackClick);
        }
        let nav_items = self.ui.find_all(Role::NavItem);
        for item in &nav_items {
            self.ui.subscribe(Target::Element(item), Listener::NavItemClick);
        }
        self.ui.subscribe(Target::Document, Listener::KeyDown);

        let marked = self.mark_active_links(&nav_items);
        self.restore_theme();

        log::info!(
            "sidebar: mounted ({} submenu triggers, {} nav items, {marked} active, theme {})",
            triggers.len(),
            nav_items.len(),
            self.theme,
        );
    }

    fn mark_active_links(&mut self, nav_items: &[U::Element]) -> usize {
        let path = self.ui.location_path();
        let mut marked = 0;
        for item in nav_items {
            let Some(href) = self.ui.attribute(item, "href") else {
                continue;
            };
            if is_active_link(&href, &path) {
                self.ui.set_class(item, &self.config.classes.active, true);
                marked += 1;
            }
        }
        marked
    }

    // --- Event dispatch ---

    /// Route a user action and tell the binding what to do with the DOM event.
    pub fn handle(&mut self, event: UiEvent<U::Element>) -> Propagation {
        match event {
            UiEvent::ToggleClicked => {
                self.toggle();
                Propagation::CONTAIN
            }
            UiEvent::OverlayClicked => {
                self.close();
                Propagation::PASS
            }
            UiEvent::PanelClicked => Propagation::CONTAIN,
            UiEvent::SubmenuTriggerClicked(trigger) => {
                match self.ui.attribute(&trigger, &self.config.selectors.submenu_attribute) {
                    Some(id) => {
                        if let Err(err) = self.show(&id) {
                            log::debug!("sidebar: {err}");
                        }
                    }
                    None => log::debug!(
                        "sidebar: submenu trigger has no {} attribute",
                        self.config.selectors.submenu_attribute
                    ),
                }
                Propagation::CONSUME
            }
            UiEvent::SubmenuBackClicked => {
                self.back();
                Propagation::CONSUME
            }
            UiEvent::NavItemClicked => {
                if self.is_compact_viewport() {
                    self.close();
                }
                Propagation::PASS
            }
            UiEvent::KeyDown(key) => {
                if key == ESCAPE_KEY {
                    self.escape();
                }
                Propagation::PASS
            }
            UiEvent::ThemeToggleClicked => {
                self.toggle_theme();
                Propagation::CONSUME
            }
        }
    }

    /// A scheduled reset came due.
    pub fn on_timer(&mut self, token: TimerToken) {
        let Some(index) = self.pending_resets.iter().position(|t| *t == token) else {
            log::debug!("sidebar: ignoring stale timer {}", token.get());
            return;
        };
        self.pending_resets.remove(index);
        self.back();
    }

    // --- Panel lifecycle ---

    pub fn open(&mut self) {
        if self.panel.is_open() {
            return;
        }
        self.panel = PanelState::Open;
        if self.config.reset_policy == ResetPolicy::CancelOnOpen {
            self.cancel_pending_resets();
        }
        self.set_chrome_active(true);
        self.ui.set_scroll_locked(true);
    }

    /// Close the panel and schedule the snap back to the main view.
    pub fn close(&mut self) {
        if self.panel.is_open() {
            self.panel = PanelState::Closed;
            self.set_chrome_active(false);
            self.ui.set_scroll_locked(false);
            self.schedule_reset();
        } else if !self.nav.is_main() && self.pending_resets.is_empty() {
            self.schedule_reset();
        }
    }

    pub fn toggle(&mut self) {
        if self.panel.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn set_chrome_active(&mut self, active: bool) {
        let class = &self.config.classes.active;
        for element in [&self.elements.toggle, &self.elements.panel, &self.elements.overlay]
            .into_iter()
            .flatten()
        {
            self.ui.set_class(element, class, active);
        }
    }

    fn schedule_reset(&mut self) {
        if self.config.reset_policy == ResetPolicy::CancelOnOpen {
            self.cancel_pending_resets();
        }
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;
        self.scheduler.schedule(token, self.config.nav_reset_delay_ms);
        self.pending_resets.push(token);
    }

    fn cancel_pending_resets(&mut self) {
        for token in self.pending_resets.drain(..) {
            self.scheduler.cancel(token);
        }
    }

    fn is_compact_viewport(&self) -> bool {
        self.ui.viewport_width() <= self.config.breakpoint_px
    }

    // --- Navigation ---

    /// Switch from the main view to submenu `id`.
    ///
    /// Does nothing while another submenu is showing.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::UnregisteredSubmenu`] if the page has no
    /// submenu view for `id`; navigation state is left unchanged.
    pub fn show(&mut self, id: &str) -> SidebarResult<()> {
        if let Some(current) = self.nav.submenu() {
            log::debug!("sidebar: submenu {current} already open, ignoring {id}");
            return Ok(());
        }
        let Some(submenu) = self.ui.find_submenu(id) else {
            return Err(SidebarError::UnregisteredSubmenu(id.to_owned()));
        };
        if let Some(main) = &self.elements.main_menu {
            self.ui.set_class(main, &self.config.classes.hidden, true);
        }
        self.ui.set_class(&submenu, &self.config.classes.active, true);
        self.nav = NavState::Submenu(id.to_owned());
        Ok(())
    }

    /// Return to the main view. No-op when already there.
    pub fn back(&mut self) {
        let NavState::Submenu(id) = std::mem::take(&mut self.nav) else {
            return;
        };
        match self.ui.find_submenu(&id) {
            Some(submenu) => self.ui.set_class(&submenu, &self.config.classes.active, false),
            None => log::debug!("sidebar: submenu {id} vanished before back"),
        }
        if let Some(main) = &self.elements.main_menu {
            self.ui.set_class(main, &self.config.classes.hidden, false);
        }
    }

    /// Escape backs out of a submenu first, then closes. Ignored while closed.
    fn escape(&mut self) {
        if !self.panel.is_open() {
            return;
        }
        if self.nav.is_main() {
            self.close();
        } else {
            self.back();
        }
    }

    // --- Theme ---

    fn stored_theme(&self) -> Option<Theme> {
        let key = &self.config.theme.storage_key;
        match self.store.get(key) {
            Ok(Some(raw)) => {
                let theme = Theme::parse(&raw);
                if theme.is_none() {
                    log::debug!("sidebar: unrecognized stored theme '{raw}', using light");
                    return Some(Theme::Light);
                }
                theme
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("sidebar: {err}");
                None
            }
        }
    }

    /// Persisted preference, or light when nothing usable is stored.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.stored_theme().unwrap_or_default()
    }

    /// Apply `theme` to the document and the toggle control, then persist it.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let config = &self.config.theme;
        self.ui.set_document_attribute(&config.attribute, theme.as_str());

        let appearance = theme.control_appearance(config);
        if let Some(icon) = &self.elements.theme_icon {
            self.ui.set_class_name(icon, &appearance.icon_class);
        }
        if let Some(label) = &self.elements.theme_label {
            self.ui.set_text(label, &appearance.label);
        }

        if let Err(err) = self.store.set(&config.storage_key, theme.as_str()) {
            log::warn!("sidebar: theme not saved: {err}");
        }
    }

    /// Apply the persisted preference. Needs no sidebar markup, so pages
    /// without a sidebar still get their document theme.
    pub fn restore_theme(&mut self) {
        self.apply_theme(self.current_theme());
    }

    /// Flip to the other theme. Reads storage first so a preference saved by
    /// another tab wins; falls back to the applied theme if storage is unreadable.
    pub fn toggle_theme(&mut self) {
        let current = self.stored_theme().unwrap_or(self.theme);
        self.apply_theme(current.inverse());
    }

    // --- Queries ---

    #[must_use]
    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub fn nav_state(&self) -> &NavState {
        &self.nav
    }

    /// Theme most recently applied to the document.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn pending_reset_count(&self) -> usize {
        self.pending_resets.len()
    }

    #[must_use]
    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

fn subscribe_one<U: UiBinding>(ui: &mut U, element: Option<&U::Element>, role: Role, listener: Listener) {
    match element {
        Some(element) => ui.subscribe(Target::Element(element), listener),
        None => log::debug!("sidebar: {}", SidebarError::MissingElement(role)),
    }
}
