//! Browser entry point: mounts a [`SidebarController`] on the live page.
//!
//! ARCHITECTURE
//! ============
//! The controller lives in `Rc<RefCell<_>>` held by a thread-local, so the
//! page keeps exactly one. DOM listeners and timer callbacks reach it through
//! [`Relay`]s that hold only a weak reference, wired after construction. A
//! handler that finds the controller already borrowed drops its event.

pub mod dom;
pub mod storage;
pub mod timer;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::{SidebarConfig, Selectors};
use crate::controller::SidebarController;
use crate::error::{SidebarError, SidebarResult};

use self::dom::DomBinding;
use self::storage::LocalStorageThemeStore;
use self::timer::BrowserScheduler;

/// Element whose text holds an optional JSON [`SidebarConfig`].
const CONFIG_ELEMENT_ID: &str = "sidebar-config";

pub type BrowserController = SidebarController<DomBinding, LocalStorageThemeStore, BrowserScheduler>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<RefCell<BrowserController>>>> = const { RefCell::new(None) };
}

type RelayFn<A, R> = Box<dyn Fn(A) -> R>;

/// Callback slot filled in once the receiver exists.
pub struct Relay<A, R> {
    target: Rc<RefCell<Option<RelayFn<A, R>>>>,
}

impl<A, R> Clone for Relay<A, R> {
    fn clone(&self) -> Self {
        Self { target: Rc::clone(&self.target) }
    }
}

impl<A, R> Default for Relay<A, R> {
    fn default() -> Self {
        Self { target: Rc::new(RefCell::new(None)) }
    }
}

impl<A, R: Default> Relay<A, R> {
    pub fn connect(&self, receiver: impl Fn(A) -> R + 'static) {
        *self.target.borrow_mut() = Some(Box::new(receiver));
    }

    /// Forward `arg`, or return `R::default()` if nothing is connected yet.
    pub fn call(&self, arg: A) -> R {
        match self.target.borrow().as_ref() {
            Some(receiver) => receiver(arg),
            None => {
                log::debug!("sidebar: relay called before connect");
                R::default()
            }
        }
    }
}

/// Render a thrown JS value for logs and errors.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Install the panic hook and console logger, then mount once the document
/// has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("sidebar: console logger unavailable: {err}")));
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(auto_mount);
        let on_ready: &js_sys::Function = on_ready.unchecked_ref();
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready) {
            log::warn!("sidebar: cannot wait for DOMContentLoaded: {}", describe_js(&err));
        }
    } else {
        auto_mount();
    }
}

/// Mount with an explicit JSON config, for pages that insert the sidebar
/// markup after load. Omitted config means defaults.
///
/// # Errors
///
/// Rejects invalid config, a missing window/document, or a second mount.
#[wasm_bindgen(js_name = mountSidebar)]
pub fn mount_sidebar(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(raw) => SidebarConfig::from_json(&raw),
        None => Ok(SidebarConfig::default()),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    mount(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn auto_mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = page_config(&document);
    if !page_has_sidebar(&document, &config.selectors) {
        // Left unmounted so `mountSidebar` can wire late markup; the saved
        // theme still applies to the document.
        log::debug!("sidebar: no sidebar markup on this page");
        if let Err(err) = restore_theme(config) {
            log::warn!("sidebar: {err}");
        }
        return;
    }
    if let Err(err) = mount(config) {
        log::warn!("sidebar: {err}");
    }
}

/// Inline config if present and valid, defaults otherwise.
fn page_config(document: &Document) -> SidebarConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SidebarConfig::default();
    };
    match SidebarConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("sidebar: {err}; using defaults");
            SidebarConfig::default()
        }
    }
}

fn page_has_sidebar(document: &Document, selectors: &Selectors) -> bool {
    [&selectors.panel, &selectors.theme_toggle]
        .into_iter()
        .any(|selector| matches!(document.query_selector(selector), Ok(Some(_))))
}

/// Apply the persisted theme with a throwaway controller that never
/// subscribes anything.
fn restore_theme(config: SidebarConfig) -> SidebarResult<()> {
    let window = web_sys::window().ok_or_else(|| SidebarError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| SidebarError::Dom("no document".into()))?;
    let ui = DomBinding::new(window.clone(), document, config.selectors.clone(), Relay::default());
    let store = LocalStorageThemeStore::new(&window);
    let scheduler = BrowserScheduler::new(window, Relay::default());
    SidebarController::new(config, ui, store, scheduler).restore_theme();
    Ok(())
}

fn mount(config: SidebarConfig) -> SidebarResult<()> {
    if MOUNTED.with(|slot| slot.borrow().is_some()) {
        return Err(SidebarError::Dom("sidebar already mounted".into()));
    }
    let window = web_sys::window().ok_or_else(|| SidebarError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| SidebarError::Dom("no document".into()))?;

    let dispatch = Relay::default();
    let fire = Relay::default();
    let ui = DomBinding::new(window.clone(), document, config.selectors.clone(), dispatch.clone());
    let store = LocalStorageThemeStore::new(&window);
    let scheduler = BrowserScheduler::new(window, fire.clone());
    let controller = Rc::new(RefCell::new(SidebarController::new(config, ui, store, scheduler)));

    let weak = Rc::downgrade(&controller);
    dispatch.connect(move |event| with_controller(&weak, |c| c.handle(event)).unwrap_or_default());
    let weak = Rc::downgrade(&controller);
    fire.connect(move |token| {
        with_controller(&weak, |c| c.on_timer(token));
    });

    controller.borrow_mut().mount();
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

fn with_controller<R>(
    weak: &Weak<RefCell<BrowserController>>,
    action: impl FnOnce(&mut BrowserController) -> R,
) -> Option<R> {
    let controller = weak.upgrade()?;
    let Ok(mut guard) = controller.try_borrow_mut() else {
        log::debug!("sidebar: controller busy, dropping event");
        return None;
    };
    Some(action(&mut guard))
}
