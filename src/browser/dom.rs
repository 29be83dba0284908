//! [`UiBinding`] over the live DOM.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, Window};

use super::{Relay, describe_js};
use crate::config::Selectors;
use crate::ui::{Listener, Propagation, Role, Target, UiBinding, UiEvent};

pub type DomEvent = UiEvent<Element>;

pub struct DomBinding {
    window: Window,
    document: Document,
    selectors: Selectors,
    dispatch: Relay<DomEvent, Propagation>,
}

impl DomBinding {
    #[must_use]
    pub fn new(window: Window, document: Document, selectors: Selectors, dispatch: Relay<DomEvent, Propagation>) -> Self {
        Self { window, document, selectors, dispatch }
    }
}

/// Translate a raw DOM event for `listener` into a controller event.
fn to_ui_event(listener: Listener, source: Option<&Element>, event: &Event) -> Option<DomEvent> {
    let ui_event = match listener {
        Listener::ToggleClick => UiEvent::ToggleClicked,
        Listener::OverlayClick => UiEvent::OverlayClicked,
        Listener::PanelClick => UiEvent::PanelClicked,
        Listener::SubmenuTriggerClick => UiEvent::SubmenuTriggerClicked(source?.clone()),
        Listener::SubmenuBackClick => UiEvent::SubmenuBackClicked,
        Listener::NavItemClick => UiEvent::NavItemClicked,
        Listener::ThemeToggleClick => UiEvent::ThemeToggleClicked,
        Listener::KeyDown => UiEvent::KeyDown(event.dyn_ref::<KeyboardEvent>()?.key()),
    };
    Some(ui_event)
}

impl UiBinding for DomBinding {
    type Element = Element;

    fn find(&self, role: Role) -> Option<Element> {
        let selector = self.selectors.for_role(role);
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("sidebar: bad selector '{selector}' for {role}: {}", describe_js(&err));
                None
            }
        }
    }

    fn find_all(&self, role: Role) -> Vec<Element> {
        let selector = self.selectors.for_role(role);
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("sidebar: bad selector '{selector}' for {role}: {}", describe_js(&err));
                return Vec::new();
            }
        };
        let mut elements = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(node) = list.item(index)
                && let Ok(element) = node.dyn_into::<Element>()
            {
                elements.push(element);
            }
        }
        elements
    }

    fn find_submenu(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(&self.selectors.submenu_element_id(id))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_class(&mut self, element: &Element, class: &str, enabled: bool) {
        let class_list = element.class_list();
        let result = if enabled { class_list.add_1(class) } else { class_list.remove_1(class) };
        if let Err(err) = result {
            log::warn!("sidebar: class '{class}' not updated: {}", describe_js(&err));
        }
    }

    fn set_class_name(&mut self, element: &Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_document_attribute(&mut self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            log::debug!("sidebar: document has no root element");
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            log::warn!("sidebar: {name} not set: {}", describe_js(&err));
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(drop)
        };
        if let Err(err) = result {
            log::warn!("sidebar: scroll lock not updated: {}", describe_js(&err));
        }
    }

    /// Unknown width counts as wide, so navigation never closes the panel
    /// by accident.
    fn viewport_width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
            Err(err) => {
                log::debug!("sidebar: innerWidth unavailable: {}", describe_js(&err));
                f64::INFINITY
            }
        }
    }

    fn location_path(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                log::debug!("sidebar: pathname unavailable: {}", describe_js(&err));
                String::new()
            }
        }
    }

    fn subscribe(&mut self, target: Target<'_, Element>, listener: Listener) {
        let (event_target, source): (EventTarget, Option<Element>) = match target {
            Target::Element(element) => (element.clone().into(), Some(element.clone())),
            Target::Document => (self.document.clone().into(), None),
        };
        let dispatch = self.dispatch.clone();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            let Some(ui_event) = to_ui_event(listener, source.as_ref(), &event) else {
                return;
            };
            let propagation = dispatch.call(ui_event);
            if propagation.prevent_default {
                event.prevent_default();
            }
            if propagation.stop_propagation {
                event.stop_propagation();
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(err) =
            event_target.add_event_listener_with_callback(listener.event_name(), handler.as_ref().unchecked_ref())
        {
            log::warn!("sidebar: {} listener not attached: {}", listener.event_name(), describe_js(&err));
        }
        // Listeners live as long as the page.
        handler.forget();
    }
}
