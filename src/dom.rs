//! Thin wrappers over the `web-sys` calls the page handlers share.
//!
//! Everything here returns [`DomResult`] so handlers can use `?` and log once
//! at the edge instead of unwrapping browser calls.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::{DomError, DomResult};

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn by_id(id: &str) -> DomResult<Option<Element>> {
    Ok(document()?.get_element_by_id(id))
}

pub fn query(selector: &str) -> DomResult<Option<Element>> {
    document()?
        .query_selector(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

pub fn query_all(selector: &str) -> DomResult<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_in(root: &Element, selector: &str) -> DomResult<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn as_html(element: &Element) -> DomResult<HtmlElement> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongType { expected: "HtmlElement" })
}

pub fn style_of(element: &Element, property: &str) -> DomResult<String> {
    as_html(element)?
        .style()
        .get_property_value(property)
        .map_err(|e| DomError::js("getPropertyValue", e))
}

pub fn set_style(element: &Element, property: &str, value: &str) -> DomResult<()> {
    as_html(element)?
        .style()
        .set_property(property, value)
        .map_err(|e| DomError::js("setProperty", e))
}

/// Equivalent of assigning `''` to an inline style property.
pub fn clear_style(element: &Element, property: &str) -> DomResult<()> {
    as_html(element)?
        .style()
        .remove_property(property)
        .map(|_| ())
        .map_err(|e| DomError::js("removeProperty", e))
}

pub fn set_class(element: &Element, class: &str, on: bool) -> DomResult<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| DomError::js("classList.toggle", e))
}

/// An event listener that stays registered until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> DomResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| DomError::js("addEventListener", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` bound to a Rust callback; disconnects when dropped.
pub struct Watcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Watcher {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> DomResult<Self>
    where
        F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                on_entry(entry.unchecked_into::<IntersectionObserverEntry>(), &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
