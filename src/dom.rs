use crate::error::{GalleryError, Result};
use std::any::type_name;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GalleryError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| unexpected::<T>(format!("#{id}")))
}

/// First descendant of `root` matching `selector`, if any.
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>> {
    match root.query_selector(selector)? {
        Some(found) => found
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| unexpected::<T>(selector.to_string())),
        None => Ok(None),
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn unexpected<T>(selector: String) -> GalleryError {
    let expected = type_name::<T>();
    GalleryError::UnexpectedElement {
        selector,
        expected: expected.rsplit("::").next().unwrap_or(expected),
    }
}

/// Style failures are ignored.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
