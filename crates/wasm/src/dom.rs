//! `web-sys` implementations of the core page traits.

use crate::error::{WayfinderError, host_result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wayfinder_core::{HostError, PageDocument, PageElement, Viewport};
use web_sys::{Document, EventTarget, HtmlElement, Window};

/// A page element backed by a live `HtmlElement`.
#[derive(Debug, Clone)]
pub struct WebElement(HtmlElement);

impl WebElement {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    pub fn inner(&self) -> &HtmlElement {
        &self.0
    }
}

impl PageElement for WebElement {
    fn add_class(&self, class: &str) -> Result<(), HostError> {
        host_result("classList.add", self.0.class_list().add_1(class))
    }

    fn remove_class(&self, class: &str) -> Result<(), HostError> {
        host_result("classList.remove", self.0.class_list().remove_1(class))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_display(&self, value: Option<&str>) -> Result<(), HostError> {
        let style = self.0.style();
        match value {
            Some(value) => host_result("style.setProperty", style.set_property("display", value)),
            None => {
                host_result("style.removeProperty", style.remove_property("display")).map(|_| ())
            }
        }
    }

    fn display(&self) -> Option<String> {
        self.0
            .style()
            .get_property_value("display")
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.0.offset_top())
    }
}

/// Selector queries against the live document.
///
/// Invalid selectors and non-HTML matches (e.g. SVG) are treated as no match.
#[derive(Debug, Clone)]
pub struct WebDocument(Document);

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    pub fn inner(&self) -> &Document {
        &self.0
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn query(&self, selector: &str) -> Option<WebElement> {
        match self.0.query_selector(selector) {
            Ok(found) => found
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                .map(WebElement::new),
            Err(_) => {
                log::warn!("Invalid selector '{}'", selector);
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        match self.0.query_selector_all(selector) {
            Ok(list) => html_elements(&list).into_iter().map(WebElement::new).collect(),
            Err(_) => {
                log::warn!("Invalid selector '{}'", selector);
                Vec::new()
            }
        }
    }
}

/// The HTML elements of a `NodeList`, in order.
pub(crate) fn html_elements(list: &web_sys::NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Scroll offset and width of the browser window.
#[derive(Debug, Clone)]
pub struct WindowViewport(Window);

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.0
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }
}

pub(crate) fn window() -> Result<Window, WayfinderError> {
    web_sys::window().ok_or_else(|| WayfinderError::environment("no global window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, WayfinderError> {
    window
        .document()
        .ok_or_else(|| WayfinderError::environment("window has no document"))
}

/// Add a listener that lives as long as the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), WayfinderError> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    host_result(
        "addEventListener",
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
    )?;
    closure.forget();
    Ok(())
}
