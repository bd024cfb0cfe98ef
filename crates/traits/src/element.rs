//! PageElement and Viewport traits for abstracting the host document.
//!
//! These traits allow the enhancement logic to read and mutate page elements
//! without being tied to a browser DOM binding.

use std::cell::{Cell, RefCell, RefMut};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::rc::Rc;
use thiserror::Error;

/// Error type for host document operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Failed to schedule task: {0}")]
    Scheduling(String),

    #[error("DOM operation '{operation}' failed: {message}")]
    Dom { operation: String, message: String },
}

impl HostError {
    pub fn dom(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::Dom {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// A handle to one element of the page.
///
/// Handles are cheap to clone and mutate the element they point at through a shared
/// reference, the way browser DOM handles do.
///
/// # Implementations
///
/// - `WebElement`: wraps a `web_sys::HtmlElement` (in `wayfinder-wasm`)
/// - `MemoryElement`: a detached in-memory element (always available)
pub trait PageElement: Debug {
    /// Add a class to the element's class list.
    fn add_class(&self, class: &str) -> Result<(), HostError>;

    /// Remove a class from the element's class list. Removing an absent class is not an error.
    fn remove_class(&self, class: &str) -> Result<(), HostError>;

    fn has_class(&self, class: &str) -> bool;

    /// Set the inline `display` style, or clear it with `None`.
    fn set_display(&self, value: Option<&str>) -> Result<(), HostError>;

    /// The inline `display` style, if one is set.
    fn display(&self) -> Option<String>;

    fn set_text(&self, text: &str);

    fn text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Vertical distance in pixels from the top of the document.
    fn offset_top(&self) -> f64;
}

/// Read access to the browsing viewport.
pub trait Viewport: Debug {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Current viewport width in pixels.
    fn inner_width(&self) -> f64;
}

/// Selector-based lookup of page elements.
pub trait PageDocument {
    type Element: PageElement + Clone;

    /// The first element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    display: Option<String>,
    text: String,
    attributes: HashMap<String, String>,
    offset_top: f64,
    writes: usize,
    rejecting: bool,
}

/// An in-memory page element.
///
/// Clones share the same underlying state, so a test can keep one handle while the
/// code under test mutates another. Every mutating call bumps a write counter.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// An element with an attribute set, e.g. a link with its `href`.
    pub fn with_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        let element = Self::new();
        element.set_attribute(name, value);
        element
    }

    /// A heading with an `id` at the given document offset.
    pub fn heading(id: impl Into<String>, offset_top: f64) -> Self {
        let element = Self::with_attribute("id", id);
        element.set_offset_top(offset_top);
        element
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
    }

    pub fn set_offset_top(&self, offset_top: f64) {
        self.state.borrow_mut().offset_top = offset_top;
    }

    /// Number of mutating calls made through any handle to this element.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    /// While set, class and display writes fail with [`HostError::Dom`] and leave
    /// the element unchanged.
    pub fn set_rejecting(&self, rejecting: bool) {
        self.state.borrow_mut().rejecting = rejecting;
    }

    fn write(&self, operation: &str) -> Result<RefMut<'_, ElementState>, HostError> {
        let mut state = self.state.borrow_mut();
        if state.rejecting {
            return Err(HostError::dom(operation, "write rejected"));
        }
        state.writes += 1;
        Ok(state)
    }
}

impl PageElement for MemoryElement {
    fn add_class(&self, class: &str) -> Result<(), HostError> {
        self.write("classList.add")?.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), HostError> {
        self.write("classList.remove")?.classes.remove(class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn set_display(&self, value: Option<&str>) -> Result<(), HostError> {
        self.write("style.display")?.display = value.map(str::to_string);
        Ok(())
    }

    fn display(&self) -> Option<String> {
        self.state.borrow().display.clone()
    }

    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.writes += 1;
        state.text = text.to_string();
    }

    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn offset_top(&self) -> f64 {
        self.state.borrow().offset_top
    }
}

/// An in-memory viewport whose scroll offset and width are set by hand.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewport {
    scroll_y: Rc<Cell<f64>>,
    inner_width: Rc<Cell<f64>>,
}

impl MemoryViewport {
    pub fn new(inner_width: f64) -> Self {
        let viewport = Self::default();
        viewport.set_inner_width(inner_width);
        viewport
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn set_inner_width(&self, inner_width: f64) {
        self.inner_width.set(inner_width);
    }
}

impl Viewport for MemoryViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn inner_width(&self) -> f64 {
        self.inner_width.get()
    }
}

/// An in-memory document that answers queries for exactly the selectors it was
/// given. No selector parsing is done: a query matches only an identical string.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the elements a selector resolves to, replacing any earlier registration.
    pub fn insert(&mut self, selector: impl Into<String>, elements: Vec<MemoryElement>) {
        self.elements.insert(selector.into(), elements);
    }

    pub fn with(mut self, selector: impl Into<String>, elements: Vec<MemoryElement>) -> Self {
        self.insert(selector, elements);
        self
    }
}

impl PageDocument for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        self.elements.get(selector)?.first().cloned()
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.elements.get(selector).cloned().unwrap_or_default()
    }
}
