//! Attaches the sidebar controller to browser events.

use crate::dom::{WebDocument, WebElement, WindowViewport, listen};
use crate::error::WayfinderError;
use crate::timer::WindowScheduler;
use log::debug;
use std::rc::Rc;
use wayfinder_core::{NavConfig, PageDocument, PageElement, SidebarController};
use web_sys::Window;

type WebSidebar = SidebarController<WebElement, WindowViewport, WindowScheduler>;

/// Set up the sidebar and subscribe it to scroll, resize and click events.
///
/// Returns `Ok(false)` when the page has no sidebar.
pub fn install(
    window: &Window,
    document: &WebDocument,
    config: NavConfig,
) -> Result<bool, WayfinderError> {
    let link_selector = config.link_selector.clone();
    let toggle_selector = config.toggle_selector.clone();
    let Some(controller) = SidebarController::attach(
        document,
        WindowViewport::new(window.clone()),
        WindowScheduler::new(window.clone()),
        config,
    ) else {
        return Ok(false);
    };
    let controller: Rc<WebSidebar> = Rc::new(controller);

    let on_scroll = Rc::clone(&controller);
    listen(window, "scroll", move || on_scroll.on_scroll())?;

    let on_resize = Rc::clone(&controller);
    listen(window, "resize", move || on_resize.on_resize())?;

    if let Some(toggle) = document.query(&toggle_selector) {
        let on_toggle = Rc::clone(&controller);
        listen(toggle.inner(), "click", move || on_toggle.on_toggle())?;
    }

    let links = document.query_all(&link_selector);
    for link in &links {
        let Some(href) = link.attribute("href") else {
            continue;
        };
        let on_click = Rc::clone(&controller);
        listen(link.inner(), "click", move || on_click.on_link_click(&href))?;
    }

    debug!("Sidebar listeners installed for {} links", links.len());
    Ok(true)
}
