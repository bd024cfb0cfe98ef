//! Self-link anchors on headings.

use crate::dom::html_elements;
use crate::error::WayfinderError;
use wayfinder_core::anchors::{ANCHOR_CLASS, ANCHOR_LABEL};
use wayfinder_core::{HeadingSource, plan_anchors};
use web_sys::Document;

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";

/// Give every heading an id and append an anchor link pointing at it.
///
/// Returns the number of headings processed.
pub fn install(document: &Document) -> Result<usize, WayfinderError> {
    let list = document
        .query_selector_all(HEADINGS)
        .map_err(|e| WayfinderError::dom("querySelectorAll", e))?;
    let headings = html_elements(&list);

    let sources: Vec<HeadingSource> = headings
        .iter()
        .map(|h| HeadingSource {
            id: Some(h.id()),
            text: h.text_content().unwrap_or_default(),
        })
        .collect();

    for (heading, plan) in headings.iter().zip(plan_anchors(&sources)) {
        if plan.assign_id {
            heading.set_id(plan.id.as_str());
        }
        let anchor = document
            .create_element("a")
            .map_err(|e| WayfinderError::dom("createElement", e))?;
        anchor
            .set_attribute("href", &plan.href)
            .map_err(|e| WayfinderError::dom("setAttribute", e))?;
        anchor.set_class_name(ANCHOR_CLASS);
        anchor.set_text_content(Some(ANCHOR_LABEL));
        anchor
            .set_attribute("title", &plan.title)
            .map_err(|e| WayfinderError::dom("setAttribute", e))?;
        heading
            .append_child(&anchor)
            .map_err(|e| WayfinderError::dom("appendChild", e))?;
    }
    Ok(headings.len())
}
