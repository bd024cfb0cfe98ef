//! Line numbers and toolbars for `pre code` blocks.

use crate::dom::{WebElement, html_elements, listen};
use crate::error::{WayfinderError, describe};
use crate::timer::WindowScheduler;
use log::warn;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use wayfinder_core::codeblock::{
    CONTENT_CLASS, HEADER_CLASS, LINE_NUMBER_CLASS, LINE_NUMBERS_CLASS, QueryStyle, WRAPPER_CLASS,
};
use wayfinder_core::{
    CodeBlockConfig, CodeBlockSource, CodeTool, CopyFeedback, ToolAction, ToolUrl,
    plan_code_block,
};
use web_sys::{Document, Element, HtmlElement, UrlSearchParams, Window};

/// Decorate every code block on the page. Returns the number of blocks decorated.
pub fn install(
    window: &Window,
    document: &Document,
    config: &CodeBlockConfig,
) -> Result<usize, WayfinderError> {
    let list = document
        .query_selector_all("pre code")
        .map_err(|e| WayfinderError::dom("querySelectorAll", e))?;
    let blocks = html_elements(&list);
    for code in &blocks {
        decorate(window, document, code, config)?;
    }
    Ok(blocks.len())
}

fn decorate(
    window: &Window,
    document: &Document,
    code: &HtmlElement,
    config: &CodeBlockConfig,
) -> Result<(), WayfinderError> {
    let Some(pre) = code.parent_element() else {
        return Ok(());
    };
    let wrapper_class = code
        .closest(&format!(".{}", WRAPPER_CLASS))
        .ok()
        .flatten()
        .map(|w| w.class_name());
    let source = CodeBlockSource {
        inner_html: code.inner_html(),
        text: code.text_content().unwrap_or_default(),
        code_class: code.class_name(),
        wrapper_class,
    };
    let plan = plan_code_block(&source, config);

    let line_numbers = create(document, "div", LINE_NUMBERS_CLASS)?;
    for n in 1..=plan.line_count {
        let number = create(document, "span", LINE_NUMBER_CLASS)?;
        number.set_text_content(Some(&n.to_string()));
        append(&line_numbers, &number)?;
    }

    let header = create(document, "div", HEADER_CLASS)?;
    for tool in &plan.tools {
        let element = tool_element(window, document, tool, &source.text, config)?;
        append(&header, &element)?;
    }

    let content = create(document, "div", CONTENT_CLASS)?;
    append(&content, &line_numbers)?;
    append(&content, code)?;

    pre.set_inner_html("");
    append(&pre, &header)?;
    append(&pre, &content)?;
    Ok(())
}

fn tool_element(
    window: &Window,
    document: &Document,
    tool: &CodeTool,
    code: &str,
    config: &CodeBlockConfig,
) -> Result<Element, WayfinderError> {
    let label = tool.kind.label();
    match &tool.action {
        ToolAction::Link(url) => {
            let link = create(document, "a", tool.kind.class_name())?;
            link.set_attribute("href", &render_url(url)?)
                .map_err(|e| WayfinderError::dom("setAttribute", e))?;
            link.set_attribute("target", "_blank")
                .map_err(|e| WayfinderError::dom("setAttribute", e))?;
            link.set_text_content(Some(label));
            Ok(link)
        }
        ToolAction::Copy => {
            let button = create(document, "button", tool.kind.class_name())?;
            button.set_text_content(Some(label));
            let Ok(html_button) = button.clone().dyn_into::<HtmlElement>() else {
                return Ok(button);
            };
            let feedback = Rc::new(CopyFeedback::new(
                WebElement::new(html_button),
                WindowScheduler::new(window.clone()),
                config.copy_feedback_delay(),
            ));
            let clipboard_window = window.clone();
            let text = code.to_string();
            listen(&button, "click", move || {
                let promise = clipboard_window.navigator().clipboard().write_text(&text);
                let feedback = Rc::clone(&feedback);
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => feedback.confirm(),
                        Err(e) => warn!("Clipboard write failed: {}", describe(&e)),
                    }
                });
            })?;
            Ok(button)
        }
    }
}

/// Percent-encode a tool URL with the browser's own encoders.
pub fn render_url(url: &ToolUrl) -> Result<String, WayfinderError> {
    match url.style {
        QueryStyle::Component => Ok(url
            .params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    key,
                    String::from(js_sys::encode_uri_component(value))
                )
            })
            .fold(url.prefix.to_string(), |mut acc, pair| {
                if !acc.ends_with(['?', '#']) {
                    acc.push('&');
                }
                acc.push_str(&pair);
                acc
            })),
        QueryStyle::Form => {
            let params =
                UrlSearchParams::new().map_err(|e| WayfinderError::dom("URLSearchParams", e))?;
            for (key, value) in &url.params {
                params.append(key, value);
            }
            Ok(format!("{}{}", url.prefix, String::from(params.to_string())))
        }
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, WayfinderError> {
    let element = document
        .create_element(tag)
        .map_err(|e| WayfinderError::dom("createElement", e))?;
    element.set_class_name(class);
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> Result<(), WayfinderError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| WayfinderError::dom("appendChild", e))
}
