//! Browser binding layer.
//!
//! Each submodule looks up its elements, registers listeners, and applies
//! state from [`crate::state`] back to the DOM. Closures are leaked with
//! `forget()`: every listener lives as long as the page.

pub mod header;
pub mod inquiry;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod tabs;

use crate::config::{timer_delay, PageConfig, CONFIG_ELEMENT_ID};
use crate::controller::document_is_loading;
use crate::error::PageError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoBrowserContext("window"))
}

pub fn document() -> Result<Document, PageError> {
    window()?
        .document()
        .ok_or(PageError::NoBrowserContext("document"))
}

/// `querySelector`, separating "nothing matched" from "selector rejected".
pub fn query(doc: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    doc.query_selector(selector)
        .map_err(|_| PageError::InvalidSelector {
            selector: selector.to_string(),
        })
}

pub fn require(doc: &Document, selector: &str) -> Result<Element, PageError> {
    query(doc, selector)?.ok_or_else(|| PageError::missing(selector))
}

pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|_| PageError::InvalidSelector {
            selector: selector.to_string(),
        })?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        tracing::warn!(class, error = ?err, "classList update failed");
    }
}

/// Register `handler` for `event` on `target` for the life of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Resolve after `ms` milliseconds on the JS timer queue.
pub async fn sleep(ms: u32) -> Result<(), PageError> {
    let timeout = timer_delay(ms)?;
    let window = window()?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout);
    });
    scheduled?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// Run `f` once the document structure is parsed.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<(), PageError> {
    let doc = document()?;
    if !document_is_loading(&doc.ready_state()) {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Read the optional inline JSON config block; fall back to defaults.
pub fn load_config(doc: &Document) -> PageConfig {
    let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    match PageConfig::from_json(&text) {
        Ok(config) => {
            tracing::debug!(lookup = ?config.lookup, "Loaded inline page config");
            config
        }
        Err(err) => {
            tracing::error!(%err, "Ignoring malformed page config, using defaults");
            PageConfig::default()
        }
    }
}
