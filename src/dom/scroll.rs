//! Smooth scrolling for in-page anchors and `.cta-scroll` controls.

use super::{document, listen, query, query_all, window};
use crate::config::ScrollConfig;
use crate::error::PageError;
use crate::state::scroll::should_intercept;
use crate::state::{AnchorRef, ScrollAction};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

fn smooth_scroll(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn scroll_to_anchor(anchor: &AnchorRef, header_selector: &str) -> Result<ScrollAction, PageError> {
    let window = window()?;
    let doc = document()?;
    let scroll_y = window.scroll_y()?;
    let header_height = query(&doc, header_selector)?
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0);

    let mut lookup_error = None;
    let action = ScrollAction::plan(
        anchor,
        |selector| match query(&doc, selector) {
            Ok(found) => found.map(|el| el.get_bounding_client_rect().top()),
            Err(err) => {
                lookup_error = Some(err);
                None
            }
        },
        scroll_y,
        header_height,
    );
    if let Some(err) = lookup_error {
        return Err(err);
    }

    match action {
        ScrollAction::Top => smooth_scroll(&window, 0.0),
        ScrollAction::To(top) => smooth_scroll(&window, top),
        ScrollAction::Stay => {}
    }
    Ok(action)
}

/// `nav_link` identifies mobile menu links, which are left to the menu
/// controller. `header` is measured at click time for the offset.
pub fn install(
    doc: &Document,
    config: &ScrollConfig,
    nav_link: &str,
    header: &str,
) -> Result<(), PageError> {
    let links = query_all(doc, &config.links)?;

    for link in &links {
        let is_mobile = link.matches(nav_link).unwrap_or(false);
        let control = link.clone();
        let header = header.to_string();
        listen(link, "click", move |event| {
            let anchor = AnchorRef::parse(control.get_attribute("href").as_deref());
            if !should_intercept(is_mobile, &anchor) {
                return;
            }
            event.prevent_default();
            match scroll_to_anchor(&anchor, &header) {
                Ok(ScrollAction::Stay) => {
                    tracing::debug!(?anchor, "Scroll target not found");
                }
                Ok(action) => tracing::debug!(?anchor, ?action, "Smooth scroll"),
                Err(err) => tracing::warn!(%err, ?anchor, "Smooth scroll failed"),
            }
        })?;
    }

    tracing::debug!(links = links.len(), "Smooth-scroll controller installed");
    Ok(())
}
