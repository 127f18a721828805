//! Header shrink on scroll. Runs at native scroll-event cadence.

use super::{listen, require, set_class, window};
use crate::config::HeaderConfig;
use crate::error::PageError;
use crate::state::HeaderMode;
use std::cell::Cell;
use web_sys::Document;

pub fn install(doc: &Document, config: &HeaderConfig) -> Result<(), PageError> {
    let header = require(doc, &config.selector)?;
    let window = window()?;

    let threshold = config.shrink_threshold;
    let class = config.scrolled_class.clone();
    let last = Cell::new(None);
    let update = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let mode = HeaderMode::from_scroll(scroll_y, threshold);
            set_class(&header, &class, mode.is_scrolled());
            if last.replace(Some(mode)) != Some(mode) {
                tracing::debug!(scroll_y, ?mode, "Header mode");
            }
        }
    };

    // Page may load already scrolled (restored position, deep link).
    update();
    listen(&window, "scroll", move |_| update())?;

    tracing::debug!(threshold, "Header controller installed");
    Ok(())
}
