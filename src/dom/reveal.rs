//! Reveal-on-scroll via `IntersectionObserver`.
//!
//! The observer callback runs on the browser's rendering schedule, not in
//! step with scroll events. Revealed elements are unobserved immediately.

use super::{query_all, set_class};
use crate::config::RevealConfig;
use crate::error::PageError;
use crate::state::RevealSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn install(doc: &Document, config: &RevealConfig) -> Result<(), PageError> {
    let elements = Rc::new(query_all(doc, &config.selector)?);
    let pending = Rc::new(RefCell::new(RevealSet::register(elements.len())));

    let callback = {
        let elements = Rc::clone(&elements);
        let visible_class = config.visible_class.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let mut pending = pending.borrow_mut();
                    if pending.observe(index, entry.is_intersecting()) {
                        set_class(&target, &visible_class, true);
                        observer.unobserve(&target);
                        tracing::debug!(index, revealed = pending.revealed_count(), "Element revealed");
                    }
                    if pending.is_done() {
                        observer.disconnect();
                        tracing::debug!("All elements revealed, observer disconnected");
                        return;
                    }
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin);
    init.set_threshold(&JsValue::from_f64(config.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in elements.iter() {
        observer.observe(el);
    }

    tracing::debug!(elements = elements.len(), "Reveal controller installed");
    Ok(())
}
