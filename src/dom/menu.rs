//! Mobile menu: hamburger opens, close button and nav links close.

use super::{listen, query_all, require, set_class};
use crate::config::MenuConfig;
use crate::error::PageError;
use crate::state::MenuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement};

struct MenuView {
    toggle: Element,
    menu: Element,
    body: HtmlElement,
    open_class: String,
}

impl MenuView {
    fn apply(&self, state: MenuState) {
        let p = state.presentation();
        set_class(&self.menu, &self.open_class, p.open_class);
        let overflow = if p.scroll_locked { "hidden" } else { "" };
        if let Err(err) = self.body.style().set_property("overflow", overflow) {
            tracing::warn!(error = ?err, "Failed to set body overflow");
        }
        if let Err(err) = self.toggle.set_attribute("aria-expanded", p.aria_expanded) {
            tracing::warn!(error = ?err, "Failed to set aria-expanded");
        }
    }
}

fn on_signal(
    state: &Rc<RefCell<MenuState>>,
    view: &Rc<MenuView>,
    signal: fn(&mut MenuState),
) -> impl FnMut(web_sys::Event) + 'static {
    let state = Rc::clone(state);
    let view = Rc::clone(view);
    move |_| {
        let current = {
            let mut s = state.borrow_mut();
            signal(&mut s);
            *s
        };
        tracing::debug!(open = current.is_open(), "Mobile menu");
        view.apply(current);
    }
}

pub fn install(doc: &Document, config: &MenuConfig) -> Result<(), PageError> {
    let toggle = require(doc, &config.toggle)?;
    let menu = require(doc, &config.menu)?;
    let close = require(doc, &config.close)?;
    let links = query_all(doc, &config.nav_link)?;
    let body = doc.body().ok_or_else(|| PageError::missing("body"))?;

    let view = Rc::new(MenuView {
        toggle: toggle.clone(),
        menu,
        body,
        open_class: config.open_class.clone(),
    });
    let state = Rc::new(RefCell::new(MenuState::default()));

    listen(&toggle, "click", on_signal(&state, &view, MenuState::open))?;
    listen(&close, "click", on_signal(&state, &view, MenuState::close))?;
    for link in &links {
        listen(link, "click", on_signal(&state, &view, MenuState::close))?;
    }

    tracing::debug!(nav_links = links.len(), "Menu controller installed");
    Ok(())
}
