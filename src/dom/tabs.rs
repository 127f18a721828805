//! Process-section tabs.

use super::{listen, query_all, set_class};
use crate::config::TabsConfig;
use crate::error::PageError;
use crate::state::{TabChange, TabSelection};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

struct TabsView {
    buttons: Vec<Element>,
    panels: Vec<Element>,
    active_class: String,
}

impl TabsView {
    fn apply(&self, change: &TabChange) {
        for (i, button) in self.buttons.iter().enumerate() {
            set_class(button, &self.active_class, i == change.control);
        }

        let ids: Vec<String> = self.panels.iter().map(|p| p.id()).collect();
        let flags = change.panel_flags(&ids);
        for (panel, on) in self.panels.iter().zip(&flags) {
            set_class(panel, &self.active_class, *on);
        }
        if !flags.contains(&true) {
            tracing::debug!(panel = ?change.panel, "No content panel for tab");
        }
    }
}

pub fn install(doc: &Document, config: &TabsConfig) -> Result<(), PageError> {
    let buttons = query_all(doc, &config.button)?;
    let panels = query_all(doc, &config.panel)?;

    let ids = buttons
        .iter()
        .map(|b| b.get_attribute(&config.id_attribute))
        .collect();
    let initial = buttons
        .iter()
        .position(|b| b.class_list().contains(&config.active_class));
    let selection = Rc::new(RefCell::new(TabSelection::new(ids).with_active(initial)));

    let view = Rc::new(TabsView {
        buttons,
        panels,
        active_class: config.active_class.clone(),
    });

    for (index, button) in view.buttons.iter().enumerate() {
        let selection = Rc::clone(&selection);
        let tabs = Rc::clone(&view);
        listen(button, "click", move |_| {
            let mut selection = selection.borrow_mut();
            let Some(change) = selection.select(index) else {
                return;
            };
            tracing::debug!(
                index = ?selection.active(),
                tab = ?selection.active_id(),
                panel = ?selection.active_panel(),
                "Tab selected"
            );
            tabs.apply(&change);
        })?;
    }

    let selection = selection.borrow();
    if selection.is_empty() {
        tracing::debug!("No process tabs on page");
    }
    tracing::debug!(
        tabs = selection.len(),
        panels = view.panels.len(),
        active = ?selection.active_id(),
        "Tab controller installed"
    );
    Ok(())
}
