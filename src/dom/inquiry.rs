//! Inquiry form submission with simulated delivery.
//!
//! Decisions come from [`InquiryController`]; this module only reads the
//! form and applies outcomes. Delivery is a `spawn_local` task that sleeps
//! for the configured delay.

use super::{listen, require, set_class, sleep};
use crate::config::InquiryConfig;
use crate::error::PageError;
use crate::state::inquiry::{
    Feedback, FeedbackKind, InquiryController, InquiryFields, SubmitOutcome,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

struct InquiryView {
    form: HtmlFormElement,
    feedback: Element,
    config: InquiryConfig,
}

impl InquiryView {
    fn field_value(&self, name: &str) -> Option<String> {
        let control = self.form.elements().named_item(name)?;
        js_sys::Reflect::get(&control, &JsValue::from_str("value"))
            .ok()?
            .as_string()
    }

    fn clear_feedback(&self) {
        self.feedback.set_text_content(Some(""));
        self.feedback.set_class_name(&self.config.feedback_class);
    }

    fn show(&self, feedback: &Feedback) {
        self.feedback.set_text_content(Some(feedback.message));
        let class = match feedback.kind {
            FeedbackKind::Error => &self.config.error_class,
            FeedbackKind::Success => &self.config.success_class,
        };
        set_class(&self.feedback, class, true);
    }
}

fn handle_submit(view: &Rc<InquiryView>, controller: &Rc<RefCell<InquiryController>>) {
    let fields = InquiryFields::from_lookup(|name| {
        let value = view.field_value(name);
        if value.is_none() {
            tracing::warn!(field = name, "Form control missing, treating as empty");
        }
        value
    });

    let outcome = controller.borrow_mut().submit(&fields);
    let (ticket, submission) = match outcome {
        SubmitOutcome::Ignored => {
            tracing::warn!("Inquiry already being sent, ignoring resubmit");
            return;
        }
        SubmitOutcome::Rejected { feedback, error } => {
            tracing::debug!(%error, "Inquiry rejected");
            view.clear_feedback();
            view.show(&feedback);
            return;
        }
        SubmitOutcome::Accepted { ticket, submission } => (ticket, submission),
    };

    view.clear_feedback();
    match serde_json::to_string(&submission) {
        Ok(json) => tracing::info!(submission = %json, "Submitting sanitized inquiry"),
        Err(err) => tracing::warn!(%err, "Could not serialize inquiry for logging"),
    }

    let view = Rc::clone(view);
    let controller = Rc::clone(controller);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = sleep(view.config.submit_delay_ms).await {
            tracing::error!(%err, "Submission timer failed");
            controller.borrow_mut().cancel();
            return;
        }
        let Some(feedback) = controller.borrow_mut().finish(ticket) else {
            tracing::debug!("Submission cancelled before completion");
            return;
        };
        view.show(&feedback);
        view.form.reset();
        tracing::info!("Inquiry submitted");
    });
}

pub fn install(doc: &Document, config: &InquiryConfig) -> Result<(), PageError> {
    let form = require(doc, &config.form)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| PageError::missing(format!("{} (form element)", config.form)))?;
    let feedback = require(doc, &config.feedback)?;

    let view = Rc::new(InquiryView {
        form: form.clone(),
        feedback,
        config: config.clone(),
    });
    let controller = Rc::new(RefCell::new(InquiryController::default()));

    listen(&form, "submit", move |event| {
        event.prevent_default();
        handle_submit(&view, &controller);
    })?;

    tracing::debug!(delay_ms = config.submit_delay_ms, "Inquiry controller installed");
    Ok(())
}
