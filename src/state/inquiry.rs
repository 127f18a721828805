//! Inquiry form: sanitization, validation, feedback and submission guard.
//!
//! Flow (driven by [`InquiryController`]):
//! ```text
//! submit ──► InquiryFields ──sanitize──► FormSubmission ──validate──┬─► Rejected(Feedback::error)
//!   │                                                               │
//!   └─ in flight ─► Ignored              SubmissionGuard::begin ◄───┘
//!                                                 │ Accepted (delay)
//!                                                 ▼
//!                                  finish(ticket) ──► Feedback::success + reset
//! ```

use crate::error::InquiryError;
use serde::Serialize;

/// Simulated network latency before the success message.
pub const SUBMIT_DELAY_MS: u32 = 1000;

pub const FIELD_INQUIRY_TYPE: &str = "inquiry-type";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_COMPANY: &str = "company";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_MESSAGE: &str = "message";

pub const MSG_MISSING_FIELDS: &str = "Please fill out all required fields.";
pub const MSG_SUCCESS: &str = "Success! Your inquiry has been sent. We will contact you shortly.";

/// Escape a value the way the browser serializes a text node, so it can
/// be inserted later as markup without being interpreted as HTML.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

/// Raw field values as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFields {
    pub inquiry_type: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl InquiryFields {
    /// Build from a lookup by control name; missing controls read as empty.
    pub fn from_lookup(mut value_of: impl FnMut(&str) -> Option<String>) -> Self {
        let mut read = |name: &str| value_of(name).unwrap_or_default();
        Self {
            inquiry_type: read(FIELD_INQUIRY_TYPE),
            name: read(FIELD_NAME),
            email: read(FIELD_EMAIL),
            company: read(FIELD_COMPANY),
            phone: read(FIELD_PHONE),
            message: read(FIELD_MESSAGE),
        }
    }
}

/// Sanitized inquiry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub inquiry_type: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl FormSubmission {
    pub fn from_fields(fields: &InquiryFields) -> Self {
        Self {
            inquiry_type: sanitize(&fields.inquiry_type),
            name: sanitize(&fields.name),
            email: sanitize(&fields.email),
            company: sanitize(&fields.company),
            phone: sanitize(&fields.phone),
            message: sanitize(&fields.message),
        }
    }

    /// Required: inquiry type, name, email, message.
    pub fn validate(&self) -> Result<(), InquiryError> {
        let missing: Vec<&'static str> = [
            (FIELD_INQUIRY_TYPE, &self.inquiry_type),
            (FIELD_NAME, &self.name),
            (FIELD_EMAIL, &self.email),
            (FIELD_MESSAGE, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InquiryError::MissingFields(missing))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

/// Message shown in the feedback element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
}

impl Feedback {
    pub fn missing_fields() -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: MSG_MISSING_FIELDS,
        }
    }

    pub fn success() -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: MSG_SUCCESS,
        }
    }
}

/// Handle for one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Serializes submissions: at most one delayed completion is live.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    next: u64,
    in_flight: Option<Ticket>,
}

impl SubmissionGuard {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn begin(&mut self) -> Result<Ticket, InquiryError> {
        if self.in_flight.is_some() {
            return Err(InquiryError::AlreadySubmitting);
        }
        let ticket = Ticket(self.next);
        self.next += 1;
        self.in_flight = Some(ticket);
        Ok(ticket)
    }

    /// Finish `ticket`. Returns `false` if it was cancelled or superseded,
    /// in which case the caller must not touch the page.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        self.in_flight.take()
    }
}

/// Decision for one submit event, applied to the page by the DOM layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields missing: show the feedback, schedule nothing.
    Rejected {
        feedback: Feedback,
        error: InquiryError,
    },
    /// An earlier submission is still in flight: leave the page untouched.
    Ignored,
    /// Schedule delivery, then call [`InquiryController::finish`].
    Accepted {
        ticket: Ticket,
        submission: FormSubmission,
    },
}

/// Submit/complete cycle of the inquiry form.
#[derive(Debug, Default)]
pub struct InquiryController {
    guard: SubmissionGuard,
}

impl InquiryController {
    pub fn is_in_flight(&self) -> bool {
        self.guard.is_in_flight()
    }

    pub fn submit(&mut self, fields: &InquiryFields) -> SubmitOutcome {
        if self.guard.is_in_flight() {
            return SubmitOutcome::Ignored;
        }
        let submission = FormSubmission::from_fields(fields);
        if let Err(error) = submission.validate() {
            return SubmitOutcome::Rejected {
                feedback: Feedback::missing_fields(),
                error,
            };
        }
        match self.guard.begin() {
            Ok(ticket) => SubmitOutcome::Accepted { ticket, submission },
            Err(_) => SubmitOutcome::Ignored,
        }
    }

    /// Success feedback once the delay for `ticket` elapses. `Some` also
    /// means the form is to be reset; `None` means the ticket was cancelled.
    pub fn finish(&mut self, ticket: Ticket) -> Option<Feedback> {
        self.guard.complete(ticket).then(Feedback::success)
    }

    pub fn cancel(&mut self) {
        self.guard.cancel();
    }
}
