//! Error types for page wiring and inquiry handling.
//!
//! `PageError` covers start-up failures (missing elements, bad config).
//! `InquiryError` covers recoverable form outcomes that are surfaced to the
//! visitor as inline feedback and never abort anything.

use thiserror::Error;

/// Failure while wiring the page.
#[derive(Debug, Error)]
pub enum PageError {
    /// A required element was not found in the document.
    #[error("Required element not found: {selector}")]
    MissingElement { selector: String },

    /// The browser rejected a selector (e.g. `#1-bad-id`).
    #[error("Invalid selector: {selector}")]
    InvalidSelector { selector: String },

    /// No `window` or `document` available (not running in a browser page).
    #[error("No browser context: {0}")]
    NoBrowserContext(&'static str),

    /// A JavaScript exception surfaced through a web-sys call.
    #[error("JS error: {0}")]
    Js(String),

    /// Delay does not fit a JS timer (max `i32::MAX` ms).
    #[error("Delay of {0} ms exceeds the browser timer range")]
    InvalidDelay(u32),

    /// Inline configuration block could not be parsed.
    #[error("Invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        PageError::MissingElement {
            selector: selector.into(),
        }
    }

    /// True for errors a `WarnAndSkip` lookup policy may swallow.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, PageError::MissingElement { .. })
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Outcome of an inquiry submission that did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    /// One or more required fields were empty after sanitization.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A previous submission is still waiting on its delayed completion.
    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_names() {
        let err = InquiryError::MissingFields(vec!["name", "email"]);
        assert_eq!(err.to_string(), "Missing required fields: name, email");
    }

    #[test]
    fn missing_element_is_classified() {
        assert!(PageError::missing("#hamburger-btn").is_missing_element());
        assert!(!PageError::Js("boom".into()).is_missing_element());
    }

    #[test]
    fn config_error_converts_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let page: PageError = err.into();
        assert!(matches!(page, PageError::Config(_)));
    }
}
