//! Page configuration: selectors, class names and timing constants.
//!
//! Defaults match the markup conventions of the site. A page may override
//! any subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="page-interaction-config">
//!   { "header": { "shrink_threshold": 80 }, "lookup": "warn_and_skip" }
//! </script>
//! ```

use crate::error::PageError;
use serde::{Deserialize, Serialize};

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-interaction-config";

/// What to do when a controller's required element is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Abort installation at the first missing element.
    #[default]
    FailFast,
    /// Log a warning, skip that controller and keep going.
    WarnAndSkip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle: String,
    pub menu: String,
    pub close: String,
    pub nav_link: String,
    pub open_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle: "#hamburger-btn".into(),
            menu: "#mobile-menu".into(),
            close: "#close-menu-btn".into(),
            nav_link: ".mobile-nav-link".into(),
            open_class: "open".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub button: String,
    pub panel: String,
    pub id_attribute: String,
    pub active_class: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            button: ".process-tab-btn".into(),
            panel: ".process-content".into(),
            id_attribute: "data-tab".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of the element that must be visible (0.0..=1.0).
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in, .fade-in-left, .fade-in-right".into(),
            visible_class: "is-visible".into(),
            threshold: crate::state::reveal::REVEAL_THRESHOLD,
            root_margin: "0px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub shrink_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".main-header".into(),
            scrolled_class: "scrolled".into(),
            shrink_threshold: crate::state::header::SHRINK_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub links: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            links: r##"a[href^="#"], .cta-scroll"##.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryConfig {
    pub form: String,
    pub feedback: String,
    pub feedback_class: String,
    pub error_class: String,
    pub success_class: String,
    pub submit_delay_ms: u32,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            form: "#inquiry-form".into(),
            feedback: "#form-feedback".into(),
            feedback_class: "form-feedback".into(),
            error_class: "error".into(),
            success_class: "success".into(),
            submit_delay_ms: crate::state::inquiry::SUBMIT_DELAY_MS,
        }
    }
}

/// Convert a delay to the `i32` the browser timer API takes.
pub fn timer_delay(ms: u32) -> Result<i32, PageError> {
    i32::try_from(ms).map_err(|_| PageError::InvalidDelay(ms))
}

/// Complete configuration for [`crate::PageController`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub lookup: LookupPolicy,
    pub menu: MenuConfig,
    pub tabs: TabsConfig,
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
    pub scroll: ScrollConfig,
    pub inquiry: InquiryConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override. Missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: PageConfig = serde_json::from_str(json)?;
        timer_delay(config.inquiry.submit_delay_ms)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup() {
        let config = PageConfig::default();
        assert_eq!(config.lookup, LookupPolicy::FailFast);
        assert_eq!(config.menu.toggle, "#hamburger-btn");
        assert_eq!(config.tabs.id_attribute, "data-tab");
        assert_eq!(config.header.shrink_threshold, 50.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.scroll.links, r##"a[href^="#"], .cta-scroll"##);
        assert_eq!(config.inquiry.submit_delay_ms, 1000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{ "lookup": "warn_and_skip", "header": { "shrink_threshold": 80 } }"#,
        )
        .unwrap();
        assert_eq!(config.lookup, LookupPolicy::WarnAndSkip);
        assert_eq!(config.header.shrink_threshold, 80.0);
        assert_eq!(config.header.scrolled_class, "scrolled");
        assert_eq!(config.menu, MenuConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json("{ lookup: ").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn timer_delay_range() {
        assert_eq!(timer_delay(1000).unwrap(), 1000);
        assert_eq!(timer_delay(i32::MAX as u32).unwrap(), i32::MAX);
        assert!(matches!(
            timer_delay(i32::MAX as u32 + 1),
            Err(PageError::InvalidDelay(_))
        ));
    }

    #[test]
    fn oversized_submit_delay_is_rejected() {
        let err = PageConfig::from_json(r#"{ "inquiry": { "submit_delay_ms": 3000000000 } }"#)
            .unwrap_err();
        assert!(matches!(err, PageError::InvalidDelay(3_000_000_000)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(PageConfig::from_json(r#"{ "lookup": "ignore" }"#).is_err());
    }
}
