//! Page Interaction Controller
//!
//! Installs every page behaviour in one synchronous pass:
//!
//! ```text
//! menu ─► tabs ─► reveal ─► header ─► scroll ─► inquiry
//! ```
//!
//! Under [`LookupPolicy::FailFast`] the first missing element stops the
//! pass; behaviours installed before it stay live. Under
//! [`LookupPolicy::WarnAndSkip`] the behaviour is skipped and the pass
//! continues. Any other error (bad selector, JS exception) always stops.

use crate::config::{LookupPolicy, PageConfig};
use crate::error::PageError;

/// The independently installable page behaviours, in install order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Menu,
    Tabs,
    Reveal,
    Header,
    Scroll,
    Inquiry,
}

impl Behaviour {
    pub const ALL: [Behaviour; 6] = [
        Behaviour::Menu,
        Behaviour::Tabs,
        Behaviour::Reveal,
        Behaviour::Header,
        Behaviour::Scroll,
        Behaviour::Inquiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Behaviour::Menu => "menu",
            Behaviour::Tabs => "tabs",
            Behaviour::Reveal => "reveal",
            Behaviour::Header => "header",
            Behaviour::Scroll => "scroll",
            Behaviour::Inquiry => "inquiry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub behaviour: Behaviour,
    pub reason: String,
}

/// What `install` wired up.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub installed: Vec<Behaviour>,
    pub skipped: Vec<Skipped>,
}

impl InstallReport {
    /// Fold one behaviour's install result in, applying `policy`.
    pub fn record(
        &mut self,
        policy: LookupPolicy,
        behaviour: Behaviour,
        result: Result<(), PageError>,
    ) -> Result<(), PageError> {
        match result {
            Ok(()) => {
                self.installed.push(behaviour);
                Ok(())
            }
            Err(err) if policy == LookupPolicy::WarnAndSkip && err.is_missing_element() => {
                tracing::warn!(behaviour = behaviour.as_str(), %err, "Skipping page behaviour");
                self.skipped.push(Skipped {
                    behaviour,
                    reason: err.to_string(),
                });
                Ok(())
            }
            Err(err) => {
                tracing::error!(behaviour = behaviour.as_str(), %err, "Page setup aborted");
                Err(err)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.installed.len() == Behaviour::ALL.len()
    }
}

pub struct PageController {
    config: PageConfig,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[cfg(target_arch = "wasm32")]
    pub fn install(&self) -> Result<InstallReport, PageError> {
        use crate::dom;

        let doc = dom::document()?;
        let config = self.config();
        let policy = config.lookup;
        let mut report = InstallReport::default();

        report.record(policy, Behaviour::Menu, dom::menu::install(&doc, &config.menu))?;
        report.record(policy, Behaviour::Tabs, dom::tabs::install(&doc, &config.tabs))?;
        report.record(policy, Behaviour::Reveal, dom::reveal::install(&doc, &config.reveal))?;
        report.record(policy, Behaviour::Header, dom::header::install(&doc, &config.header))?;
        report.record(
            policy,
            Behaviour::Scroll,
            dom::scroll::install(
                &doc,
                &config.scroll,
                &config.menu.nav_link,
                &config.header.selector,
            ),
        )?;
        report.record(policy, Behaviour::Inquiry, dom::inquiry::install(&doc, &config.inquiry))?;

        tracing::info!(
            installed = report.installed.len(),
            skipped = report.skipped.len(),
            complete = report.is_complete(),
            "Page interactions installed"
        );
        Ok(report)
    }
}

/// `document.readyState` value while the parser is still running.
pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_fast_propagates_missing_element() {
        let mut report = InstallReport::default();
        report
            .record(LookupPolicy::FailFast, Behaviour::Menu, Ok(()))
            .unwrap();
        let err = report
            .record(
                LookupPolicy::FailFast,
                Behaviour::Tabs,
                Err(PageError::missing(".process-tab-btn")),
            )
            .unwrap_err();
        assert!(err.is_missing_element());
        assert_eq!(report.installed, vec![Behaviour::Menu]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn warn_and_skip_continues() {
        let mut report = InstallReport::default();
        report
            .record(
                LookupPolicy::WarnAndSkip,
                Behaviour::Header,
                Err(PageError::missing(".main-header")),
            )
            .unwrap();
        report
            .record(LookupPolicy::WarnAndSkip, Behaviour::Scroll, Ok(()))
            .unwrap();
        assert_eq!(report.installed, vec![Behaviour::Scroll]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].behaviour, Behaviour::Header);
        assert!(report.skipped[0].reason.contains(".main-header"));
        assert!(!report.is_complete());
    }

    #[test]
    fn warn_and_skip_still_stops_on_other_errors() {
        let mut report = InstallReport::default();
        let result = report.record(
            LookupPolicy::WarnAndSkip,
            Behaviour::Scroll,
            Err(PageError::InvalidSelector {
                selector: "#1bad".into(),
            }),
        );
        assert!(matches!(result, Err(PageError::InvalidSelector { .. })));
    }

    #[test]
    fn complete_report() {
        let mut report = InstallReport::default();
        for behaviour in Behaviour::ALL {
            report
                .record(LookupPolicy::FailFast, behaviour, Ok(()))
                .unwrap();
        }
        assert!(report.is_complete());
    }

    #[test]
    fn ready_state_gates_deferred_install() {
        assert!(document_is_loading("loading"));
        assert!(!document_is_loading("interactive"));
        assert!(!document_is_loading("complete"));
    }

    #[test]
    fn controller_uses_given_config() {
        let controller = PageController::default();
        assert_eq!(controller.config(), &PageConfig::default());
    }
}
