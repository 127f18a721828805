//! In-page anchor resolution for smooth scrolling.

/// What a scroll control's `href` points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorRef {
    /// Bare `#`: back to the top of the page.
    Top,
    /// `#some-id`: the selector to look up.
    Fragment(String),
    /// Missing href or a non-fragment link; left to the browser.
    External,
}

impl AnchorRef {
    pub fn parse(href: Option<&str>) -> Self {
        match href.map(str::trim) {
            Some("#") => AnchorRef::Top,
            Some(h) if h.starts_with('#') => AnchorRef::Fragment(h.to_string()),
            _ => AnchorRef::External,
        }
    }

    pub fn is_in_page(&self) -> bool {
        !matches!(self, AnchorRef::External)
    }
}

/// Where to scroll after a control is activated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    Top,
    To(f64),
    /// Target missing or not an in-page anchor.
    Stay,
}

/// Document offset that puts `element_top` just below a fixed header.
///
/// `element_top` is viewport-relative, as from `getBoundingClientRect`.
pub fn target_offset(element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    element_top + scroll_y - header_height
}

/// Mobile nav links keep their default navigation; the menu controller
/// closes the menu for them.
pub fn should_intercept(is_mobile_nav_link: bool, anchor: &AnchorRef) -> bool {
    !is_mobile_nav_link && anchor.is_in_page()
}

impl ScrollAction {
    /// `locate` returns the viewport-relative top of the element matching
    /// a fragment selector, or `None` if nothing matches.
    pub fn plan(
        anchor: &AnchorRef,
        locate: impl FnOnce(&str) -> Option<f64>,
        scroll_y: f64,
        header_height: f64,
    ) -> Self {
        match anchor {
            AnchorRef::Top => ScrollAction::Top,
            AnchorRef::Fragment(selector) => match locate(selector) {
                Some(top) => ScrollAction::To(target_offset(top, scroll_y, header_height)),
                None => ScrollAction::Stay,
            },
            AnchorRef::External => ScrollAction::Stay,
        }
    }
}
