//! Header shrink mode, derived from the vertical scroll offset.

/// Scroll offset (px) above which the header shrinks.
pub const SHRINK_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Normal,
    Scrolled,
}

impl HeaderMode {
    /// Scrolled iff `scroll_y` is strictly above `threshold`.
    pub fn from_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderMode::Scrolled
        } else {
            HeaderMode::Normal
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, HeaderMode::Scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_is_normal() {
        assert_eq!(HeaderMode::from_scroll(50.0, SHRINK_THRESHOLD), HeaderMode::Normal);
        assert_eq!(HeaderMode::from_scroll(50.5, SHRINK_THRESHOLD), HeaderMode::Scrolled);
        assert_eq!(HeaderMode::from_scroll(0.0, SHRINK_THRESHOLD), HeaderMode::Normal);
    }

    proptest! {
        #[test]
        fn mode_depends_only_on_offset(offsets in proptest::collection::vec(0.0f64..2000.0, 1..32)) {
            for y in offsets {
                let mode = HeaderMode::from_scroll(y, SHRINK_THRESHOLD);
                prop_assert_eq!(mode.is_scrolled(), y > SHRINK_THRESHOLD);
            }
        }
    }
}
