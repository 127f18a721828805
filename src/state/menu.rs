//! Mobile navigation menu state.

/// Whether the mobile menu overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// DOM-facing view of a [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// Whether the menu container carries the open class.
    pub open_class: bool,
    /// Whether background page scrolling is disabled.
    pub scroll_locked: bool,
    /// Value for the toggle's `aria-expanded` attribute.
    pub aria_expanded: &'static str,
}

impl MenuState {
    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn presentation(&self) -> MenuPresentation {
        let open = self.is_open();
        MenuPresentation {
            open_class: open,
            scroll_locked: open,
            aria_expanded: if open { "true" } else { "false" },
        }
    }
}
