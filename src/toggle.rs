//! Expand/collapse state shared by the mobile menu and the accordion items.
//!
//! Views derive both `aria-expanded` and the panel's `hidden` flag from a
//! single [`ToggleState`], so the two can never disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub expanded: bool,
}

impl ToggleState {
    pub fn collapsed() -> Self {
        Self { expanded: false }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn closed(self) -> Self {
        Self::collapsed()
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    pub fn panel_hidden(&self) -> bool {
        !self.expanded
    }
}

/// Transitions for the navigation menu.
pub mod nav {
    use super::ToggleState;

    /// Following a menu link collapses the menu, but only on narrow viewports.
    pub fn on_link_click(state: ToggleState, viewport_width: f64, breakpoint: f64) -> ToggleState {
        if viewport_width < breakpoint {
            state.toggled()
        } else {
            state
        }
    }

    /// A click anywhere outside the trigger and the panel closes an open menu.
    pub fn on_document_click(state: ToggleState, inside_menu: bool) -> ToggleState {
        if state.expanded && !inside_menu {
            state.toggled()
        } else {
            state
        }
    }

    pub fn on_resize(state: ToggleState, viewport_width: f64, breakpoint: f64) -> ToggleState {
        if viewport_width >= breakpoint {
            state.closed()
        } else {
            state
        }
    }
}
