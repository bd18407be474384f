/// Widths at or below this many columns get the collapsible mobile menu.
pub const MOBILE_BREAKPOINT: u16 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Menu,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct MenuController {
    enabled: bool,
    expanded: bool,
    breakpoint: u16,
}

impl MenuController {
    /// A page without a toggle control gets an inert controller.
    pub fn attach(has_toggle: bool, breakpoint: u16) -> Self {
        Self {
            enabled: has_toggle,
            expanded: false,
            breakpoint,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    pub fn is_mobile(&self, width: u16) -> bool {
        width <= self.breakpoint
    }

    pub fn toggle(&mut self) -> Propagation {
        if !self.enabled {
            return Propagation::Continue;
        }
        self.expanded = !self.expanded;
        Propagation::Stopped
    }

    /// True when the links are out of view behind a collapsed menu.
    pub fn is_hidden(&self, width: u16) -> bool {
        self.enabled && self.is_mobile(width) && !self.expanded
    }

    /// Expands a collapsed mobile menu so keyboard focus lands on visible links.
    pub fn reveal(&mut self, width: u16) -> bool {
        if self.is_hidden(width) {
            self.expanded = true;
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    pub fn on_link_click(&mut self, width: u16) {
        if self.enabled && self.is_mobile(width) {
            self.close();
        }
    }

    pub fn on_document_click(&mut self, width: u16, target: ClickTarget) {
        if self.enabled && self.is_mobile(width) && target == ClickTarget::Outside {
            self.close();
        }
    }

    /// Runs a click through the toggle handler and then, unless stopped, the
    /// document handler.
    pub fn dispatch_click(&mut self, width: u16, target: ClickTarget) {
        if target == ClickTarget::Toggle && self.toggle() == Propagation::Stopped {
            return;
        }
        self.on_document_click(width, target);
    }
}
