//! Open/closed UI state: sidebar, profile menu, reveal-on-scroll.

/// Simple open/closed flag (mobile sidebar overlay).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Where a document pointer-down landed, relative to the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the menu panel.
    Menu,
    /// On (or inside) the trigger button.
    Trigger,
    /// Connected node outside both regions.
    Outside,
    /// Target is not a node or no longer attached to the document.
    Detached,
}

/// Profile dropdown with outside-click dismissal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileMenu {
    state: Disclosure,
}

impl ProfileMenu {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Trigger click.
    pub fn toggle(&mut self) -> bool {
        self.state.toggle()
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    /// Document pointer-down. Returns `true` if the menu was dismissed.
    ///
    /// Only a connected target outside both the menu and the trigger closes
    /// it; the trigger handles its own toggle.
    pub fn on_pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.is_open() && target == PointerTarget::Outside {
            self.state.close();
            return true;
        }
        false
    }
}

/// Latches to `true` the first time an element becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Record a visibility sample and return the latched value.
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure() {
        let mut sidebar = Disclosure::default();
        assert!(!sidebar.is_open());
        assert!(sidebar.toggle());
        assert!(!sidebar.toggle());
        sidebar.open();
        sidebar.open();
        assert!(sidebar.is_open());
        sidebar.close();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_outside_pointer_closes_open_menu() {
        let mut menu = ProfileMenu::default();
        menu.toggle();
        assert!(menu.on_pointer_down(PointerTarget::Outside));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_pointer_keeps_menu_open() {
        let mut menu = ProfileMenu::default();
        menu.toggle();
        assert!(!menu.on_pointer_down(PointerTarget::Menu));
        assert!(!menu.on_pointer_down(PointerTarget::Trigger));
        assert!(menu.is_open());
    }

    #[test]
    fn test_detached_target_is_noop() {
        let mut menu = ProfileMenu::default();
        menu.toggle();
        assert!(!menu.on_pointer_down(PointerTarget::Detached));
        assert!(menu.is_open());
    }

    #[test]
    fn test_closed_menu_ignores_pointer() {
        let mut menu = ProfileMenu::default();
        assert!(!menu.on_pointer_down(PointerTarget::Outside));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_reveal_latch() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.is_revealed());
    }
}
