/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// The drawer stays open when the nav target couldn't be found on the page.
    pub fn navigated(&mut self, found: bool) {
        if found {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigation_closes_menu_when_section_found() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.navigated(true);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigation_to_missing_section_keeps_menu_open() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.navigated(false);
        assert!(menu.is_open());
    }
}
