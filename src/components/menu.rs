/// Open/closed state of the mobile navigation and the attributes it
/// drives on the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn aria_label(self) -> &'static str {
        if self.open { "Fechar menu" } else { "Abrir menu" }
    }

    pub fn toggle_class(self) -> &'static str {
        if self.open { "mobile-toggle active" } else { "mobile-toggle" }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open { "nav-menu open" } else { "nav-menu" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MobileMenu::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_label(), "Abrir menu");
        assert_eq!(menu.menu_class(), "nav-menu");
    }

    #[test]
    fn toggling_flips_every_attribute() {
        let menu = MobileMenu::default().toggled();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_label(), "Fechar menu");
        assert_eq!(menu.toggle_class(), "mobile-toggle active");
        assert_eq!(menu.menu_class(), "nav-menu open");
        assert_eq!(menu.toggled(), MobileMenu::closed());
    }
}
