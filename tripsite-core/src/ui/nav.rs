use crate::dom::ClassList;

const ACTIVE: &str = "active";

/// Burger trigger plus the link list it opens.
#[derive(Debug)]
pub struct NavMenu<T: ClassList> {
    trigger: T,
    links: T,
}

impl<T: ClassList> NavMenu<T> {
    pub fn new(trigger: T, links: T) -> Self {
        Self { trigger, links }
    }

    pub fn on_trigger_click(&mut self) {
        self.trigger.toggle_class(ACTIVE);
        self.links.toggle_class(ACTIVE);
    }

    /// Any link click collapses the menu.
    pub fn on_link_click(&mut self) {
        self.trigger.remove_class(ACTIVE);
        self.links.remove_class(ACTIVE);
    }

    pub fn is_open(&self) -> bool {
        self.links.has_class(ACTIVE)
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn links(&self) -> &T {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn menu() -> NavMenu<Element> {
        NavMenu::new(Element::new("burgerMenu"), Element::new("nav-links"))
    }

    #[test]
    fn trigger_toggles_both_elements() {
        let mut nav = menu();

        nav.on_trigger_click();
        assert!(nav.is_open());
        assert!(nav.trigger().has_class("active"));

        nav.on_trigger_click();
        assert!(!nav.is_open());
        assert!(!nav.trigger().has_class("active"));
    }

    #[test]
    fn link_click_collapses() {
        let mut nav = menu();
        nav.on_trigger_click();
        nav.on_link_click();

        assert!(!nav.is_open());
        assert!(!nav.trigger().has_class("active"));
    }

    #[test]
    fn link_click_on_closed_menu_is_noop() {
        let mut nav = menu();
        nav.on_link_click();
        nav.on_link_click();

        assert!(!nav.is_open());
        assert!(!nav.links().has_class("active"));
    }
}
