use crate::dom::{Button, ClassList, Page, ScrollBehavior};

pub const BUTTON_ID: &str = "scrollToTopBtn";

const SHOW: &str = "show";
const THRESHOLD_PX: f64 = 300.0;

/// The floating "back to top" button.
#[derive(Debug)]
pub struct ScrollToTop<B: ClassList> {
    button: B,
}

impl<B: ClassList> ScrollToTop<B> {
    /// Create the button and append it to the page.
    pub fn mount<P: Page<Handle = B> + ?Sized>(page: &mut P) -> Self {
        let button = page.append_button(Button {
            id: BUTTON_ID.to_string(),
            label: "↑".to_string(),
            aria_label: "Scroll to top".to_string(),
        });

        Self { button }
    }

    pub fn on_scroll<P: Page + ?Sized>(&mut self, page: &P) {
        if page.scroll_offset() > THRESHOLD_PX {
            self.button.add_class(SHOW);
        } else {
            self.button.remove_class(SHOW);
        }
    }

    pub fn on_click<P: Page + ?Sized>(&self, page: &mut P) {
        page.scroll_to_top(ScrollBehavior::Smooth);
    }

    pub fn is_visible(&self) -> bool {
        self.button.has_class(SHOW)
    }

    pub fn button(&self) -> &B {
        &self.button
    }
}
