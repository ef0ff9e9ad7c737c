//! Handles onto the page elements the behaviors act on.
//!
//! Components never reach for ambient globals; the host passes in whatever
//! implements these traits. [`Element`] and [`HeadlessPage`] are in-memory
//! implementations used by the command-line host and the tests.

use std::{
    cell::{Ref, RefCell},
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

/// A text element whose color and content can be replaced.
pub trait StatusLine {
    fn set_color(&mut self, color: Color);
    fn set_text(&mut self, text: &str);
}

/// An element whose children are replaced wholesale by markup.
pub trait Container {
    fn set_inner_html(&mut self, html: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Description of a button created by script and appended to the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: String,
    pub label: String,
    pub aria_label: String,
}

pub trait Page {
    /// Live handle onto an element the page owns.
    type Handle: ClassList;

    /// Vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
    fn append_button(&mut self, button: Button) -> Self::Handle;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    classes: BTreeSet<String>,
    pub text: String,
    pub color: Option<Color>,
    pub inner_html: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ClassList for Element {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl StatusLine for Element {
    fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl Container for Element {
    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

/// An [`Element`] shared between the page and the component driving it.
#[derive(Debug, Clone, Default)]
pub struct SharedElement(Rc<RefCell<Element>>);

impl SharedElement {
    pub fn new(element: Element) -> Self {
        Self(Rc::new(RefCell::new(element)))
    }

    pub fn borrow(&self) -> Ref<'_, Element> {
        self.0.borrow()
    }
}

impl ClassList for SharedElement {
    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.0.borrow_mut().remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().has_class(class)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    pub offset: f64,
    pub buttons: Vec<SharedElement>,
    pub scrolls: Vec<ScrollBehavior>,
}

impl Page for HeadlessPage {
    type Handle = SharedElement;

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scrolls.push(behavior);
        self.offset = 0.0;
    }

    fn append_button(&mut self, button: Button) -> SharedElement {
        let mut element = Element::new(button.id);
        element.text = button.label;
        element.attributes.insert("aria-label".into(), button.aria_label);

        let handle = SharedElement::new(element);
        self.buttons.push(handle.clone());
        handle
    }
}
