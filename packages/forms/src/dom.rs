//! A small in-memory element tree standing in for the browser DOM.
//!
//! Elements are reference-counted handles: cloning an `Element` yields a
//! second handle to the same node, the way two queries for the same id
//! return the same node in a browser. Everything here is single-threaded.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::binder::{Cancelable, SubmitTarget};
use crate::error::FormError;

type SubmitListener = Rc<RefCell<Box<dyn FnMut(&SubmitEvent)>>>;

struct Node {
    tag: String,
    id: Option<String>,
    class_name: RefCell<String>,
    text: RefCell<String>,
    value: RefCell<String>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Element>>,
    submit_listeners: RefCell<Vec<SubmitListener>>,
}

#[derive(Clone)]
pub struct Element(Rc<Node>);

impl Element {
    pub fn new(tag: &str) -> Self {
        Self::build(tag, None)
    }

    pub fn with_id(tag: &str, id: &str) -> Self {
        Self::build(tag, Some(id.to_string()))
    }

    fn build(tag: &str, id: Option<String>) -> Self {
        Element(Rc::new(Node {
            tag: tag.to_ascii_lowercase(),
            id,
            class_name: RefCell::new(String::new()),
            text: RefCell::new(String::new()),
            value: RefCell::new(String::new()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            submit_listeners: RefCell::new(Vec::new()),
        }))
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    pub fn class_name(&self) -> String {
        self.0.class_name.borrow().clone()
    }

    pub fn set_class_name(&self, class_name: &str) {
        *self.0.class_name.borrow_mut() = class_name.to_string();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0
            .class_name
            .borrow()
            .split_whitespace()
            .any(|c| c == class)
    }

    /// The node's own text followed by the text of all its descendants
    pub fn text_content(&self) -> String {
        let mut text = self.0.text.borrow().clone();
        for child in self.children() {
            text.push_str(&child.text_content());
        }
        text
    }

    /// Replaces all children with the given text
    pub fn set_text_content(&self, text: &str) {
        for child in self.children() {
            child.remove();
        }
        *self.0.text.borrow_mut() = text.to_string();
    }

    /// The current value of a form control. A `textarea` reports its text
    /// content, every other element its value attribute.
    pub fn value(&self) -> String {
        if self.0.tag == "textarea" {
            self.text_content()
        } else {
            self.0.value.borrow().clone()
        }
    }

    pub fn set_value(&self, value: &str) {
        if self.0.tag == "textarea" {
            self.set_text_content(value);
        } else {
            *self.0.value.borrow_mut() = value.to_string();
        }
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.parent.borrow().upgrade().map(Element)
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.children.borrow().clone()
    }

    /// Appends `child` as the last child, detaching it from any previous parent
    pub fn append_child(&self, child: &Element) {
        child.remove();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Detaches the element from its parent. Does nothing for a detached element.
    pub fn remove(&self) {
        if let Some(parent) = self.parent() {
            parent
                .0
                .children
                .borrow_mut()
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    /// All descendants in document order, not including the element itself
    pub fn descendants(&self) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            found.push(child.clone());
            found.extend(child.descendants());
        }
        found
    }

    /// Finds the element with the given id among this element and its descendants
    pub fn query_by_id(&self, id: &str) -> Option<Element> {
        if self.id() == Some(id) {
            return Some(self.clone());
        }
        self.descendants().into_iter().find(|e| e.id() == Some(id))
    }

    pub fn query_all_by_class(&self, class: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Fires a submit event at the element, running every submit listener
    /// in registration order, and returns the event afterwards.
    pub fn dispatch_submit(&self) -> SubmitEvent {
        let event = SubmitEvent::default();
        // Listeners are cloned out first so a listener may read the tree freely
        let listeners: Vec<SubmitListener> = self.0.submit_listeners.borrow().clone();
        for listener in listeners {
            (listener.borrow_mut())(&event);
        }
        event
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.0.tag)?;
        if let Some(id) = &self.0.id {
            write!(f, " id=\"{}\"", id)?;
        }
        let class_name = self.0.class_name.borrow();
        if !class_name.is_empty() {
            write!(f, " class=\"{}\"", class_name)?;
        }
        write!(f, ">")
    }
}

impl SubmitTarget for Element {
    type Event = SubmitEvent;

    fn add_submit_listener(
        &self,
        listener: Box<dyn FnMut(&SubmitEvent)>,
    ) -> Result<(), FormError> {
        self.0
            .submit_listeners
            .borrow_mut()
            .push(Rc::new(RefCell::new(listener)));
        Ok(())
    }
}

/// The event passed to submit listeners
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: Cell<bool>,
}

impl SubmitEvent {
    /// Whether a listener suppressed the browser's own form submission
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl Cancelable for SubmitEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// The root of an element tree
#[derive(Clone, Debug)]
pub struct Document {
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Document {
            body: Element::new("body"),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.body.query_by_id(id)
    }

    pub fn query_all_by_class(&self, class: &str) -> Vec<Element> {
        self.body.query_all_by_class(class)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
