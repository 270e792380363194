//! In-Memory DOM
//!
//! A small element tree implementing the hook traits so behavior can be
//! exercised without a browser. Layout is modelled only as far as text
//! areas need it: each line of content is `LINE_HEIGHT_PX` tall plus
//! `PADDING_PX`, and `scrollHeight` never reports less than an explicit
//! pixel height.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use crate::selector::{Selector, Subject};
use crate::{DocumentHandle, DomEvent, ElementHandle, EventKind, Handler, HookError, UserPrompt};

pub const LINE_HEIGHT_PX: i32 = 20;
pub const PADDING_PX: i32 = 8;

struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    text: Option<String>,
    styles: HashMap<String, String>,
    children: Vec<MemoryElement>,
    listeners: Vec<(EventKind, Rc<Handler>)>,
}

/// Event passed to in-memory handlers
pub struct MemoryEvent {
    kind: EventKind,
    prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl DomEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// Shared handle to a node
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        let value = matches!(tag.as_str(), "input" | "textarea").then(String::new);
        Self(Rc::new(RefCell::new(Node {
            tag,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            value,
            text: None,
            styles: HashMap::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        })))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.extend(class.split_whitespace().map(String::from));
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = Some(text.to_string());
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(child);
        self
    }

    pub fn append(&self, child: MemoryElement) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = Some(value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0.borrow().listeners.iter().filter(|(k, _)| *k == kind).count()
    }

    /// User click. Returns `false` if the default action was suppressed.
    pub fn click(&self) -> bool {
        self.fire(EventKind::Click)
    }

    /// User submit. Returns `false` if the submission was suppressed.
    pub fn submit(&self) -> bool {
        self.fire(EventKind::Submit)
    }

    /// Replace the content as if typed, firing `input`
    pub fn type_text(&self, text: &str) {
        self.set_value(text);
        self.fire(EventKind::Input);
    }

    fn fire(&self, kind: EventKind) -> bool {
        // Handlers may touch this node, so release the borrow first
        let handlers: Vec<Rc<Handler>> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| Rc::clone(h))
            .collect();

        let event = MemoryEvent { kind, prevented: Cell::new(false) };
        for handler in handlers {
            (**handler)(&event);
        }
        !event.default_prevented()
    }

    fn matches(&self, selector: &Selector) -> bool {
        let node = self.0.borrow();
        let attribute = |name: &str| node.attributes.get(name).cloned();
        selector.matches(&Subject {
            tag: &node.tag,
            classes: &node.classes,
            attribute: &attribute,
        })
    }

    fn descendants(&self, out: &mut Vec<MemoryElement>) {
        for child in self.0.borrow().children.iter() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn find_all(&self, selector: &str, include_self: bool) -> Vec<MemoryElement> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                log::warn!("{}", e);
                return Vec::new();
            }
        };
        let mut candidates = Vec::new();
        if include_self {
            candidates.push(self.clone());
        }
        self.descendants(&mut candidates);
        candidates.into_iter().filter(|el| el.matches(&selector)).collect()
    }

    fn content_height(&self) -> i32 {
        let node = self.0.borrow();
        let lines = node
            .value
            .as_deref()
            .map(|v| v.split('\n').count())
            .unwrap_or(1)
            .max(1) as i32;
        lines * LINE_HEIGHT_PX + PADDING_PX
    }

    fn explicit_height(&self) -> Option<i32> {
        let node = self.0.borrow();
        node.styles
            .get("height")
            .and_then(|h| h.strip_suffix("px"))
            .and_then(|px| px.parse().ok())
    }
}

impl ElementHandle for MemoryElement {
    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.find_all(selector, false).into_iter().next()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HookError> {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value(&self) -> Option<String> {
        self.0.borrow().value.clone()
    }

    fn text_content(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), HookError> {
        self.0.borrow_mut().styles.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn scroll_height(&self) -> i32 {
        let content = self.content_height();
        self.explicit_height().map_or(content, |h| h.max(content))
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Result<(), HookError> {
        self.0.borrow_mut().listeners.push((kind, Rc::new(handler)));
        Ok(())
    }

    fn dispatch(&self, kind: EventKind) -> Result<bool, HookError> {
        Ok(self.fire(kind))
    }
}

/// Document rooted at a `<body>` element that records navigations
#[derive(Clone)]
pub struct MemoryDocument {
    body: MemoryElement,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: MemoryElement::new("body"),
            navigations: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn body(&self) -> &MemoryElement {
        &self.body
    }

    /// Append `el` to the body and hand it back
    pub fn add(&self, el: MemoryElement) -> MemoryElement {
        self.body.append(el.clone());
        el
    }

    /// URLs navigated to, oldest first
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentHandle for MemoryDocument {
    type Element = MemoryElement;

    fn query_selector_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.body.find_all(selector, true)
    }

    fn navigate(&self, url: &str) -> Result<(), HookError> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Prompt with pre-recorded answers
///
/// `confirm` pops the next scripted answer and declines once they run out.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
