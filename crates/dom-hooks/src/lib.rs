//! DOM Hooks
//!
//! Thin seam over the browser DOM for attaching behavior to server-rendered
//! markup. Code written against [`DocumentHandle`] / [`ElementHandle`] runs
//! on the real page through [`web`] and in tests through [`memory`].

pub mod logger;
pub mod memory;
pub mod prompt;
pub mod selector;
pub mod web;

pub use prompt::UserPrompt;

/// Events the hooks know how to listen for and dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Input,
}

impl EventKind {
    /// DOM event type name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::Input => "input",
        }
    }
}

/// The event a handler receives
pub trait DomEvent {
    /// Suppress the element's default action (navigation, submission)
    fn prevent_default(&self);

    fn default_prevented(&self) -> bool;
}

/// Event handler attached to an element
pub type Handler = Box<dyn Fn(&dyn DomEvent)>;

/// A live element in the document
pub trait ElementHandle: Clone + 'static {
    /// First descendant matching `selector`
    fn query_selector(&self, selector: &str) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HookError>;

    /// Current value of a form control, `None` for anything else
    fn value(&self) -> Option<String>;

    fn text_content(&self) -> Option<String>;

    /// Write an inline style property
    fn set_style(&self, property: &str, value: &str) -> Result<(), HookError>;

    /// Total content height including overflow, in pixels
    fn scroll_height(&self) -> i32;

    /// Attach `handler` for `kind`. Handlers live as long as the page.
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<(), HookError>;

    /// Fire a synthetic event. Returns `false` if a handler cancelled it.
    fn dispatch(&self, kind: EventKind) -> Result<bool, HookError>;
}

/// The document behavior is bound against
pub trait DocumentHandle: Clone + 'static {
    type Element: ElementHandle;

    /// All elements matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    fn query_selector(&self, selector: &str) -> Option<Self::Element> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Full-page navigation to `url`
    fn navigate(&self, url: &str) -> Result<(), HookError>;
}

/// DOM hook errors
#[derive(Debug, Clone, PartialEq)]
pub enum HookError {
    /// Exception thrown by a browser API
    Js(String),
    InvalidSelector(String),
    Logger(String),
}

impl HookError {
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        HookError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl std::fmt::Display for HookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookError::Js(msg) => write!(f, "JS error: {}", msg),
            HookError::InvalidSelector(sel) => write!(f, "Invalid selector: {}", sel),
            HookError::Logger(msg) => write!(f, "Logger error: {}", msg),
        }
    }
}

impl std::error::Error for HookError {}
