//! Browser DOM
//!
//! web-sys implementations of the hook traits.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList};

use crate::{DocumentHandle, DomEvent, ElementHandle, EventKind, Handler, HookError};

impl DomEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn default_prevented(&self) -> bool {
        web_sys::Event::default_prevented(self)
    }
}

/// The current page
#[derive(Clone)]
pub struct BrowserDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    /// Still parsing markup
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl DocumentHandle for BrowserDocument {
    type Element = BrowserElement;

    fn query_selector_all(&self, selector: &str) -> Vec<BrowserElement> {
        collect(selector, self.document.query_selector_all(selector))
    }

    fn navigate(&self, url: &str) -> Result<(), HookError> {
        self.window
            .location()
            .set_href(url)
            .map_err(HookError::from_js)
    }
}

/// Element wrapper
#[derive(Clone, Debug)]
pub struct BrowserElement(pub Element);

impl ElementHandle for BrowserElement {
    fn query_selector(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(BrowserElement),
            Err(e) => {
                log::debug!("query_selector({}) failed: {:?}", selector, e);
                None
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HookError> {
        self.0.set_attribute(name, value).map_err(HookError::from_js)
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.0
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| area.value())
    }

    fn text_content(&self) -> Option<String> {
        self.0.text_content()
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), HookError> {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            return Err(HookError::Js(format!("<{}> has no inline style", self.0.tag_name())));
        };
        el.style()
            .set_property(property, value)
            .map_err(HookError::from_js)
    }

    fn scroll_height(&self) -> i32 {
        self.0.scroll_height()
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Result<(), HookError> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            handler(&ev);
        });
        self.0
            .add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
            .map_err(HookError::from_js)?;
        callback.forget();
        Ok(())
    }

    fn dispatch(&self, kind: EventKind) -> Result<bool, HookError> {
        let event = web_sys::Event::new(kind.as_str()).map_err(HookError::from_js)?;
        self.0.dispatch_event(&event).map_err(HookError::from_js)
    }
}

fn collect(selector: &str, list: Result<NodeList, JsValue>) -> Vec<BrowserElement> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::warn!("query_selector_all({}) failed: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(BrowserElement)
        .collect()
}

/// Run `f` once the document's markup has been parsed.
///
/// Runs immediately when `DOMContentLoaded` has already fired.
pub fn on_dom_ready<F>(document: BrowserDocument, f: F) -> Result<(), HookError>
where
    F: FnOnce(BrowserDocument) + 'static,
{
    if !document.is_loading() {
        f(document);
        return Ok(());
    }

    let target = document.document.clone();
    let callback = Closure::once_into_js(move |_ev: web_sys::Event| f(document));
    target
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(HookError::from_js)
}
