//! User Prompts
//!
//! Blocking confirm/alert dialogs behind a trait so handlers can be driven
//! by scripted answers in tests.

/// Blocking yes/no and notice dialogs
pub trait UserPrompt {
    /// Ask the user to confirm. `true` means accepted.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Native `window.confirm` / `window.alert`
pub struct BrowserPrompt {
    window: web_sys::Window,
}

impl BrowserPrompt {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }

    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        // A dialog that failed to show counts as declined
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("confirm dialog failed: {:?}", e);
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert dialog failed: {:?}", e);
        }
    }
}
