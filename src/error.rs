//! UI Errors

use dom_hooks::HookError;

/// Errors raised while setting up page behavior
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    InvalidConfig(String),
    Dom(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            UiError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<HookError> for UiError {
    fn from(e: HookError) -> Self {
        UiError::Dom(e.to_string())
    }
}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::InvalidConfig(e.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;
