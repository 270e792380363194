//! Binder Configuration
//!
//! Selectors and messages the binder uses. Defaults match the markup the
//! mdtask server renders; a page may override any of them with a JSON
//! block in `<script id="ui-config" type="application/json">`.

use dom_hooks::{DocumentHandle, ElementHandle};
use serde::Deserialize;

use crate::error::UiResult;

/// Where a page can place its config override
pub const CONFIG_SELECTOR: &str = "script#ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinderConfig {
    pub delete_selector: String,
    pub delete_message: String,
    pub task_form_selector: String,
    pub title_input_selector: String,
    pub title_required_message: String,
    pub auto_resize_selector: String,
    pub tag_link_selector: String,
    /// Attribute holding a tag link's tag value
    pub tag_attribute: String,
    /// Path the tag filter query is appended to
    pub filter_path: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            delete_selector: ".delete-btn".to_string(),
            delete_message: "Are you sure you want to delete this task?".to_string(),
            task_form_selector: ".task-form".to_string(),
            title_input_selector: r#"input[name="title"]"#.to_string(),
            title_required_message: "Title is required".to_string(),
            auto_resize_selector: "textarea.auto-resize".to_string(),
            tag_link_selector: ".tag-link".to_string(),
            tag_attribute: "data-tag".to_string(),
            filter_path: "/".to_string(),
        }
    }
}

impl BinderConfig {
    /// Parse an override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read the page's config override, falling back to defaults
pub fn load_config<D: DocumentHandle>(document: &D) -> BinderConfig {
    let Some(text) = document
        .query_selector(CONFIG_SELECTOR)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
    else {
        return BinderConfig::default();
    };

    match BinderConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("Loaded config override from {}", CONFIG_SELECTOR);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_SELECTOR, e);
            BinderConfig::default()
        }
    }
}
