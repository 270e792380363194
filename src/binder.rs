//! UI Behavior Binder
//!
//! Attaches the page's interactive behavior to server-rendered markup.
//! Four independent passes, one per affordance, each matching its marker
//! selector and attaching one handler per element:
//!
//! - delete buttons ask for confirmation before their action goes through
//! - task forms refuse to submit with a blank title
//! - auto-resize text areas grow and shrink to fit their content
//! - tag links navigate to the tag-filtered task list
//!
//! Every bound element gets its affordance recorded in `data-ui-bound`, so
//! running [`initialize`] again only picks up elements rendered since.

use std::rc::Rc;

use dom_hooks::{DocumentHandle, DomEvent, ElementHandle, EventKind, Handler, UserPrompt};

use crate::config::BinderConfig;
use crate::filter::tag_filter_url;

/// Attribute listing the affordances already attached to an element
pub const BOUND_ATTRIBUTE: &str = "data-ui-bound";

/// Behavior attached by one binding pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    DeleteConfirm,
    TitleValidation,
    AutoResize,
    TagFilter,
}

impl Affordance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Affordance::DeleteConfirm => "delete-confirm",
            Affordance::TitleValidation => "title-validation",
            Affordance::AutoResize => "auto-resize",
            Affordance::TagFilter => "tag-filter",
        }
    }
}

/// Number of elements newly bound per affordance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindReport {
    pub delete_confirmations: usize,
    pub form_validations: usize,
    pub auto_resizes: usize,
    pub tag_filters: usize,
}

impl BindReport {
    pub fn total(&self) -> usize {
        self.delete_confirmations + self.form_validations + self.auto_resizes + self.tag_filters
    }
}

/// Bind all four affordances against `document`
pub fn initialize<D: DocumentHandle>(
    document: &D,
    prompt: Rc<dyn UserPrompt>,
    config: &BinderConfig,
) -> BindReport {
    let report = BindReport {
        delete_confirmations: bind_delete_confirmations(document, &prompt, config),
        form_validations: bind_form_validations(document, &prompt, config),
        auto_resizes: bind_auto_resize(document, config),
        tag_filters: bind_tag_filters(document, config),
    };
    log::info!(
        "Bound {} elements (delete={}, forms={}, textareas={}, tags={})",
        report.total(),
        report.delete_confirmations,
        report.form_validations,
        report.auto_resizes,
        report.tag_filters
    );
    report
}

/// Confirm before letting a delete action through
pub fn bind_delete_confirmations<D: DocumentHandle>(
    document: &D,
    prompt: &Rc<dyn UserPrompt>,
    config: &BinderConfig,
) -> usize {
    bind_each(document, &config.delete_selector, Affordance::DeleteConfirm, EventKind::Click, |_| {
        let prompt = Rc::clone(prompt);
        let message = config.delete_message.clone();
        Box::new(move |event: &dyn DomEvent| {
            if !prompt.confirm(&message) {
                event.prevent_default();
            }
        })
    })
}

/// Block task form submission while the title is blank
pub fn bind_form_validations<D: DocumentHandle>(
    document: &D,
    prompt: &Rc<dyn UserPrompt>,
    config: &BinderConfig,
) -> usize {
    bind_each(document, &config.task_form_selector, Affordance::TitleValidation, EventKind::Submit, |form| {
        let form = form.clone();
        let prompt = Rc::clone(prompt);
        let title_selector = config.title_input_selector.clone();
        let message = config.title_required_message.clone();
        Box::new(move |event: &dyn DomEvent| {
            // Forms without a title control are not ours to police
            let Some(title) = form.query_selector(&title_selector).and_then(|input| input.value()) else {
                return;
            };
            if is_blank(&title) {
                event.prevent_default();
                prompt.alert(&message);
            }
        })
    })
}

/// Fit text areas to their content, including content rendered server-side
pub fn bind_auto_resize<D: DocumentHandle>(document: &D, config: &BinderConfig) -> usize {
    let mut bound = Vec::new();
    let count = bind_each(document, &config.auto_resize_selector, Affordance::AutoResize, EventKind::Input, |area| {
        bound.push(area.clone());
        let area = area.clone();
        Box::new(move |_event: &dyn DomEvent| fit_to_content(&area))
    });

    for area in bound {
        if let Err(e) = area.dispatch(EventKind::Input) {
            log::warn!("Initial resize failed: {}", e);
        }
    }
    count
}

/// Replace tag link navigation with a filtered task list
pub fn bind_tag_filters<D: DocumentHandle>(document: &D, config: &BinderConfig) -> usize {
    bind_each(document, &config.tag_link_selector, Affordance::TagFilter, EventKind::Click, |link| {
        let link = link.clone();
        let document = document.clone();
        let attribute = config.tag_attribute.clone();
        let path = config.filter_path.clone();
        Box::new(move |event: &dyn DomEvent| {
            event.prevent_default();
            let Some(tag) = link.attribute(&attribute).filter(|tag| !tag.is_empty()) else {
                return;
            };
            let url = tag_filter_url(&path, &tag);
            if let Err(e) = document.navigate(&url) {
                log::warn!("Navigation to {} failed: {}", url, e);
            }
        })
    })
}

/// Size `el` to exactly its content height
pub fn fit_to_content<E: ElementHandle>(el: &E) {
    // Collapse first so scrollHeight can shrink
    let result = el
        .set_style("height", "auto")
        .and_then(|()| el.set_style("height", &format!("{}px", el.scroll_height())));
    if let Err(e) = result {
        log::warn!("Resize failed: {}", e);
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Attach a handler built by `make_handler` to every unbound match of
/// `selector`. Returns how many elements were bound.
fn bind_each<D, F>(
    document: &D,
    selector: &str,
    affordance: Affordance,
    kind: EventKind,
    mut make_handler: F,
) -> usize
where
    D: DocumentHandle,
    F: FnMut(&D::Element) -> Handler,
{
    let mut count = 0;
    for el in document.query_selector_all(selector) {
        let marks = el.attribute(BOUND_ATTRIBUTE).unwrap_or_default();
        if marks.split_whitespace().any(|m| m == affordance.as_str()) {
            continue;
        }

        if let Err(e) = el.listen(kind, make_handler(&el)) {
            log::warn!("Could not bind {} on {}: {}", affordance.as_str(), selector, e);
            continue;
        }

        let marks = if marks.is_empty() {
            affordance.as_str().to_string()
        } else {
            format!("{} {}", marks, affordance.as_str())
        };
        if let Err(e) = el.set_attribute(BOUND_ATTRIBUTE, &marks) {
            log::debug!("Could not mark {} as bound: {}", selector, e);
        }
        count += 1;
    }
    log::debug!("{}: {} bound for {}", affordance.as_str(), count, selector);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(!is_blank("Buy milk"));
        assert!(!is_blank("  x  "));
    }

    #[test]
    fn test_report_total() {
        let report = BindReport {
            delete_confirmations: 2,
            form_validations: 1,
            auto_resizes: 3,
            tag_filters: 4,
        };
        assert_eq!(report.total(), 10);
    }
}
