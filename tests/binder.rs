//! Binder Integration Tests
//!
//! Drives `initialize` against the in-memory DOM with scripted dialogs.

use std::rc::Rc;

use dom_hooks::memory::{MemoryDocument, MemoryElement, ScriptedPrompt, LINE_HEIGHT_PX, PADDING_PX};
use dom_hooks::{ElementHandle, EventKind};
use mdtask_ui::{initialize, BinderConfig, BindReport, BOUND_ATTRIBUTE};

fn setup(answers: impl IntoIterator<Item = bool>) -> (MemoryDocument, Rc<ScriptedPrompt>) {
    (MemoryDocument::new(), Rc::new(ScriptedPrompt::answering(answers)))
}

fn bind(doc: &MemoryDocument, prompt: &Rc<ScriptedPrompt>) -> BindReport {
    initialize(doc, prompt.clone(), &BinderConfig::default())
}

fn delete_button() -> MemoryElement {
    MemoryElement::new("button").with_class("delete-btn")
}

fn task_form(title: &str) -> MemoryElement {
    MemoryElement::new("form")
        .with_class("task-form")
        .with_child(MemoryElement::new("input").with_attr("name", "title").with_value(title))
        .with_child(MemoryElement::new("textarea").with_attr("name", "description"))
}

fn tag_link(tag: Option<&str>) -> MemoryElement {
    let link = MemoryElement::new("a").with_class("tag-link").with_attr("href", "#");
    match tag {
        Some(tag) => link.with_attr("data-tag", tag),
        None => link,
    }
}

fn auto_resize(content: &str) -> MemoryElement {
    MemoryElement::new("textarea").with_class("auto-resize").with_value(content)
}

fn content_height(lines: i32) -> String {
    format!("{}px", lines * LINE_HEIGHT_PX + PADDING_PX)
}

// ========================
// Delete confirmation
// ========================

#[test]
fn test_declined_delete_is_suppressed() {
    let (doc, prompt) = setup([false]);
    let button = doc.add(delete_button());
    bind(&doc, &prompt);

    assert!(!button.click());
    assert_eq!(prompt.confirms(), vec!["Are you sure you want to delete this task?"]);
}

#[test]
fn test_accepted_delete_goes_through() {
    let (doc, prompt) = setup([true]);
    let button = doc.add(delete_button());
    bind(&doc, &prompt);

    assert!(button.click());
    assert_eq!(prompt.confirms().len(), 1);
    assert!(doc.navigations().is_empty());
}

#[test]
fn test_each_delete_button_asks_independently() {
    let (doc, prompt) = setup([true, false]);
    let first = doc.add(delete_button());
    let second = doc.add(MemoryElement::new("form").with_class("delete-btn"));
    let report = bind(&doc, &prompt);

    assert_eq!(report.delete_confirmations, 2);
    assert!(first.click());
    assert!(!second.click());
}

// ========================
// Form validation
// ========================

#[test]
fn test_blank_titles_are_blocked() {
    for title in ["", "   ", "\t\n"] {
        let (doc, prompt) = setup([]);
        let form = doc.add(task_form(title));
        bind(&doc, &prompt);

        assert!(!form.submit(), "title {:?} should block", title);
        assert_eq!(prompt.alerts(), vec!["Title is required"]);
    }
}

#[test]
fn test_non_blank_title_submits() {
    let (doc, prompt) = setup([]);
    let form = doc.add(task_form("Buy milk"));
    bind(&doc, &prompt);

    assert!(form.submit());
    assert!(prompt.alerts().is_empty());
}

#[test]
fn test_title_is_read_at_submit_time() {
    let (doc, prompt) = setup([]);
    let form = doc.add(task_form("Buy milk"));
    bind(&doc, &prompt);

    let title = form.query_selector(r#"input[name="title"]"#).unwrap();
    title.set_value("  ");
    assert!(!form.submit());

    title.set_value("Buy bread");
    assert!(form.submit());
    assert_eq!(prompt.alerts().len(), 1);
}

#[test]
fn test_form_without_title_is_left_alone() {
    let (doc, prompt) = setup([]);
    let form = doc.add(
        MemoryElement::new("form")
            .with_class("task-form")
            .with_child(MemoryElement::new("input").with_attr("name", "tags")),
    );
    bind(&doc, &prompt);

    assert!(form.submit());
    assert!(prompt.alerts().is_empty());
}

// ========================
// Auto-resize
// ========================

#[test]
fn test_prefilled_textarea_is_sized_on_bind() {
    let (doc, prompt) = setup([]);
    let area = doc.add(auto_resize("line one\nline two\nline three"));
    bind(&doc, &prompt);

    assert_eq!(area.style("height"), Some(content_height(3)));
    assert_eq!(area.style("height"), Some(format!("{}px", area.scroll_height())));
}

#[test]
fn test_textarea_grows_and_shrinks_with_input() {
    let (doc, prompt) = setup([]);
    let area = doc.add(auto_resize(""));
    bind(&doc, &prompt);
    assert_eq!(area.style("height"), Some(content_height(1)));

    area.type_text("a\nb\nc\nd\ne");
    assert_eq!(area.style("height"), Some(content_height(5)));

    area.type_text("a\nb");
    assert_eq!(area.style("height"), Some(content_height(2)));
    assert_eq!(area.style("height"), Some(format!("{}px", area.scroll_height())));
}

#[test]
fn test_plain_textarea_is_not_resized() {
    let (doc, prompt) = setup([]);
    let area = doc.add(MemoryElement::new("textarea").with_value("a\nb"));
    let styled_div = doc.add(MemoryElement::new("div").with_class("auto-resize"));
    let report = bind(&doc, &prompt);

    assert_eq!(report.auto_resizes, 0);
    area.type_text("a\nb\nc");
    assert_eq!(area.style("height"), None);
    assert_eq!(styled_div.style("height"), None);
}

// ========================
// Tag filter navigation
// ========================

#[test]
fn test_tag_click_navigates_to_filter() {
    let (doc, prompt) = setup([]);
    let link = doc.add(tag_link(Some("urgent")));
    bind(&doc, &prompt);

    assert!(!link.click());
    assert_eq!(doc.navigations(), vec!["/?tags=urgent"]);
}

#[test]
fn test_tag_value_is_component_encoded() {
    let (doc, prompt) = setup([]);
    let link = doc.add(tag_link(Some("work/home")));
    bind(&doc, &prompt);

    link.click();
    assert_eq!(doc.navigations(), vec!["/?tags=work%2Fhome"]);
}

#[test]
fn test_tag_link_without_tag_only_suppresses() {
    let (doc, prompt) = setup([]);
    let missing = doc.add(tag_link(None));
    let empty = doc.add(tag_link(Some("")));
    bind(&doc, &prompt);

    assert!(!missing.click());
    assert!(!empty.click());
    assert!(doc.navigations().is_empty());
}

#[test]
fn test_filter_path_from_config() {
    let (doc, prompt) = setup([]);
    let link = doc.add(tag_link(Some("mdtask/status/WIP")));
    let config = BinderConfig::from_json(r#"{"filterPath": "/tasks"}"#).unwrap();
    initialize(&doc, prompt, &config);

    link.click();
    assert_eq!(doc.navigations(), vec!["/tasks?tags=mdtask%2Fstatus%2FWIP"]);
}

// ========================
// Page-level behavior
// ========================

#[test]
fn test_empty_page_binds_nothing() {
    let (doc, prompt) = setup([]);
    doc.add(MemoryElement::new("p").with_text("No tasks yet"));

    assert_eq!(bind(&doc, &prompt), BindReport::default());
}

#[test]
fn test_full_page_report() {
    let (doc, prompt) = setup([]);
    doc.add(delete_button());
    doc.add(delete_button());
    doc.add(task_form("Write report"));
    doc.add(auto_resize("notes"));
    doc.add(tag_link(Some("a")));
    doc.add(tag_link(Some("b")));
    doc.add(tag_link(Some("c")));

    let report = bind(&doc, &prompt);
    assert_eq!(
        report,
        BindReport {
            delete_confirmations: 2,
            form_validations: 1,
            auto_resizes: 1,
            tag_filters: 3,
        }
    );
}

#[test]
fn test_second_initialize_does_not_rebind() {
    let (doc, prompt) = setup([false, false]);
    let button = doc.add(delete_button());
    let link = doc.add(tag_link(Some("urgent")));

    let first = bind(&doc, &prompt);
    let second = bind(&doc, &prompt);

    assert_eq!(first.total(), 2);
    assert_eq!(second, BindReport::default());
    assert_eq!(button.listener_count(EventKind::Click), 1);

    assert!(!button.click());
    assert_eq!(prompt.confirms().len(), 1);

    link.click();
    assert_eq!(doc.navigations().len(), 1);
}

#[test]
fn test_reinitialize_picks_up_new_elements() {
    let (doc, prompt) = setup([]);
    doc.add(tag_link(Some("a")));
    bind(&doc, &prompt);

    let late = doc.add(tag_link(Some("b")));
    let report = bind(&doc, &prompt);
    assert_eq!(report.tag_filters, 1);

    late.click();
    assert_eq!(doc.navigations(), vec!["/?tags=b"]);
}

#[test]
fn test_bound_marker_lists_affordances() {
    let (doc, prompt) = setup([true]);
    let both = doc.add(tag_link(Some("x")).with_class("delete-btn"));
    bind(&doc, &prompt);

    assert_eq!(
        both.attribute(BOUND_ATTRIBUTE).as_deref(),
        Some("delete-confirm tag-filter")
    );
}
