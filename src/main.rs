//! mdtask Web UI Entry Point

use std::rc::Rc;

use dom_hooks::prompt::BrowserPrompt;
use dom_hooks::web::{on_dom_ready, BrowserDocument};
use mdtask_ui::{initialize, load_config, UiError, UiResult};

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = dom_hooks::logger::init(level);

    if let Err(e) = start() {
        log::error!("{}", e);
    }
}

fn start() -> UiResult<()> {
    let document = BrowserDocument::current()
        .ok_or_else(|| UiError::Dom("no document to bind to".to_string()))?;
    let prompt = Rc::new(BrowserPrompt::new(document.window().clone()));

    on_dom_ready(document, move |document| {
        let config = load_config(&document);
        initialize(&document, prompt, &config);
    })?;
    Ok(())
}
