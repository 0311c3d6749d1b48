//! Browser test helpers

use std::sync::Mutex;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// mount `view` into a fresh `<div>` appended to the body
///
/// keep the handle alive for as long as the view should stay mounted.
pub fn mount<F, N>(view: F) -> (HtmlElement, impl Sized)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = leptos::mount::mount_to(root.clone(), view);
    (root, handle)
}

/// let spawned tasks and render effects run
pub async fn settle() {
    for _ in 0..3 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback(&resolve)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }
}

pub fn text(root: &HtmlElement) -> String {
    root.text_content().unwrap_or_default()
}

pub fn item_texts(root: &HtmlElement) -> Vec<String> {
    let items = root.query_selector_all("li").unwrap();
    (0..items.length())
        .filter_map(|i| items.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

/// point the browser location at `path` before mounting a router
pub fn navigate(path: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}

// ==============================================================================
// captured log output
// ==============================================================================

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Error
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// route error-level log records into a buffer readable by [`errors_logged`]
pub fn capture_errors() {
    // the first test to call this installs the logger; later calls are no-ops
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Error);
    }
}

/// error records logged so far that mention `needle`
pub fn errors_logged(needle: &str) -> Vec<String> {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}
