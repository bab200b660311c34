//! `document.cookie` binding for browser builds
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::storage::CookieStore;

/// The browser's cookie store for the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentStore;

impl DocumentStore {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieStore for DocumentStore {
    fn get(&self) -> String {
        Self::document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn set(&self, directive: &str) {
        let Some(document) = Self::document() else {
            log::warn!("No document available, cookie write skipped");
            return;
        };
        if let Err(e) = document.set_cookie(directive) {
            log::warn!("Browser rejected cookie write: {e:?}");
        }
    }
}
