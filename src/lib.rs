//! Read and write the browser's cookie store.
//!
//! doc-cookies wraps `document.cookie` behind a small [CookieStore] trait so the same
//! code runs against the browser on `wasm32` and against [MemoryStore] everywhere else.
//!
//! # Features
//! - [CookieAccessor::read] parses the store into a name to value map, splitting each
//!   pair on its first `=` only.
//! - [CookieAccessor::write] renders a directive with `Secure; SameSite=Lax` and the
//!   [WriteOptions] flags in a fixed order: `max-age`, `expires-at`, delete, permanent.
//! - Typed cookies with JSON values through [cookies::Cookie] and the `#[cookie]` macro.
//!
//! # Usage
//! ```
//! use doc_cookies::{CookieAccessor, MemoryStore, WriteOptions};
//!
//! let store = MemoryStore::new();
//! let cookies = CookieAccessor::new(store.clone());
//!
//! cookies.write("lang", "en", &WriteOptions::new().max_age(60));
//! assert_eq!(
//!     store.last_directive().as_deref(),
//!     Some("lang=en; Secure; SameSite=Lax; max-age=60")
//! );
//! assert_eq!(cookies.read()["lang"], "en");
//!
//! cookies.write("lang", "en", &WriteOptions::new().del(true));
//! assert!(cookies.read().get("lang").is_none());
//! ```
//!
//! In the browser the free functions `read` and `write` use the document directly.
//! ```ignore
//! let theme = doc_cookies::read().get("theme").cloned();
//! doc_cookies::write("theme", "dark", &doc_cookies::WriteOptions::new().permanent(true));
//! ```
extern crate self as doc_cookies;

mod accessor;
pub mod cookies;
#[cfg(target_arch = "wasm32")]
mod document;
mod options;
mod parse;
mod storage;

pub use accessor::CookieAccessor;
pub use biscotti::time;
pub use doc_cookies_macros::cookie;
pub use options::{MaxAge, PERMANENT_EXPIRES, WriteOptions};
pub use parse::{CookieMap, pairs, parse};
pub use storage::{CookieStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use document::DocumentStore;

/// Reads every cookie of the current document.
#[cfg(target_arch = "wasm32")]
pub fn read() -> CookieMap {
    CookieAccessor::new(DocumentStore).read()
}

/// Writes one cookie on the current document. See [CookieAccessor::write].
#[cfg(target_arch = "wasm32")]
pub fn write(name: &str, value: &str, options: &WriteOptions) {
    CookieAccessor::new(DocumentStore).write(name, value, options)
}
