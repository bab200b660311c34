//! Reading and writing cookies through a [CookieStore]
use crate::options::WriteOptions;
use crate::parse::{CookieMap, parse};
use crate::storage::CookieStore;

/// Reads and writes cookies on a [CookieStore].
///
/// # Example
/// ```
/// use doc_cookies::{CookieAccessor, MemoryStore, WriteOptions};
///
/// let cookies = CookieAccessor::new(MemoryStore::new());
///
/// cookies.write("theme", "dark", &WriteOptions::new().permanent(true));
/// assert_eq!(cookies.read().get("theme").map(String::as_str), Some("dark"));
///
/// cookies.delete("theme");
/// assert!(cookies.read().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CookieAccessor<S> {
    store: S,
}

impl<S: CookieStore> CookieAccessor<S> {
    pub fn new(store: S) -> Self {
        CookieAccessor { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of every cookie in the store. Nothing is cached between calls.
    pub fn read(&self) -> CookieMap {
        let raw = self.store.get();
        log::trace!("Reading cookie store ({} bytes)", raw.len());
        parse(&raw)
    }

    /// Value of a single cookie from a fresh snapshot.
    pub fn get(&self, name: &str) -> Option<String> {
        self.read().remove(name)
    }

    /// Writes one cookie. Name and value are not encoded.
    ///
    /// `Secure` and `SameSite=Lax` are always set, so a store outside a secure context
    /// drops the write. Nothing reports whether the store accepted it.
    pub fn write(&self, name: &str, value: &str, options: &WriteOptions) {
        let directive = options.directive(name, value);
        log::debug!("Writing cookie directive `{directive}`");
        self.store.set(&directive);
    }

    /// Asks the store to drop `name` right away.
    pub fn delete(&self, name: &str) {
        self.write(name, "", &WriteOptions::new().del(true));
    }
}
