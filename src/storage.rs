//! The cookie store seam and its in-memory implementation
use std::{cell::RefCell, rc::Rc};

use biscotti::time::{Timestamp, fmt::rfc2822};

use crate::parse::pairs;

/// The ambient cookie store: one serialized string to read, one directive per write.
///
/// Writes are fire and forget. A store that rejects a directive does so silently,
/// the way a browser does.
pub trait CookieStore {
    /// Returns every live cookie serialized as `name=value` pairs joined by `"; "`.
    fn get(&self) -> String;
    /// Applies a single cookie directive.
    fn set(&self, directive: &str);
}

impl<S: CookieStore + ?Sized> CookieStore for &S {
    fn get(&self) -> String {
        (**self).get()
    }
    fn set(&self, directive: &str) {
        (**self).set(directive)
    }
}

impl<S: CookieStore + ?Sized> CookieStore for Rc<S> {
    fn get(&self) -> String {
        (**self).get()
    }
    fn set(&self, directive: &str) {
        (**self).set(directive)
    }
}

/// In-memory cookie store that applies directives like a browser would.
///
/// Cloning is cheap and every clone sees the same cookies, so a test can keep one
/// handle for inspection while the accessor owns another.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    secure_context: bool,
    jar: Rc<RefCell<Vec<(String, String)>>>,
    directives: Rc<RefCell<Vec<String>>>,
}

impl MemoryStore {
    /// An empty store in a secure context.
    pub fn new() -> Self {
        MemoryStore {
            secure_context: true,
            jar: Rc::new(RefCell::new(Vec::new())),
            directives: Rc::new(RefCell::new(Vec::new())),
        }
    }
    /// An empty store behaving like a page served over plain http: `Secure` writes are dropped.
    pub fn insecure() -> Self {
        MemoryStore {
            secure_context: false,
            ..MemoryStore::new()
        }
    }
    /// A secure store seeded from a serialized cookie string. Duplicate names are kept.
    pub fn from_raw(raw: &str) -> Self {
        let store = MemoryStore::new();
        store.jar.borrow_mut().extend(
            pairs(raw).map(|(name, value)| (name.to_string(), value.to_string())),
        );
        store
    }

    /// Every directive handed to [CookieStore::set], including dropped ones.
    pub fn directives(&self) -> Vec<String> {
        self.directives.borrow().clone()
    }
    pub fn last_directive(&self) -> Option<String> {
        self.directives.borrow().last().cloned()
    }
    pub fn len(&self) -> usize {
        self.jar.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.jar.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

/// What a directive asks the store to do once its attributes are resolved.
#[derive(Debug, PartialEq)]
struct Parsed<'d> {
    name: &'d str,
    value: &'d str,
    secure: bool,
    expired: bool,
}

fn parse_directive(directive: &str) -> Option<Parsed<'_>> {
    let mut segments = directive.split(';');
    let (name, value) = segments.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut secure = false;
    let mut max_age: Option<i64> = None;
    let mut expires_passed: Option<bool> = None;

    for attribute in segments {
        let (key, attribute_value) = match attribute.split_once('=') {
            Some((key, attribute_value)) => (key.trim(), attribute_value.trim()),
            None => (attribute.trim(), ""),
        };

        if key.eq_ignore_ascii_case("secure") {
            secure = true;
        } else if key.eq_ignore_ascii_case("max-age") {
            // Invalid values are ignored, the last valid one wins
            if let Ok(seconds) = attribute_value.parse::<i64>() {
                max_age = Some(seconds);
            }
        } else if key.eq_ignore_ascii_case("expires") {
            if let Ok(date) = rfc2822::parse(attribute_value) {
                expires_passed = Some(date.timestamp() <= Timestamp::now());
            }
        }
    }

    // max-age takes precedence over expires regardless of order
    let expired = match max_age {
        Some(seconds) => seconds <= 0,
        None => expires_passed.unwrap_or(false),
    };

    Some(Parsed {
        name,
        value: value.trim(),
        secure,
        expired,
    })
}

impl CookieStore for MemoryStore {
    fn get(&self) -> String {
        self.jar
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set(&self, directive: &str) {
        self.directives.borrow_mut().push(directive.to_string());

        let Some(parsed) = parse_directive(directive) else {
            log::debug!("Ignoring malformed cookie directive `{directive}`");
            return;
        };

        if parsed.secure && !self.secure_context {
            log::debug!(
                "Dropping secure cookie `{}` in an insecure context",
                parsed.name
            );
            return;
        }

        let mut jar = self.jar.borrow_mut();

        if parsed.expired {
            log::trace!("Expiring cookie `{}`", parsed.name);
            jar.retain(|(name, _)| name != parsed.name);
            return;
        }

        match jar.iter_mut().find(|(name, _)| name == parsed.name) {
            Some(entry) => entry.1 = parsed.value.to_string(),
            None => jar.push((parsed.name.to_string(), parsed.value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CookieStore, MemoryStore, parse_directive};

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();

        store.set("a=1; Secure; SameSite=Lax");
        store.set("b=2; Secure; SameSite=Lax");

        assert_eq!(store.get(), "a=1; b=2");
    }
    #[test]
    fn overwrite_keeps_position() {
        let store = MemoryStore::from_raw("a=1; b=2");

        store.set("a=3; Secure");

        assert_eq!(store.get(), "a=3; b=2");
    }
    #[test]
    fn last_max_age_wins() {
        let store = MemoryStore::new();

        store.set("a=1; max-age=0; max-age=60");
        assert_eq!(store.get(), "a=1");

        store.set("a=1; max-age=60; max-age=0");
        assert_eq!(store.get(), "");
    }
    #[test]
    fn max_age_beats_expires() {
        let store = MemoryStore::new();

        store.set("a=1; max-age=0; expires=Thu, 19 Jan 2038 00:00:00 GMT");

        assert!(store.is_empty());
    }
    #[test]
    fn past_expires_deletes() {
        let store = MemoryStore::from_raw("a=1");

        store.set("a=1; expires=Thu, 01 Jan 1970 00:00:00 GMT");

        assert!(store.is_empty());
    }
    #[test]
    fn future_expires_keeps() {
        let store = MemoryStore::new();

        store.set("a=1; expires=Thu, 19 Jan 2038 00:00:00 GMT");

        assert_eq!(store.get(), "a=1");
    }
    #[test]
    fn unknown_attributes_are_ignored() {
        let store = MemoryStore::new();

        store.set("a=1; expires-at=yesterday; max-age=abc");

        assert_eq!(store.get(), "a=1");
    }
    #[test]
    fn insecure_context_drops_secure_writes() {
        let store = MemoryStore::insecure();

        store.set("a=1; Secure; SameSite=Lax");
        store.set("b=2");

        assert_eq!(store.get(), "b=2");
        assert_eq!(store.directives().len(), 2);
    }
    #[test]
    fn malformed_directive_is_recorded_but_not_applied() {
        let store = MemoryStore::new();

        store.set("; Secure");

        assert!(store.is_empty());
        assert_eq!(store.last_directive().as_deref(), Some("; Secure"));
    }
    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("a=1");

        assert_eq!(handle.get(), "a=1");
        assert_eq!(handle.len(), 1);
    }
    #[test]
    fn directive_value_keeps_equals() {
        let parsed = parse_directive("t=a=b; Secure").unwrap();

        assert_eq!(parsed.name, "t");
        assert_eq!(parsed.value, "a=b");
        assert!(parsed.secure);
        assert!(!parsed.expired);
    }
}
