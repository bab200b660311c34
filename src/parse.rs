//! Parsing of the serialized cookie string
use std::collections::HashMap;

/// Snapshot of the cookie store, name to value.
pub type CookieMap = HashMap<String, String>;

/// Iterates the `name=value` pairs of a serialized cookie string in store order.
///
/// Pairs are separated by `;` with one optional following space. Only the first `=`
/// separates name from value; a token without `=` yields an empty value. Empty tokens
/// are skipped.
pub fn pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';')
        .map(|token| token.strip_prefix(' ').unwrap_or(token))
        .filter(|token| !token.is_empty())
        .map(|token| token.split_once('=').unwrap_or((token, "")))
}

/// Builds a [CookieMap] from a serialized cookie string. Later duplicates win.
pub fn parse(raw: &str) -> CookieMap {
    pairs(raw)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
