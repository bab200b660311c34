//! Typed cookies on top of [CookieAccessor]
use crate::accessor::CookieAccessor;
use crate::options::WriteOptions;
use crate::parse::pairs;
use crate::storage::CookieStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::any::type_name;
use std::marker::PhantomData;
use thiserror::Error;

/// The error returned by the [IncomingConfig] get methods
#[derive(Error, Debug, PartialEq)]
pub enum CookieError {
    #[error("`{0}` does not exist")]
    NotFound(String),
    #[error("Failed to deserialize `{0}` to type `{1}`")]
    Deserialization(String, String),
}

/// A cookie of type `T` read from and written to the store behind a [CookieAccessor].
///
/// Values are stored as percent-encoded JSON, so strings containing `;`, `,` or spaces
/// survive the round trip. The cookie name is percent-encoded the same way.
pub struct Cookie<'a, T, S> {
    accessor: &'a CookieAccessor<S>,
    options: Option<WriteOptions>,
    _marker: PhantomData<T>,
}

impl<'a, T, S> Cookie<'a, T, S> {
    /// Create a cookie instance for any generic type parameter
    pub fn new(accessor: &'a CookieAccessor<S>) -> Self {
        Cookie {
            accessor,
            options: None,
            _marker: PhantomData,
        }
    }
    /// Replaces the options preset by [OutgoingConfig::options] for this instance
    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = Some(options);
        self
    }
}

fn decode<G: DeserializeOwned>(raw: &str) -> Result<G, CookieError> {
    let deserialization_error =
        || CookieError::Deserialization(raw.to_string(), type_name::<G>().to_string());

    let decoded = urlencoding::decode(raw).map_err(|_| deserialization_error())?;
    serde_json::from_str(&decoded).map_err(|_| deserialization_error())
}

/// Provide `get` and `get_all` for any generic type parameter that implements [IncomingConfig]
impl<T: IncomingConfig, S: CookieStore> Cookie<'_, T, S> {
    /// Reads the cookie named by [CookieName] and deserializes it into `T::Get`.
    ///
    /// When the store holds the name more than once, the last value wins.
    /// # Example
    /// ```
    /// use doc_cookies::cookies::{Cookie, IncomingConfig};
    /// use doc_cookies::{CookieAccessor, MemoryStore, cookie};
    ///
    /// #[cookie(name = "visits")]
    /// pub struct Visits;
    ///
    /// impl IncomingConfig for Visits {
    ///     type Get = u32;
    /// }
    ///
    /// let accessor = CookieAccessor::new(MemoryStore::from_raw("visits=3"));
    /// assert_eq!(Cookie::<Visits, _>::new(&accessor).get(), Ok(3));
    /// ```
    pub fn get(&self) -> Result<T::Get, CookieError> {
        let name = urlencoding::encode(T::COOKIE_NAME);
        let raw = self
            .accessor
            .get(&name)
            .ok_or(CookieError::NotFound(T::COOKIE_NAME.to_string()))?;

        decode(&raw)
    }

    /// Reads every value stored under the cookie name, in store order.
    pub fn get_all(&self) -> Result<Vec<T::Get>, CookieError> {
        let name = urlencoding::encode(T::COOKIE_NAME);
        let raw = self.accessor.store().get();

        let result = pairs(&raw)
            .filter(|(cookie_name, _)| *cookie_name == name)
            .map(|(_, value)| decode(value))
            .collect::<Result<Vec<_>, _>>()?;

        if result.is_empty() {
            return Err(CookieError::NotFound(T::COOKIE_NAME.to_string()));
        }
        Ok(result)
    }
}

/// Provide `insert` and `remove` for any generic type parameter that implements [OutgoingConfig]
impl<T: OutgoingConfig, S: CookieStore> Cookie<'_, T, S> {
    fn options(&self) -> WriteOptions {
        match &self.options {
            Some(options) => options.clone(),
            None => T::options(),
        }
    }

    /// Serializes `value` and writes it with the cookie's options.
    /// # Example
    /// ```
    /// use doc_cookies::cookies::{Cookie, OutgoingConfig};
    /// use doc_cookies::{CookieAccessor, MemoryStore, cookie};
    ///
    /// #[cookie(name = "theme")]
    /// pub struct Theme;
    ///
    /// impl OutgoingConfig for Theme {
    ///     type Insert = String;
    /// }
    ///
    /// let store = MemoryStore::new();
    /// let accessor = CookieAccessor::new(store.clone());
    /// Cookie::<Theme, _>::new(&accessor).insert("dark".to_string());
    ///
    /// assert_eq!(
    ///     store.last_directive().as_deref(),
    ///     Some("theme=%22dark%22; Secure; SameSite=Lax")
    /// );
    /// ```
    pub fn insert(&self, value: T::Insert) {
        let data = T::serialize(value).to_string();

        self.accessor.write(
            &urlencoding::encode(T::COOKIE_NAME),
            &urlencoding::encode(&data),
            &self.options(),
        );
    }

    /// Writes an empty value with `max-age=0` on top of the cookie's options.
    pub fn remove(&self) {
        self.accessor.write(
            &urlencoding::encode(T::COOKIE_NAME),
            "",
            &self.options().del(true),
        );
    }
}

/// Customizes `insert` and `remove` on [Cookie].
///
/// ```
/// use doc_cookies::cookies::OutgoingConfig;
/// use doc_cookies::{WriteOptions, cookie};
///
/// #[cookie(name = "__remember-me")]
/// pub struct RememberMe;
///
/// impl OutgoingConfig for RememberMe {
///     type Insert = bool;
///
///     fn options() -> WriteOptions {
///         WriteOptions::new().permanent(true)
///     }
/// }
/// ```
pub trait OutgoingConfig: CookieName {
    /// The serialization type when writing a cookie
    type Insert: Serialize;

    /// Default serialization of the value. Can be overridden
    fn serialize(values: Self::Insert) -> Value {
        json!(values)
    }

    /// Options used for every write of this cookie. Can be overridden
    fn options() -> WriteOptions {
        WriteOptions::default()
    }
}

/// Provides `get` and `get_all` on [Cookie].
pub trait IncomingConfig: CookieName {
    /// The deserialization type when reading a cookie
    type Get: DeserializeOwned;
}

/// Base of every cookie type.
///
/// Implemented by hand or with `#[cookie(name = "...")]`
pub trait CookieName {
    const COOKIE_NAME: &'static str;
}
