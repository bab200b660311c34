//! Write options and directive rendering
use biscotti::time::SignedDuration;
use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// Expiry used for permanent cookies. Stays below the 32-bit timestamp overflow.
pub const PERMANENT_EXPIRES: &str = "Thu, 19 Jan 2038 00:00:00 GMT";

/// Value rendered into the `max-age` attribute.
///
/// Built from an integer, a numeric string, or a [SignedDuration] (whole seconds).
/// Strings are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxAge(Cow<'static, str>);

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! max_age_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MaxAge {
                fn from(value: $t) -> Self {
                    MaxAge(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}
max_age_from_int!(i32, i64, u32, u64, usize);

impl From<&'static str> for MaxAge {
    fn from(value: &'static str) -> Self {
        MaxAge(Cow::Borrowed(value))
    }
}
impl From<String> for MaxAge {
    fn from(value: String) -> Self {
        MaxAge(Cow::Owned(value))
    }
}
impl From<SignedDuration> for MaxAge {
    fn from(value: SignedDuration) -> Self {
        MaxAge(Cow::Owned(value.as_secs().to_string()))
    }
}

/// Flags applied to a single cookie write.
///
/// Every option is independent and they may be freely combined; nothing is rejected.
/// ```
/// use doc_cookies::WriteOptions;
///
/// let options = WriteOptions::new().max_age(60).permanent(true);
/// assert_eq!(
///     options.directive("a", "1"),
///     "a=1; Secure; SameSite=Lax; max-age=60; expires=Thu, 19 Jan 2038 00:00:00 GMT"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    max_age: Option<MaxAge>,
    expires_at: Option<String>,
    del: bool,
    permanent: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }
    #[inline]
    pub fn max_age<T: Into<MaxAge>>(mut self, value: T) -> Self {
        self.max_age = Some(value.into());
        self
    }
    /// Sets the `expires-at` attribute. This is not the standard `Expires` attribute;
    /// browsers keep the cookie for the session and ignore the marker.
    #[inline]
    pub fn expires_at<T: Into<String>>(mut self, value: T) -> Self {
        self.expires_at = Some(value.into());
        self
    }
    /// Appends `max-age=0` so the browser drops the cookie immediately.
    #[inline]
    pub fn del(mut self, value: bool) -> Self {
        self.del = value;
        self
    }
    #[inline]
    pub fn permanent(mut self, value: bool) -> Self {
        self.permanent = value;
        self
    }

    pub fn is_del(&self) -> bool {
        self.del
    }
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// Renders the directive string assigned to the cookie store.
    ///
    /// Fragments always come out in the order max-age, expires-at, delete, permanent.
    pub fn directive(&self, name: &str, value: &str) -> String {
        let mut directive = format!("{name}={value}; Secure; SameSite=Lax");

        // Writing into a String cannot fail
        if let Some(max_age) = &self.max_age {
            let _ = write!(directive, "; max-age={max_age}");
        }
        if let Some(expires_at) = &self.expires_at {
            let _ = write!(directive, "; expires-at={expires_at}");
        }
        if self.del {
            directive.push_str("; max-age=0");
        }
        if self.permanent {
            let _ = write!(directive, "; expires={PERMANENT_EXPIRES}");
        }
        directive
    }
}
