//! Static API key credentials.

use std::fmt;

/// A static API key for an upstream service.
///
/// The key is never printed by `Debug` or `Display`; use [`ApiKey::expose`]
/// at the single point where it is written into a request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a key from an optional value, treating blank strings as absent.
    pub fn from_optional(key: Option<impl Into<String>>) -> Option<Self> {
        key.map(Into::into)
            .filter(|key: &String| !key.trim().is_empty())
            .map(Self)
    }

    /// Returns the raw key value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("secret-value");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.to_string(), "***");
        assert_eq!(key.expose(), "secret-value");
    }

    #[test]
    fn test_from_optional() {
        assert!(ApiKey::from_optional(None::<String>).is_none());
        assert!(ApiKey::from_optional(Some("   ")).is_none());
        assert_eq!(
            ApiKey::from_optional(Some("abc")).map(|k| k.expose().to_owned()),
            Some("abc".to_owned())
        );
    }
}
