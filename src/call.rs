//! Where a request goes and which extra headers it carries.
//!
//! [`Call`] is the single configuration object every client operation takes.
//! A bare URL string, a parsed [`Url`] and a fully prepared `Call` all
//! convert into it, so there is one entry point per verb instead of one per
//! call shape.

use reqwest::Url;
use url::ParseError;

use crate::error::Error;

/// Destination of a request before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Text to be parsed when the call runs. May be relative to the
    /// client's base URL.
    Raw(String),
    /// Already parsed absolute URL.
    Url(Url),
}

impl Target {
    /// Resolves to an absolute `http`/`https` URL.
    ///
    /// Relative targets are joined onto `base`; without a base they are
    /// rejected. A relative target containing whitespace or `://` is
    /// malformed rather than relative and is rejected even with a base.
    pub fn resolve(&self, base: Option<&Url>) -> Result<Url, Error> {
        let url = match self {
            Target::Url(url) => url.clone(),
            Target::Raw(raw) if raw.trim().is_empty() => {
                return Err(Error::InvalidTarget(raw.clone()));
            }
            Target::Raw(raw) => match (Url::parse(raw), base) {
                (Ok(url), _) => url,
                (Err(ParseError::RelativeUrlWithoutBase), Some(_)) if looks_malformed(raw) => {
                    return Err(Error::InvalidTarget(raw.clone()));
                }
                (Err(ParseError::RelativeUrlWithoutBase), Some(base)) => base
                    .join(raw)
                    .map_err(|_| Error::InvalidTarget(raw.clone()))?,
                (Err(_), _) => return Err(Error::InvalidTarget(raw.clone())),
            },
        };

        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(Error::InvalidTarget(url.to_string())),
        }
    }
}

fn looks_malformed(raw: &str) -> bool {
    raw.chars().any(char::is_whitespace) || raw.contains("://")
}

/// One request's target plus caller-supplied headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: Target,
    pub headers: Vec<(String, String)>,
}

impl Call {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            headers: Vec::new(),
        }
    }

    /// Adds one header. Later entries win over earlier ones and over the
    /// JSON defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Shorthand for `Authorization: Bearer <token>`.
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    pub(crate) fn header_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&str> for Target {
    fn from(raw: &str) -> Self {
        Target::Raw(raw.to_string())
    }
}

impl From<String> for Target {
    fn from(raw: String) -> Self {
        Target::Raw(raw)
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Target::Url(url)
    }
}

impl From<&str> for Call {
    fn from(raw: &str) -> Self {
        Call::new(raw)
    }
}

impl From<String> for Call {
    fn from(raw: String) -> Self {
        Call::new(raw)
    }
}

impl From<Url> for Call {
    fn from(url: Url) -> Self {
        Call::new(url)
    }
}

impl From<Target> for Call {
    fn from(target: Target) -> Self {
        Call::new(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:3000/api/").unwrap()
    }

    #[test]
    fn test_absolute_target() {
        let url = Target::from("https://example.com/users?id=1")
            .resolve(None)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/users?id=1");
    }

    #[test]
    fn test_relative_target_needs_base() {
        let err = Target::from("/test").resolve(None).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(ref t) if t == "/test"));

        let url = Target::from("/test").resolve(Some(&base())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/test");

        let url = Target::from("users/7").resolve(Some(&base())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/users/7");
    }

    #[test]
    fn test_malformed_targets() {
        for raw in ["", "   ", "http://", "ht tp://x", "ftp://example.com/file", "mailto:a@b.c"] {
            assert!(
                matches!(Target::from(raw).resolve(None), Err(Error::InvalidTarget(_))),
                "{raw:?} should be rejected"
            );
        }
        for raw in ["", "ht tp://x", "/users/ 7", "bad\tpath", "ht_tp://x"] {
            assert!(
                matches!(Target::from(raw).resolve(Some(&base())), Err(Error::InvalidTarget(_))),
                "{raw:?} should be rejected with a base"
            );
        }
        let url = Target::from("search?q=a%20b").resolve(Some(&base())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/search?q=a%20b");
    }

    #[test]
    fn test_call_builder_keeps_header_order() {
        let call = Call::new("https://example.com")
            .header("X-One", "1")
            .headers([("X-Two", "2")])
            .bearer("abc");
        let pairs: Vec<_> = call.header_pairs().collect();
        assert_eq!(
            pairs,
            vec![("X-One", "1"), ("X-Two", "2"), ("Authorization", "Bearer abc")]
        );
    }
}
