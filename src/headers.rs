//! Header set construction.
//!
//! Every request starts from the two JSON defaults. Caller headers are then
//! applied on top: a caller entry replaces a default with the same
//! (case-insensitive) name, anything else is added as given.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// The `Content-Type` and `Accept` defaults sent with every request.
pub fn json_defaults() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_UTF8));
    headers
}

/// Merges caller headers over the JSON defaults.
///
/// When the caller repeats a name, the last value wins.
pub fn merge<'a, I>(caller: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut headers = json_defaults();
    for (name, value) in caller {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(format!("bad header name `{name}`")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidHeader(format!("bad value for header `{name}`")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_defaults_only() {
        let headers = merge(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[CONTENT_TYPE], JSON_UTF8);
        assert_eq!(headers[ACCEPT], JSON_UTF8);
    }

    #[test]
    fn test_caller_overrides_default_case_insensitively() {
        let headers = merge([("content-type", "text/plain")]).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn test_unrelated_header_is_added() {
        let headers = merge([("Authorization", "Bearer 123456")]).unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[AUTHORIZATION], "Bearer 123456");
        assert_eq!(headers[ACCEPT], JSON_UTF8);
    }

    #[test]
    fn test_invalid_name_and_value() {
        assert!(matches!(
            merge([("bad header", "x")]),
            Err(Error::InvalidHeader(_))
        ));
        assert!(matches!(
            merge([("X-Ok", "line\nbreak")]),
            Err(Error::InvalidHeader(_))
        ));
    }
}
