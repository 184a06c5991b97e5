//! Which status codes count as success.

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Success rule applied to every response before decoding.
///
/// Older revisions of this client disagreed: most accepted any 2xx, one GET
/// path accepted only 200. The default is the 2xx range; the stricter rules
/// are opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// `200 <= status < 300` for every method.
    #[default]
    Success2xx,
    /// GET needs exactly `200`; other methods use the 2xx range.
    ExactOkForGet,
    /// Every method needs exactly `200`.
    ExactOk,
}

impl StatusPolicy {
    pub fn accepts(self, method: &Method, status: u16) -> bool {
        match self {
            StatusPolicy::Success2xx => is_success(status),
            StatusPolicy::ExactOkForGet if *method == Method::GET => status == 200,
            StatusPolicy::ExactOkForGet => is_success(status),
            StatusPolicy::ExactOk => status == 200,
        }
    }
}

/// `true` for the inclusive-exclusive range `[200, 300)`.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range_boundaries() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(300));
        assert!(!is_success(404));
    }

    #[test]
    fn test_exact_ok_for_get_only_tightens_get() {
        let policy = StatusPolicy::ExactOkForGet;
        assert!(policy.accepts(&Method::GET, 200));
        assert!(!policy.accepts(&Method::GET, 201));
        assert!(policy.accepts(&Method::POST, 201));
        assert!(policy.accepts(&Method::PATCH, 204));
    }

    #[test]
    fn test_exact_ok_everywhere() {
        let policy = StatusPolicy::ExactOk;
        assert!(policy.accepts(&Method::PUT, 200));
        assert!(!policy.accepts(&Method::PUT, 202));
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: StatusPolicy = serde_json::from_str(r#""exact_ok_for_get""#).unwrap();
        assert_eq!(policy, StatusPolicy::ExactOkForGet);
        assert_eq!(StatusPolicy::default(), StatusPolicy::Success2xx);
    }
}
