//! Query serializer and URL assembly
//!
//! `serialize_pairs` produces the exact wire format the backend parses:
//! `landing:front` entries joined with `,`. Names are not escaped before
//! joining; the composed string is percent-encoded once as a whole query
//! value. A literal `:` or `,` inside a name is therefore ambiguous on the
//! wire, which is why validation rejects such names up front.

use crate::pairs::PairValues;
use lazy_static::lazy_static;
use regex::Regex;

/// Backend default when the page origin is unusable
pub const DEFAULT_SERVICE_ROOT: &str = "http://localhost:11200";

/// Fallback download name when neither header nor URL carries one
pub const DEFAULT_CONFIG_FILENAME: &str = "chain_subscription.yaml";

lazy_static! {
    static ref DISPOSITION_FILENAME_RE: Regex =
        Regex::new(r#"(?i)filename\*?=['"]?(?:UTF-\d['"]*)?([^;\r\n"']+)"#).unwrap();
}

/// Serialize complete pairs to the `manual_pairs` wire value.
///
/// Pure and total: pairs with a blank side are dropped, order is preserved,
/// empty or all-invalid input yields the empty string.
pub fn serialize_pairs(pairs: &[PairValues]) -> String {
    pairs
        .iter()
        .filter(|p| !p.landing.trim().is_empty() && !p.front.trim().is_empty())
        .map(|p| format!("{}:{}", p.landing.trim(), p.front.trim()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Trim the service root and strip one trailing slash
pub fn normalize_service_root(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

/// Compose the final configuration-download URL.
///
/// `manual_pairs` is appended only when at least one complete pair exists;
/// both query values are percent-encoded exactly once.
pub fn subscription_url(service_root: &str, remote_url: &str, pairs: &[PairValues]) -> String {
    let mut url = format!(
        "{}/subscription.yaml?remote_url={}",
        normalize_service_root(service_root),
        urlencoding::encode(remote_url.trim())
    );
    let serialized = serialize_pairs(pairs);
    if !serialized.is_empty() {
        url.push_str("&manual_pairs=");
        url.push_str(&urlencoding::encode(&serialized));
    }
    url
}

/// Endpoint for the auto-detect collaborator
pub fn auto_detect_url(service_root: &str, remote_url: &str) -> String {
    format!(
        "{}/api/auto_detect_pairs?remote_url={}",
        normalize_service_root(service_root),
        urlencoding::encode(remote_url.trim())
    )
}

/// Endpoint for the validate-configuration collaborator
pub fn validate_configuration_url(service_root: &str) -> String {
    format!(
        "{}/api/validate_configuration",
        normalize_service_root(service_root)
    )
}

/// Extract a filename from a `Content-Disposition` header value
pub fn filename_from_disposition(disposition: &str) -> Option<String> {
    let captured = DISPOSITION_FILENAME_RE
        .captures(disposition)?
        .get(1)?
        .as_str()
        .trim();
    if captured.is_empty() {
        return None;
    }
    match urlencoding::decode(captured) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(captured.to_string()),
    }
}

/// Extract a YAML filename from the URL path, if the last segment looks
/// like one
pub fn filename_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let last = path.rsplit('/').next()?;
    if last.ends_with(".yaml") || last.ends_with(".yml") {
        Some(last.to_string())
    } else {
        None
    }
}

/// Pick the download filename: header first, then URL path, then default
pub fn config_filename(disposition: Option<&str>, url: &str) -> String {
    disposition
        .and_then(filename_from_disposition)
        .or_else(|| filename_from_url(url))
        .unwrap_or_else(|| DEFAULT_CONFIG_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(landing: &str, front: &str) -> PairValues {
        PairValues::new(landing, front)
    }

    #[test]
    fn test_serialize_empty_input() {
        assert_eq!(serialize_pairs(&[]), "");
    }

    #[test]
    fn test_serialize_single_pair() {
        assert_eq!(serialize_pairs(&[pair("A", "B")]), "A:B");
    }

    #[test]
    fn test_serialize_multiple_pairs_keep_order() {
        assert_eq!(
            serialize_pairs(&[pair("A", "B"), pair("C", "D")]),
            "A:B,C:D"
        );
    }

    #[test]
    fn test_serialize_drops_blank_sides() {
        assert_eq!(serialize_pairs(&[pair("A", "")]), "");
        assert_eq!(serialize_pairs(&[pair("", "B"), pair("C", "D")]), "C:D");
    }

    #[test]
    fn test_serialize_trims_fields() {
        assert_eq!(serialize_pairs(&[pair(" A ", " B ")]), "A:B");
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let input = vec![pair("HK Landing", "HK Group"), pair("US", "US Auto")];
        assert_eq!(serialize_pairs(&input), serialize_pairs(&input));
    }

    #[test]
    fn test_normalize_service_root() {
        assert_eq!(
            normalize_service_root(" http://localhost:11200/ "),
            "http://localhost:11200"
        );
        assert_eq!(normalize_service_root("https://a.example"), "https://a.example");
    }

    #[test]
    fn test_subscription_url_with_pairs() {
        let url = subscription_url(
            "http://localhost:11200",
            "http://ex.com/s",
            &[pair("L1", "F1")],
        );
        assert_eq!(
            url,
            "http://localhost:11200/subscription.yaml?remote_url=http%3A%2F%2Fex.com%2Fs&manual_pairs=L1%3AF1"
        );
    }

    #[test]
    fn test_subscription_url_without_pairs() {
        let url = subscription_url("http://localhost:11200/", "http://ex.com/s", &[]);
        assert_eq!(
            url,
            "http://localhost:11200/subscription.yaml?remote_url=http%3A%2F%2Fex.com%2Fs"
        );
        assert!(!url.contains("manual_pairs"));
    }

    #[test]
    fn test_auto_detect_url() {
        assert_eq!(
            auto_detect_url("http://localhost:11200/", "http://ex.com/s"),
            "http://localhost:11200/api/auto_detect_pairs?remote_url=http%3A%2F%2Fex.com%2Fs"
        );
    }

    #[test]
    fn test_validate_configuration_url() {
        assert_eq!(
            validate_configuration_url("http://localhost:11200"),
            "http://localhost:11200/api/validate_configuration"
        );
    }

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition("attachment; filename=\"config.yaml\""),
            Some("config.yaml".to_string())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''my%20config.yaml"),
            Some("my config.yaml".to_string())
        );
        assert_eq!(filename_from_disposition("inline"), None);
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("http://h/subscription.yaml?remote_url=x"),
            Some("subscription.yaml".to_string())
        );
        assert_eq!(filename_from_url("http://h/api/detect"), None);
    }

    #[test]
    fn test_config_filename_fallback_chain() {
        assert_eq!(
            config_filename(Some("attachment; filename=a.yml"), "http://h/b.yaml"),
            "a.yml"
        );
        assert_eq!(config_filename(None, "http://h/b.yaml?q=1"), "b.yaml");
        assert_eq!(config_filename(None, "http://h/api"), DEFAULT_CONFIG_FILENAME);
    }
}
