//! App Configuration
//!
//! Resolved once at startup from the page the bundle is loaded into.

use std::str::FromStr;

use leptos_toast::ToastConfig;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::Level;

/// Unreserved characters stay readable in the address bar
const QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.');

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API paths, without trailing slash. Empty = same origin, relative URLs.
    pub api_base: String,
    pub log_level: Level,
    pub toast: ToastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: default_level(),
            toast: ToastConfig::default(),
        }
    }
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

impl AppConfig {
    /// Read origin, `<meta name="api-base">` and `?log=` from the current page
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let location = window.location();
        let origin = location.origin().ok();
        let search = location.search().unwrap_or_default();
        let meta_base = window
            .document()
            .and_then(|doc| doc.query_selector(r#"meta[name="api-base"]"#).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        Self::resolve(origin, meta_base, &search)
    }

    pub fn resolve(origin: Option<String>, meta_base: Option<String>, search: &str) -> Self {
        let api_base = meta_base
            .filter(|b| !b.trim().is_empty())
            .or(origin)
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/')
            .to_string();
        let log_level = query_param(search, "log")
            .and_then(|l| Level::from_str(&l).ok())
            .unwrap_or_else(default_level);
        Self {
            api_base,
            log_level,
            toast: ToastConfig::default(),
        }
    }

    /// Absolute (or same-origin) URL for an API path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Value of `key` in a `?a=b&c=d` query string, percent-decoded
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k) == key).then(|| decode(v))
        })
        .next()
}

/// Same query string with `key` set to `value`; other parameters keep their order
pub fn with_query_param(search: &str, key: &str, value: &str) -> String {
    let mut pairs: Vec<String> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| decode(pair.split('=').next().unwrap_or_default()) != key)
        .map(str::to_string)
        .collect();
    pairs.push(format!("{}={}", encode(key), encode(value)));
    format!("?{}", pairs.join("&"))
}

pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY).to_string()
}

fn decode(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?sort=unit", "sort"), Some("unit".to_string()));
        assert_eq!(query_param("?a=1&sort=short_name", "sort"), Some("short_name".to_string()));
        assert_eq!(query_param("?q=b%C3%A1l+en%C3%AD", "q"), Some("bál ení".to_string()));
        assert_eq!(query_param("", "sort"), None);
        assert_eq!(query_param("?sorting=x", "sort"), None);
    }

    #[test]
    fn test_with_query_param() {
        assert_eq!(with_query_param("", "sort", "unit"), "?sort=unit");
        assert_eq!(with_query_param("?sort=name&log=debug", "sort", "unit"), "?log=debug&sort=unit");
        assert_eq!(with_query_param("?a=1", "sort", "short_name"), "?a=1&sort=short_name");
    }

    #[test]
    fn test_resolve_base() {
        let config = AppConfig::resolve(Some("http://localhost:5000".into()), None, "");
        assert_eq!(config.url("/api/labels"), "http://localhost:5000/api/labels");

        let config = AppConfig::resolve(
            Some("http://localhost:5000".into()),
            Some("https://labels.example/".into()),
            "",
        );
        assert_eq!(config.url("/api/form"), "https://labels.example/api/form");

        let config = AppConfig::resolve(None, None, "");
        assert_eq!(config.url("/api/form"), "/api/form");
    }

    #[test]
    fn test_log_level_override() {
        let config = AppConfig::resolve(None, None, "?log=warn");
        assert_eq!(config.log_level, Level::WARN);
        let config = AppConfig::resolve(None, None, "?log=nonsense");
        assert_eq!(config.log_level, default_level());
    }
}
