//! Page Selection
//!
//! The server renders one template per URL and loads the same bundle on each;
//! the path decides which page controller mounts.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Forms,
    Labels,
    NewLabel,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/labels" => Page::Labels,
            "/forms" => Page::Forms,
            "/labels/new" => Page::NewLabel,
            _ => Page::NotFound,
        }
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }
}

/// Query string of the current URL, including the leading `?`
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrite the query string in the address bar without navigating
pub fn replace_search(search: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    let url = format!("{}{}", path, search);
    if let Ok(history) = window.history() {
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            tracing::warn!(?err, %url, "history.replaceState failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/forms"), Page::Forms);
        assert_eq!(Page::from_path("/forms/"), Page::Forms);
        assert_eq!(Page::from_path("/labels"), Page::Labels);
        assert_eq!(Page::from_path("/"), Page::Labels);
        assert_eq!(Page::from_path("/labels/new"), Page::NewLabel);
        assert_eq!(Page::from_path("/health"), Page::NotFound);
    }
}
