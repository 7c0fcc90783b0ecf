//! Client Configuration
//!
//! Where the task collection lives and how long feedback banners stay up.

/// Default collection endpoint
pub const DEFAULT_API_BASE: &str = "/api/tasks";

/// Banners auto-dismiss after this many milliseconds
pub const DEFAULT_BANNER_TIMEOUT_MS: u32 = 3_000;

/// `<meta name="taskboard-api-base" content="...">` overrides the endpoint
const API_BASE_META: &str = "taskboard-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub banner_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            banner_timeout_ms: DEFAULT_BANNER_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Default::default()
        }
    }

    /// Read overrides from the host page, falling back to defaults
    pub fn from_document() -> Self {
        let meta_base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match meta_base {
            Some(base) => Self::with_api_base(base),
            None => Self::default(),
        }
    }

    /// URL of the whole collection
    pub fn collection_url(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// URL of a single task resource
    pub fn task_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.collection_url(), "/api/tasks");
        assert_eq!(config.banner_timeout_ms, 3_000);
    }

    #[test]
    fn test_task_url_ignores_trailing_slash() {
        let config = ClientConfig::with_api_base("http://localhost:5000/api/tasks/");
        assert_eq!(config.collection_url(), "http://localhost:5000/api/tasks");
        assert_eq!(config.task_url(7), "http://localhost:5000/api/tasks/7");
    }
}
