//! Server Configuration
//!
//! Read from the environment:
//! - `TASKBOARD_ADDR`: listen address (default `127.0.0.1:5000`)
//! - `TASKBOARD_DB`: SQLite path, `:memory:` allowed (default `taskboard.db`)
//! - `TASKBOARD_STATIC_DIR`: built front end to serve (default `dist` if present)

use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DB: &str = "taskboard.db";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub db_path: PathBuf,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let static_dir = match get("TASKBOARD_STATIC_DIR") {
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from(DEFAULT_STATIC_DIR)).filter(|p| p.is_dir()),
        };

        Self {
            addr: get("TASKBOARD_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            db_path: PathBuf::from(get("TASKBOARD_DB").unwrap_or_else(|| DEFAULT_DB.to_string())),
            static_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TASKBOARD_ADDR", "0.0.0.0:8080"),
            ("TASKBOARD_DB", "  "),
            ("TASKBOARD_STATIC_DIR", "web/dist"),
        ]));
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB));
        assert_eq!(config.static_dir, Some(PathBuf::from("web/dist")));
    }
}
