use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

use crate::store::Database;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub data_dir: PathBuf,
    /// `None` means requests may wait forever.
    pub request_timeout: Option<Duration>,
    pub fence_recommendations: bool,
}

impl Config {
    pub fn new(
        backend_url: &str,
        data_dir: Option<PathBuf>,
        timeout_secs: Option<u64>,
        no_fence: bool,
    ) -> Result<Self> {
        let request_timeout = match timeout_secs {
            Some(0) => return Err(anyhow!("Request timeout must be at least 1 second")),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            backend_url: parse_backend_url(backend_url)?,
            data_dir: data_dir.unwrap_or_else(Database::default_data_dir),
            request_timeout,
            fence_recommendations: !no_fence,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("bridge.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("bridge.log")
    }
}

/// Base address the API paths are appended to: http(s), with a host, no query or fragment.
pub fn parse_backend_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("Invalid backend URL: '{}'", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("Backend URL must start with http:// or https://, got '{}'", raw));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(anyhow!("Backend URL has no host: '{}'", raw));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(anyhow!("Backend URL must not carry a query or fragment: '{}'", raw));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(DEFAULT_BACKEND_URL, Some(PathBuf::from("/tmp/bridge")), None, false).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8001/");
        assert_eq!(config.request_timeout, None);
        assert!(config.fence_recommendations);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/bridge/bridge.db"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/bridge/bridge.log"));
    }

    #[test]
    fn test_backend_url_normalized() {
        let config = Config::new(" https://jobs.example.vn/api-gw/ ", None, Some(30), true).unwrap();
        assert_eq!(config.backend_url.as_str(), "https://jobs.example.vn/api-gw/");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert!(!config.fence_recommendations);
    }

    #[test]
    fn test_backend_url_rejected() {
        assert!(Config::new("localhost:8001", None, None, false).is_err());
        assert!(Config::new("ftp://host", None, None, false).is_err());
        assert!(Config::new("http://", None, None, false).is_err());
    }

    #[test]
    fn test_backend_url_with_query_fragment_or_space_rejected() {
        for url in ["http://host?debug=1", "http://host/?", "http://host#frag", "http://exa mple.com"] {
            assert!(Config::new(url, None, None, false).is_err(), "accepted {url}");
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::new(DEFAULT_BACKEND_URL, None, Some(0), false).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
