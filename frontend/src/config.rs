const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Runtime settings shared through the component tree.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Uses `METAS_API_URL` when it was set at build time.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("METAS_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = AppConfig::with_base_url("http://api.local:9000//");
        assert_eq!(config.api_base_url, "http://api.local:9000");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(AppConfig::with_base_url("  ").api_base_url, "http://localhost:8080");
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:8080");
    }
}
