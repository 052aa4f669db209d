//! Centralized configuration for Shopmate.
//!
//! All provider endpoints, credentials and tunables are defined here and built
//! once at startup, then passed explicitly to the services that need them.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Central configuration for all Shopmate components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ShopmateConfig {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub chat: ChatConfig,
    pub network: NetworkConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the API server to
    pub host: IpAddr,
    /// Port to bind the API server to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Socket address the server listens on.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Shopping search provider configuration.
///
/// Region, language and engine are fixed for the Brazilian storefront.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// SerpAPI credential; `None` disables search
    pub api_key: Option<String>,
    /// Provider base URL
    pub base_url: String,
    /// SerpAPI engine name
    pub engine: &'static str,
    /// Country code sent as `gl`
    pub country: &'static str,
    /// Interface language sent as `hl`
    pub language: &'static str,
    /// Maximum number of results requested
    pub result_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://serpapi.com".to_string(),
            engine: "google_shopping",
            country: "br",
            language: "pt",
            result_limit: 20,
        }
    }
}

/// LLM provider configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Gemini credential; `None` makes chat answer with a configuration notice
    pub api_key: Option<String>,
    /// Provider base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Ask the model for `application/json` output
    pub json_mode: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.4,
            json_mode: true,
        }
    }
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Per-request timeout for provider calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            user_agent: "shopmate/0.1.0",
        }
    }
}

impl ShopmateConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Loads a `.env` file from the working directory first when one exists.
    /// Empty secrets are treated as missing and unparseable numbers keep
    /// their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let secret = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        config.search.api_key = secret("SERPAPI_KEY");
        config.chat.api_key = secret("GEMINI_API_KEY");

        if let Some(url) = secret("SHOPMATE_SEARCH_URL") {
            config.search.base_url = url;
        }

        if let Some(limit) = lookup("SHOPMATE_SEARCH_LIMIT") {
            if let Ok(count) = limit.parse::<u32>() {
                config.search.result_limit = count;
            }
        }

        if let Some(url) = secret("SHOPMATE_GEMINI_URL") {
            config.chat.base_url = url;
        }

        if let Some(model) = secret("SHOPMATE_GEMINI_MODEL") {
            config.chat.model = model;
        }

        if let Some(temperature) = lookup("SHOPMATE_TEMPERATURE") {
            if let Ok(value) = temperature.parse::<f32>() {
                config.chat.temperature = value;
            }
        }

        if let Some(json_mode) = lookup("SHOPMATE_JSON_MODE") {
            if let Ok(enabled) = json_mode.parse::<bool>() {
                config.chat.json_mode = enabled;
            }
        }

        if let Some(timeout) = lookup("SHOPMATE_REQUEST_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.network.request_timeout = Duration::from_secs(seconds);
            }
        }

        if let Some(host) = lookup("SHOPMATE_HOST") {
            if let Ok(addr) = host.parse::<IpAddr>() {
                config.server.host = addr;
            }
        }

        if let Some(port) = lookup("SHOPMATE_PORT") {
            if let Ok(value) = port.parse::<u16>() {
                config.server.port = value;
            }
        }

        config
    }

    /// Creates a configuration for tests: loopback listener, short timeout,
    /// placeholder credentials.
    pub fn for_testing() -> Self {
        let mut config = Self::default();
        config.server.host = IpAddr::V4(Ipv4Addr::LOCALHOST);
        config.server.port = 0;
        config.search.api_key = Some("test-serpapi-key".to_string());
        config.chat.api_key = Some("test-gemini-key".to_string());
        config.network.request_timeout = Duration::from_secs(5);
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = ShopmateConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.search.engine, "google_shopping");
        assert_eq!(config.search.country, "br");
        assert_eq!(config.search.language, "pt");
        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.chat.model, "gemini-2.5-flash");
        assert_eq!(config.chat.temperature, 0.4);
        assert!(config.chat.json_mode);
        assert_eq!(config.network.request_timeout, Duration::from_secs(30));
        assert!(config.search.api_key.is_none());
        assert!(config.chat.api_key.is_none());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ShopmateConfig::from_lookup(lookup_from(&[
            ("SERPAPI_KEY", "serp"),
            ("GEMINI_API_KEY", "gem"),
            ("SHOPMATE_SEARCH_LIMIT", "5"),
            ("SHOPMATE_GEMINI_MODEL", "gemini-2.0-flash"),
            ("SHOPMATE_TEMPERATURE", "0.1"),
            ("SHOPMATE_JSON_MODE", "false"),
            ("SHOPMATE_REQUEST_TIMEOUT", "7"),
            ("SHOPMATE_HOST", "127.0.0.1"),
            ("SHOPMATE_PORT", "9000"),
        ]));

        assert_eq!(config.search.api_key.as_deref(), Some("serp"));
        assert_eq!(config.chat.api_key.as_deref(), Some("gem"));
        assert_eq!(config.search.result_limit, 5);
        assert_eq!(config.chat.model, "gemini-2.0-flash");
        assert_eq!(config.chat.temperature, 0.1);
        assert!(!config.chat.json_mode);
        assert_eq!(config.network.request_timeout, Duration::from_secs(7));
        assert_eq!(
            config.server.bind_address(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_blank_secrets_are_missing() {
        let config =
            ShopmateConfig::from_lookup(lookup_from(&[("SERPAPI_KEY", ""), ("GEMINI_API_KEY", "  ")]));

        assert!(config.search.api_key.is_none());
        assert!(config.chat.api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = ShopmateConfig::from_lookup(lookup_from(&[
            ("SHOPMATE_SEARCH_LIMIT", "many"),
            ("SHOPMATE_PORT", "99999"),
            ("SHOPMATE_REQUEST_TIMEOUT", "-1"),
        ]));

        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.network.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("SHOPMATE_GEMINI_MODEL", "gemini-env-model");
            std::env::set_var("SHOPMATE_PORT", "8123");
        }

        let config = ShopmateConfig::from_env();

        assert_eq!(config.chat.model, "gemini-env-model");
        assert_eq!(config.server.port, 8123);

        // Cleanup
        unsafe {
            std::env::remove_var("SHOPMATE_GEMINI_MODEL");
            std::env::remove_var("SHOPMATE_PORT");
        }
    }

    #[test]
    fn test_testing_preset() {
        let config = ShopmateConfig::for_testing();
        assert_eq!(config.server.port, 0);
        assert!(config.search.api_key.is_some());
        assert!(config.chat.api_key.is_some());
    }
}
