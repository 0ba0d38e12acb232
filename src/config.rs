use std::env;

use url::Url;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://preprod.andamioscan.andamio.space";
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_base_url: String,
    pub http_bind_addr: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid UPSTREAM_BASE_URL: {0}")]
    InvalidUpstreamUrl(#[from] url::ParseError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        Url::parse(&upstream_base_url)?;

        let http_bind_addr =
            env::var("HTTP_BIND").unwrap_or_else(|_| DEFAULT_HTTP_BIND.to_string());

        Ok(Self {
            upstream_base_url,
            http_bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Process env is shared, so everything touching UPSTREAM_BASE_URL runs
    // in this one test.
    #[test]
    fn from_env_validates_upstream_base_url() {
        env::set_var("UPSTREAM_BASE_URL", "not a url");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUpstreamUrl(_)));
        assert!(err.to_string().contains("UPSTREAM_BASE_URL"));

        env::set_var("UPSTREAM_BASE_URL", "http://localhost:9999");
        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream_base_url, "http://localhost:9999");

        env::remove_var("UPSTREAM_BASE_URL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
    }
}
