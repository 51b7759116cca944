use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Process configuration, read once at start-up.
///
/// Values come from the process environment, with a `.env` file in the
/// working directory filling in whatever is not already set:
///
/// - `GEMINI_API_KEY` (required)
/// - `PORT` (default `5000`), `BIND_ADDR` (default `0.0.0.0`)
/// - `GEMINI_MODEL`, `GEMINI_BASE_URL`
/// - `STATIC_DIR` (default `public`)
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub model: String,
    pub base_url: String,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` plugs in dotenvy.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not set"))?;

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            _ => DEFAULT_PORT,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("invalid BIND_ADDR value: {raw:?}"))?,
            _ => DEFAULT_BIND_ADDR,
        };
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let base_url =
            lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            api_key,
            bind_addr,
            port,
            model,
            base_url,
            static_dir,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults_when_only_key_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(cfg.api_key, "k");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
        assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn reads_port_and_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.model, "gemini-1.5-flash");
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn ipv6_bind_addr_builds_a_bindable_socket_addr() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("BIND_ADDR", "::"),
            ("PORT", "5000"),
        ]))
        .unwrap();
        assert!(cfg.listen_addr().is_ipv6());
        assert_eq!(cfg.listen_addr().to_string(), "[::]:5000");
    }

    #[test]
    fn rejects_unparsable_bind_addr() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("BIND_ADDR", "localhost:80"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
