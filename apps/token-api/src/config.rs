use std::fmt;

/// Default LiveKit server URL, used for logging and by clients.
pub const DEFAULT_LIVEKIT_HOST: &str = "ws://localhost:7880";
pub const DEFAULT_LIVEKIT_API_KEY: &str = "devkey";
pub const DEFAULT_LIVEKIT_API_SECRET: &str = "secret";
pub const DEFAULT_PORT: u16 = 8080;

/// Token API configuration, loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// The LiveKit server the issued tokens are meant for (e.g. `ws://localhost:7880`).
    pub livekit_host: String,
    /// API key, embedded as the token issuer.
    pub livekit_api_key: String,
    /// API secret, used as the HS256 signing key.
    pub livekit_api_secret: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Never fails: unset or empty variables fall back to the dev defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            livekit_host: var("LIVEKIT_HOST", DEFAULT_LIVEKIT_HOST),
            livekit_api_key: var("LIVEKIT_API_KEY", DEFAULT_LIVEKIT_API_KEY),
            livekit_api_secret: var("LIVEKIT_API_SECRET", DEFAULT_LIVEKIT_API_SECRET),
            port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("livekit_host", &self.livekit_host)
            .field("livekit_api_key", &self.livekit_api_key)
            .field("livekit_api_secret", &"[redacted]")
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_map(&[]);
        assert_eq!(config.livekit_host, "ws://localhost:7880");
        assert_eq!(config.livekit_api_key, "devkey");
        assert_eq!(config.livekit_api_secret, "secret");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = from_map(&[
            ("LIVEKIT_HOST", "wss://lk.example.com"),
            ("LIVEKIT_API_KEY", "APIabc"),
            ("LIVEKIT_API_SECRET", "s3cr3t"),
            ("PORT", "9000"),
        ]);
        assert_eq!(config.livekit_host, "wss://lk.example.com");
        assert_eq!(config.livekit_api_key, "APIabc");
        assert_eq!(config.livekit_api_secret, "s3cr3t");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn empty_values_fall_back() {
        let config = from_map(&[("LIVEKIT_API_KEY", ""), ("PORT", "")]);
        assert_eq!(config.livekit_api_key, "devkey");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config = from_map(&[("PORT", "eighty")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn debug_redacts_secret() {
        let config = from_map(&[("LIVEKIT_API_SECRET", "hunter2")]);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[redacted]"));
    }
}
