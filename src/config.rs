// Runtime configuration loaded from environment variables

/// Origins that are always allowed by CORS
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:8080",
    "http://localhost:3000",
    "http://localhost:5173",
];

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// HMAC secret for session tokens, never defaulted
    pub jwt_secret: String,
    /// Exact-match CORS origins (defaults plus ALLOWED_ORIGINS)
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub weather_api_key: Option<String>,
    pub weather_api_url: String,
    pub rate_limit_enabled: bool,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let jwt_secret = non_empty("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 5000,
        };

        let mut allowed_origins: Vec<String> =
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect();
        if let Some(extra) = non_empty("ALLOWED_ORIGINS") {
            for origin in extra.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                if !allowed_origins.iter().any(|o| o == origin) {
                    allowed_origins.push(origin.to_string());
                }
            }
        }

        let rate_limit_enabled = match non_empty("RATE_LIMIT_ENABLED") {
            Some(raw) => match raw.to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RATE_LIMIT_ENABLED",
                        value: raw,
                    })
                }
            },
            None => true,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            allowed_origins,
            environment: non_empty("APP_ENV").unwrap_or_else(|| "development".to_string()),
            weather_api_key: non_empty("WEATHER_API_KEY"),
            weather_api_url: non_empty("WEATHER_API_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            rate_limit_enabled,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_secret_fails() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "5000")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_blank_secret_fails() {
        let result = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "   ")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.allowed_origins.len(), 3);
        assert_eq!(config.weather_api_key, None);
        assert_eq!(config.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert!(config.rate_limit_enabled);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_allowed_origins_are_merged() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("ALLOWED_ORIGINS", " https://kheti.example , ,http://localhost:3000"),
        ]))
        .unwrap();
        assert_eq!(config.allowed_origins.len(), 4);
        assert!(config.allowed_origins.contains(&"https://kheti.example".to_string()));
    }

    #[test]
    fn test_invalid_port() {
        let result =
            AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret"), ("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "PORT", .. })));
    }

    #[test]
    fn test_rate_limit_toggle() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("RATE_LIMIT_ENABLED", "false"),
        ]))
        .unwrap();
        assert!(!config.rate_limit_enabled);
    }
}
