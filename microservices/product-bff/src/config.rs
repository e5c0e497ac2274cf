//! Product BFF Configuration

use storefront_core::{Result, StorefrontError};

#[derive(Debug, Clone)]
pub struct BffConfig {
    pub http_bind: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub enable_playground: bool,
}

impl Default for BffConfig {
    fn default() -> Self {
        Self {
            http_bind: "0.0.0.0:8080".to_string(),
            default_page_size: 10,
            max_page_size: 50,
            enable_playground: true,
        }
    }
}

impl BffConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            http_bind: lookup("HTTP_BIND").unwrap_or(defaults.http_bind),
            default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", defaults.default_page_size)?,
            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", defaults.max_page_size)?,
            enable_playground: parse_or(&lookup, "ENABLE_PLAYGROUND", defaults.enable_playground)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(StorefrontError::Config(
                "DEFAULT_PAGE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(StorefrontError::Config(format!(
                "DEFAULT_PAGE_SIZE ({}) exceeds MAX_PAGE_SIZE ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| StorefrontError::Config(format!("Invalid {}: {}", key, e))),
        None => Ok(default),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BffConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_bind, "0.0.0.0:8080");
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 50);
        assert!(config.enable_playground);
    }

    #[test]
    fn test_overrides() {
        let config = BffConfig::from_lookup(lookup(&[
            ("HTTP_BIND", "127.0.0.1:9000"),
            ("DEFAULT_PAGE_SIZE", "5"),
            ("MAX_PAGE_SIZE", "20"),
            ("ENABLE_PLAYGROUND", "false"),
        ]))
        .unwrap();
        assert_eq!(config.http_bind, "127.0.0.1:9000");
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.max_page_size, 20);
        assert!(!config.enable_playground);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = BffConfig::from_lookup(lookup(&[("MAX_PAGE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
        assert!(err.to_string().contains("MAX_PAGE_SIZE"));
    }

    #[test]
    fn test_default_above_max_rejected() {
        let err = BffConfig::from_lookup(lookup(&[
            ("DEFAULT_PAGE_SIZE", "60"),
            ("MAX_PAGE_SIZE", "50"),
        ]))
        .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_zero_default_rejected() {
        assert!(BffConfig::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "0")])).is_err());
    }
}
