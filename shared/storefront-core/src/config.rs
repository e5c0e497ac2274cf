//! Configuration shared by every storefront service

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_name: lookup("SERVICE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "product-bff".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_default() {
        assert_eq!(ServiceConfig::from_lookup(|_| None).service_name, "product-bff");
        assert_eq!(
            ServiceConfig::from_lookup(|_| Some("  ".to_string())).service_name,
            "product-bff"
        );
    }

    #[test]
    fn test_service_name_override() {
        let config = ServiceConfig::from_lookup(|key: &str| {
            (key == "SERVICE_NAME").then(|| "catalog-edge".to_string())
        });
        assert_eq!(config.service_name, "catalog-edge");
    }
}
