use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub database_max_connections: u32,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub admin_key: Option<String>,
    pub seed_services_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| "DATABASE_URL must be set".to_string())?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {:?}", raw))?,
            None => 25,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        // A blank key counts as unset
        let admin_key = lookup("ADMIN_KEY").filter(|k| !k.trim().is_empty());

        let seed_services_on_startup = match lookup("SEED_SERVICES_ON_STARTUP") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| format!("SEED_SERVICES_ON_STARTUP must be true or false, got {:?}", raw))?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            cors_allowed_origins,
            admin_key,
            seed_services_on_startup,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.contains("DATABASE_URL"));

        let err = config_from(&[("DATABASE_URL", "  ")]).unwrap_err();
        assert!(err.contains("DATABASE_URL"));
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/laburantes")]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.database_max_connections, 25);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(config.admin_key.is_none());
        assert!(!config.seed_services_on_startup);
    }

    #[test]
    fn parses_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/laburantes"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "5"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://laburantes.example ,"),
            ("ADMIN_KEY", "s3cret"),
            ("SEED_SERVICES_ON_STARTUP", "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://laburantes.example"]
        );
        assert_eq!(config.admin_key.as_deref(), Some("s3cret"));
        assert!(config.seed_services_on_startup);
    }

    #[test]
    fn rejects_invalid_values() {
        let base = ("DATABASE_URL", "postgres://localhost/laburantes");

        assert!(config_from(&[base, ("DATABASE_MAX_CONNECTIONS", "zero")]).is_err());
        assert!(config_from(&[base, ("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config_from(&[base, ("SEED_SERVICES_ON_STARTUP", "maybe")]).is_err());
    }

    #[test]
    fn blank_admin_key_disables_admin_endpoints() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/laburantes"),
            ("ADMIN_KEY", "   "),
        ])
        .unwrap();
        assert!(config.admin_key.is_none());
    }
}
