use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub appointment_transition_policy: String,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_secret: String::new(),
            session_ttl_hours: 8,
            appointment_transition_policy: "unrestricted".to_string(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("APP_HOST")
                .unwrap_or_else(|_| {
                    warn!("APP_HOST not set, using default");
                    defaults.host
                }),
            port: parse_var("APP_PORT", defaults.port),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| {
                    warn!("SESSION_SECRET not set, using empty value");
                    String::new()
                }),
            session_ttl_hours: parse_var("SESSION_TTL_HOURS", defaults.session_ttl_hours),
            appointment_transition_policy: env::var("APPOINTMENT_TRANSITION_POLICY")
                .unwrap_or_else(|_| {
                    warn!("APPOINTMENT_TRANSITION_POLICY not set, using default");
                    defaults.appointment_transition_policy
                }),
            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.session_secret.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_not_configured() {
        let config = AppConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.appointment_transition_policy, "unrestricted");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_secret_makes_config_complete() {
        let config = AppConfig {
            session_secret: "secret".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        // Unique keys so parallel tests never race on them
        let key = "SHARED_CONFIG_TEST_PORT_UNSET";
        assert_eq!(parse_var::<u16>(key, 4000), 4000);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        let key = "SHARED_CONFIG_TEST_PORT_GARBAGE";
        env::set_var(key, "not-a-port");
        assert_eq!(parse_var::<u16>(key, 4000), 4000);

        env::set_var(key, " 8080 ");
        assert_eq!(parse_var::<u16>(key, 4000), 8080);
        env::remove_var(key);
    }
}
