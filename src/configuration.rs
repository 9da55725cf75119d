use crate::error::ConfigError;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub jwt: JwtSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
}

/// JWT authentication settings
///
/// Access and refresh tokens are signed with separate secrets so that a
/// token of one kind never verifies under the other kind's check.
#[derive(serde::Deserialize, Clone)]
pub struct JwtSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64, // seconds (default 3600 = 1 hour)
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64, // seconds (default 604800 = 7 days)
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

fn default_access_token_expiry() -> i64 {
    3600
}

fn default_refresh_token_expiry() -> i64 {
    604_800
}

fn default_issuer() -> String {
    "tokengate".to_string()
}

impl JwtSettings {
    /// Reject configurations that would weaken token signing.
    ///
    /// There is deliberately no fallback secret: an unset secret aborts
    /// startup instead of silently signing with a well-known value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.trim().is_empty() {
            return Err(ConfigError::MissingRequired("jwt.access_secret".to_string()));
        }
        if self.refresh_secret.trim().is_empty() {
            return Err(ConfigError::MissingRequired("jwt.refresh_secret".to_string()));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::InvalidValue(
                "jwt.access_secret and jwt.refresh_secret must differ".to_string(),
            ));
        }
        if self.access_token_expiry <= 0 || self.refresh_token_expiry <= 0 {
            return Err(ConfigError::InvalidValue(
                "token expiry values must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;
    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> JwtSettings {
        JwtSettings {
            access_secret: "access-secret-at-least-32-characters".to_string(),
            refresh_secret: "refresh-secret-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 604_800,
            issuer: "test".to_string(),
        }
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_empty_access_secret_rejected() {
        let mut settings = valid_settings();
        settings.access_secret = "".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_whitespace_refresh_secret_rejected() {
        let mut settings = valid_settings();
        settings.refresh_secret = "   ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_identical_secrets_rejected() {
        let mut settings = valid_settings();
        settings.refresh_secret = settings.access_secret.clone();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let mut settings = valid_settings();
        settings.access_token_expiry = 0;
        assert!(settings.validate().is_err());
    }
}
