#[cfg(feature = "cli")]
pub mod cli;
pub mod declaration;

use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{validate_device_url, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const HOST_ENV: &str = "BIGIP_HOST";
pub const USER_ENV: &str = "BIGIP_USER";
pub const PASSWORD_ENV: &str = "BIGIP_PASSWORD";
pub const DISABLE_TELEMETRY_ENV: &str = "BIGIP_DISABLE_TELEMETRY";

/// Connection settings for one managed device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub validate_certs: bool,
    #[serde(default)]
    pub disable_telemetry: bool,
}

impl DeviceConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var(HOST_ENV).map_err(|_| ProfileError::MissingField {
            field: HOST_ENV.to_string(),
        })?;
        let username = std::env::var(USER_ENV).map_err(|_| ProfileError::MissingField {
            field: USER_ENV.to_string(),
        })?;
        let password = std::env::var(PASSWORD_ENV).map_err(|_| ProfileError::MissingField {
            field: PASSWORD_ENV.to_string(),
        })?;
        Ok(Self {
            host,
            username,
            password,
            validate_certs: false,
            disable_telemetry: std::env::var(DISABLE_TELEMETRY_ENV).is_ok(),
        })
    }
}

impl Validate for DeviceConfig {
    fn validate(&self) -> Result<()> {
        validate_device_url("host", &self.host)?;
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("password", &self.password)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_config_validation() {
        let config = DeviceConfig {
            host: "https://192.168.1.1".to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
            validate_certs: false,
            disable_telemetry: false,
        };
        assert!(config.validate().is_ok());

        let bad_host = DeviceConfig {
            host: "not-a-url".to_string(),
            ..config.clone()
        };
        assert!(bad_host.validate().is_err());

        let empty_user = DeviceConfig {
            username: "  ".to_string(),
            ..config
        };
        assert!(empty_user.validate().is_err());
    }
}
