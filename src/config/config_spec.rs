use std::net::IpAddr;
use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Specification for a single setting: environment override, then default
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the setting: environment value if present, otherwise the default
    pub fn load(&self) -> Result<String, ApplicationError> {
        let name = self.setting_name();

        let value = self
            .env_override
            .as_deref()
            .and_then(|var| self.env_provider.get_var(var))
            .or_else(|| self.default_value.clone())
            .ok_or_else(|| ApplicationError::MissingSetting {
                setting_name: name.clone(),
            })?;

        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: name,
                    reason: format!("must be at least {} characters", min),
                });
            }
        }

        if let Some(validate) = self.validator {
            validate(&value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: name,
                reason,
            })?;
        }

        Ok(value)
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value == "localhost" || value.parse::<IpAddr>().is_ok() {
            Ok(())
        } else {
            Err(format!("'{}' is not an IP address or 'localhost'", value))
        }
    }

    pub fn validate_port(value: &str) -> Result<(), String> {
        match value.parse::<u16>() {
            Ok(0) => Err("port must be between 1 and 65535".to_string()),
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn validate_bool(value: &str) -> Result<(), String> {
        Self::parse_bool_value(value)
            .map(|_| ())
            .ok_or_else(|| format!("'{}' is not a boolean", value))
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        value.parse::<u16>().map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: e.to_string(),
        })
    }

    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        Self::parse_bool_value(value).ok_or_else(|| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("'{}' is not a boolean", value),
        })
    }

    fn parse_bool_value(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
