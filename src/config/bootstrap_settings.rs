use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Infrastructure settings needed before anything else can start
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    seed_sample_items: bool,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://myshop.db?mode=rwc")
            .min_length(1)
            .load()?;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load()?;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(ConfigSpec::validate_port)
            .load()?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let seed_value = ConfigSpec::new(env_provider)
            .env_override("SEED_SAMPLE_ITEMS")
            .default_value("false")
            .validator(ConfigSpec::validate_bool)
            .load()?;
        let seed_sample_items = ConfigSpec::parse_bool(&seed_value, "SEED_SAMPLE_ITEMS")?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            seed_sample_items,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn seed_sample_items(&self) -> bool {
        self.seed_sample_items
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("seed_sample_items", &self.seed_sample_items)
            .finish()
    }
}
