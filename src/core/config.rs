use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

/// Which of the two services a configuration is loaded for.
///
/// Each service owns its own database file and port, so the variables
/// carrying those values are prefixed with the service name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Book,
    Album,
}

impl Service {
    fn prefix(self) -> &'static str {
        match self {
            Service::Book => "BOOK",
            Service::Album => "ALBUM",
        }
    }

    fn default_database_url(self) -> &'static str {
        match self {
            Service::Book => "sqlite://book.db",
            Service::Album => "sqlite://album.db",
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Service::Book => 5000,
            Service::Album => 5001,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env(service: Service) -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service.prefix();

        let database_url = lookup(&format!("{prefix}_DATABASE_URL")).unwrap_or_else(|| {
            warn!(
                "{prefix}_DATABASE_URL not set, using {}",
                service.default_database_url()
            );
            service.default_database_url().to_string()
        });

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = match lookup(&format!("{prefix}_SERVER_PORT")) {
            Some(port) => port.parse::<u16>().map_err(|_| {
                format!("Invalid {prefix}_SERVER_PORT: must be a number between 0-65535")
            })?,
            None => service.default_port(),
        };

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            service,
            database_url,
            server_host,
            server_port,
            max_connections,
            app_env,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione effettiva all'avvio
    pub fn print_info(&self) {
        info!(
            service = ?self.service,
            environment = %self.app_env,
            address = %self.bind_address(),
            database = %self.database_url,
            max_connections = self.max_connections,
            "server configuration loaded"
        );
    }
}
