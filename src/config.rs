use std::str::FromStr;

use crate::services::response::ServiceError;

/// Backing store the service persists into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageKind {
	#[default]
	Postgres,
	Memory,
}

impl FromStr for StorageKind {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"postgres" | "postgresql" => Ok(Self::Postgres),
			"memory" | "in-memory" => Ok(Self::Memory),
			other => Err(ServiceError::ConfigError(format!("unknown STORAGE `{other}`"))),
		}
	}
}

#[derive(Debug, Clone)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub storage: StorageKind,
	pub database_url: Option<String>,
	pub database_max_connections: u32,
	pub allow_origins: String,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from an arbitrary key lookup so it can be exercised without touching the process env.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let storage = match lookup("STORAGE") {
			Some(value) => value.parse()?,
			None => StorageKind::default(),
		};
		let database_url = lookup("DATABASE_URL");
		if storage == StorageKind::Postgres && database_url.is_none() {
			return Err(ServiceError::ConfigError("DATABASE_URL must be set!".into()));
		}
		let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
			Some(value) => value
				.parse()
				.map_err(|_| ServiceError::ConfigError(format!("invalid DATABASE_MAX_CONNECTIONS `{value}`")))?,
			None => 30,
		};
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:3001".to_string());

		Ok(Config {
			log_level,
			server_ip_port,
			storage,
			database_url,
			database_max_connections,
			allow_origins,
		})
	}

	pub fn origins(&self) -> impl Iterator<Item = &str> {
		self.allow_origins.split(',').map(str::trim).filter(|origin| !origin.is_empty())
	}
}
