use std::sync::OnceLock;

use sqlx::PgPool;

use crate::{config::Config, database, services::response::ServiceError};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

pub async fn connection_pool() -> Result<&'static PgPool, ServiceError> {
	static POOL: OnceLock<PgPool> = OnceLock::new();

	let p = match POOL.get() {
		None => {
			let config = config()?;
			let url = config
				.database_url
				.as_deref()
				.ok_or_else(|| ServiceError::ConfigError("DATABASE_URL must be set!".into()))?;
			let pool = database::connect(url, config.database_max_connections).await?;
			POOL.get_or_init(|| pool)
		}
		Some(pool) => pool,
	};
	Ok(p)
}
