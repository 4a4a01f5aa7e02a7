use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::services::response::ServiceError;

pub async fn connect(
	url: &str,
	max_connections: u32,
) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new()
		.max_connections(max_connections)
		.connect(url)
		.await
		.map_err(|err| {
			tracing::error!("Database connection failed : {:?}", err);
			ServiceError::DatabaseError(err)
		})?;
	Ok(pool)
}

/// Brings the `users` and `posts` tables up to date.
pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	tracing::info!("Database schema is up to date");
	Ok(())
}
