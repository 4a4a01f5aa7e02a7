use async_trait::async_trait;

use crate::{domain::user::User, services::response::ServiceError};

use super::{Repository, TRepository};

#[async_trait]
impl TRepository<User> for Repository<User> {
	async fn save(
		&self,
		entity: User,
	) -> Result<User, ServiceError> {
		let saved = match entity.id {
			None => {
				sqlx::query_as::<_, User>("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email")
					.bind(&entity.username)
					.bind(&entity.email)
					.fetch_one(&self.pool)
					.await?
			}
			Some(id) => {
				sqlx::query_as::<_, User>(
					"INSERT INTO users (id, username, email) VALUES ($1, $2, $3) \
					 ON CONFLICT (id) DO UPDATE SET username = EXCLUDED.username, email = EXCLUDED.email \
					 RETURNING id, username, email",
				)
				.bind(id)
				.bind(&entity.username)
				.bind(&entity.email)
				.fetch_one(&self.pool)
				.await?
			}
		};
		Ok(saved)
	}

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<User>, ServiceError> {
		let user = sqlx::query_as::<_, User>("SELECT id, username, email FROM users WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(user)
	}

	async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
		let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users ORDER BY id")
			.fetch_all(&self.pool)
			.await?;
		Ok(users)
	}

	async fn delete(
		&self,
		entity: &User,
	) -> Result<(), ServiceError> {
		if let Some(id) = entity.id {
			sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(&self.pool).await?;
		}
		Ok(())
	}
}
