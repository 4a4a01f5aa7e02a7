use async_trait::async_trait;

use crate::{domain::post::entity::Post, services::response::ServiceError};

use super::{Repository, TRepository};

#[async_trait]
impl TRepository<Post> for Repository<Post> {
	async fn save(
		&self,
		entity: Post,
	) -> Result<Post, ServiceError> {
		let saved = match entity.id {
			None => {
				sqlx::query_as::<_, Post>(
					"INSERT INTO posts (title, content, approved, user_id) VALUES ($1, $2, $3, $4) \
					 RETURNING id, title, content, approved, user_id",
				)
				.bind(&entity.title)
				.bind(&entity.content)
				.bind(entity.approved)
				.bind(entity.user_id)
				.fetch_one(&self.pool)
				.await?
			}
			Some(id) => {
				sqlx::query_as::<_, Post>(
					"INSERT INTO posts (id, title, content, approved, user_id) VALUES ($1, $2, $3, $4, $5) \
					 ON CONFLICT (id) DO UPDATE SET title = EXCLUDED.title, content = EXCLUDED.content, \
					 approved = EXCLUDED.approved, user_id = EXCLUDED.user_id \
					 RETURNING id, title, content, approved, user_id",
				)
				.bind(id)
				.bind(&entity.title)
				.bind(&entity.content)
				.bind(entity.approved)
				.bind(entity.user_id)
				.fetch_one(&self.pool)
				.await?
			}
		};
		Ok(saved)
	}

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<Post>, ServiceError> {
		let post = sqlx::query_as::<_, Post>("SELECT id, title, content, approved, user_id FROM posts WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(post)
	}

	async fn find_all(&self) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>("SELECT id, title, content, approved, user_id FROM posts ORDER BY id")
			.fetch_all(&self.pool)
			.await?;
		Ok(posts)
	}

	async fn delete(
		&self,
		entity: &Post,
	) -> Result<(), ServiceError> {
		if let Some(id) = entity.id {
			sqlx::query("DELETE FROM posts WHERE id = $1").bind(id).execute(&self.pool).await?;
		}
		Ok(())
	}
}
