use std::sync::Arc;

use crate::{
	adapters::repositories::TRepository,
	domain::{
		user::commands::{CreateUser, UpdateUser},
		user::User,
		Entity,
	},
};

use super::response::ServiceError;

#[derive(Clone)]
pub struct UserService {
	users: Arc<dyn TRepository<User>>,
}

impl UserService {
	pub fn new(users: Arc<dyn TRepository<User>>) -> Self {
		Self { users }
	}

	pub async fn create_user(
		&self,
		cmd: CreateUser,
	) -> Result<User, ServiceError> {
		let user = self.users.save(cmd.into()).await?;
		tracing::info!(user_id = ?user.id, "User created");
		Ok(user)
	}

	pub async fn get_user_by_id(
		&self,
		id: i64,
	) -> Result<User, ServiceError> {
		self.users.find_by_id(id).await?.ok_or_else(|| {
			tracing::warn!(user_id = id, "User not found");
			ServiceError::not_found(User::NAME, id)
		})
	}

	pub async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
		self.users.find_all().await
	}

	pub async fn update_user(
		&self,
		id: i64,
		cmd: UpdateUser,
	) -> Result<User, ServiceError> {
		let mut user = self.get_user_by_id(id).await?;
		user.username = cmd.username;
		user.email = cmd.email;

		let user = self.users.save(user).await?;
		tracing::info!(user_id = id, "User updated");
		Ok(user)
	}

	pub async fn delete_user(
		&self,
		id: i64,
	) -> Result<(), ServiceError> {
		let user = self.get_user_by_id(id).await?;
		self.users.delete(&user).await?;
		tracing::info!(user_id = id, "User deleted");
		Ok(())
	}
}
