use std::{collections::HashMap, sync::Arc};

use crate::{
	adapters::repositories::TRepository,
	domain::{
		post::{
			commands::{CreatePost, UpdatePost},
			entity::Post,
			PostAggregate,
		},
		user::User,
		Entity,
	},
};

use super::response::ServiceError;

#[derive(Clone)]
pub struct PostService {
	posts: Arc<dyn TRepository<Post>>,
	users: Arc<dyn TRepository<User>>,
}

impl PostService {
	pub fn new(
		posts: Arc<dyn TRepository<Post>>,
		users: Arc<dyn TRepository<User>>,
	) -> Self {
		Self { posts, users }
	}

	/// Stores a new, unapproved post. A referenced owner must exist at this point; it is not re-checked later.
	pub async fn create_post(
		&self,
		cmd: CreatePost,
	) -> Result<PostAggregate, ServiceError> {
		let owner = match cmd.owner_id() {
			Some(user_id) => Some(self.users.find_by_id(user_id).await?.ok_or_else(|| {
				tracing::warn!(user_id, "Post creation refers to an unknown user");
				ServiceError::InvalidReference {
					entity: User::NAME,
					id: user_id,
				}
			})?),
			None => None,
		};

		let post = self
			.posts
			.save(Post {
				id: None,
				title: cmd.title,
				content: cmd.content,
				approved: false,
				user_id: owner.as_ref().and_then(|user| user.id),
			})
			.await?;
		tracing::info!(post_id = ?post.id, user_id = ?post.user_id, "Post created");

		Ok(PostAggregate::new(post, owner))
	}

	/// Marks the post approved. Approving twice is not an error.
	pub async fn approve_post(
		&self,
		post_id: i64,
	) -> Result<(), ServiceError> {
		let mut post = self.find_post(post_id).await?;
		post.approved = true;
		self.posts.save(post).await?;
		tracing::info!(post_id, "Post approved");
		Ok(())
	}

	pub async fn get_all_posts(&self) -> Result<Vec<PostAggregate>, ServiceError> {
		let posts = self.posts.find_all().await?;

		let mut owners: HashMap<i64, Option<User>> = HashMap::new();
		for user_id in posts.iter().filter_map(|post| post.user_id) {
			if !owners.contains_key(&user_id) {
				let owner = self.users.find_by_id(user_id).await?;
				owners.insert(user_id, owner);
			}
		}

		Ok(posts
			.into_iter()
			.map(|post| {
				let owner = post.user_id.and_then(|user_id| owners.get(&user_id).cloned().flatten());
				PostAggregate::new(post, owner)
			})
			.collect())
	}

	pub async fn get_post_by_id(
		&self,
		post_id: i64,
	) -> Result<PostAggregate, ServiceError> {
		let post = self.find_post(post_id).await?;
		self.resolve(post).await
	}

	/// Overwrites title and content only; approval and owner stay as they are.
	pub async fn update_post(
		&self,
		post_id: i64,
		cmd: UpdatePost,
	) -> Result<PostAggregate, ServiceError> {
		let mut post = self.find_post(post_id).await?;
		post.title = cmd.title;
		post.content = cmd.content;

		let post = self.posts.save(post).await?;
		tracing::info!(post_id, "Post updated");
		self.resolve(post).await
	}

	pub async fn delete_post(
		&self,
		post_id: i64,
	) -> Result<(), ServiceError> {
		let post = self.find_post(post_id).await?;
		self.posts.delete(&post).await?;
		tracing::info!(post_id, "Post deleted");
		Ok(())
	}

	async fn find_post(
		&self,
		post_id: i64,
	) -> Result<Post, ServiceError> {
		self.posts.find_by_id(post_id).await?.ok_or_else(|| {
			tracing::warn!(post_id, "Post not found");
			ServiceError::not_found(Post::NAME, post_id)
		})
	}

	// Owner that disappeared after creation resolves to `None`.
	async fn resolve(
		&self,
		post: Post,
	) -> Result<PostAggregate, ServiceError> {
		let owner = match post.user_id {
			Some(user_id) => self.users.find_by_id(user_id).await?,
			None => None,
		};
		Ok(PostAggregate::new(post, owner))
	}
}
