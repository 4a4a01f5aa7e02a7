mod posts;
mod users;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
	adapters::repositories::{InMemoryRepository, Repository},
	domain::{post::entity::Post, user::User},
	services::{PostService, UserService},
};

#[derive(Clone)]
pub struct AppState {
	pub posts: PostService,
	pub users: UserService,
}

impl AppState {
	pub fn new(
		posts: PostService,
		users: UserService,
	) -> Self {
		Self { posts, users }
	}

	/// Both services over a shared Postgres pool.
	pub fn postgres(pool: sqlx::PgPool) -> Self {
		let users = Arc::new(Repository::<User>::new(pool.clone()));
		let posts = Arc::new(Repository::<Post>::new(pool));
		Self::new(PostService::new(posts, users.clone()), UserService::new(users))
	}

	/// Both services over process-local stores; everything is lost on exit.
	pub fn in_memory() -> Self {
		let users = Arc::new(InMemoryRepository::<User>::new());
		let posts = Arc::new(InMemoryRepository::<Post>::new());
		Self::new(PostService::new(posts, users.clone()), UserService::new(users))
	}
}

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.nest("/api/posts", posts::routes())
		.nest("/api/users", users::routes())
		.with_state(state)
}

async fn health() -> &'static str {
	"ok"
}

#[cfg(test)]
pub(crate) mod test_support {
	use axum::{
		body::Body,
		http::{Request, StatusCode},
		Router,
	};
	use tower::ServiceExt;

	use super::{create_routes, AppState};

	pub fn app() -> Router {
		create_routes(AppState::in_memory())
	}

	pub async fn call(
		router: &Router,
		method: &str,
		uri: &str,
		body: Option<serde_json::Value>,
	) -> (StatusCode, serde_json::Value) {
		let mut builder = Request::builder().method(method).uri(uri);
		if body.is_some() {
			builder = builder.header("content-type", "application/json");
		}
		let body = match body {
			Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
			None => Body::empty(),
		};
		let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
		let status = response.status();
		let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
		let json = if bytes.is_empty() {
			serde_json::Value::Null
		} else {
			serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
		};
		(status, json)
	}
}
