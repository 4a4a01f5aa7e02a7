use axum::{
	extract::{Path, State},
	routing::{get, put},
	Json, Router,
};

use super::AppState;
use crate::{
	domain::post::{
		commands::{CreatePost, UpdatePost},
		PostAggregate,
	},
	services::response::ServiceError,
};

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_posts).post(create_post))
		.route("/:post_id", get(get_post_by_id).put(update_post).delete(delete_post))
		.route("/:post_id/approve", put(approve_post))
}

async fn create_post(
	State(state): State<AppState>,
	Json(cmd): Json<CreatePost>,
) -> Result<Json<PostAggregate>, ServiceError> {
	Ok(Json(state.posts.create_post(cmd).await?))
}

async fn approve_post(
	State(state): State<AppState>,
	Path(post_id): Path<i64>,
) -> Result<(), ServiceError> {
	state.posts.approve_post(post_id).await
}

async fn get_all_posts(State(state): State<AppState>) -> Result<Json<Vec<PostAggregate>>, ServiceError> {
	Ok(Json(state.posts.get_all_posts().await?))
}

async fn get_post_by_id(
	State(state): State<AppState>,
	Path(post_id): Path<i64>,
) -> Result<Json<PostAggregate>, ServiceError> {
	Ok(Json(state.posts.get_post_by_id(post_id).await?))
}

async fn update_post(
	State(state): State<AppState>,
	Path(post_id): Path<i64>,
	Json(cmd): Json<UpdatePost>,
) -> Result<Json<PostAggregate>, ServiceError> {
	Ok(Json(state.posts.update_post(post_id, cmd).await?))
}

async fn delete_post(
	State(state): State<AppState>,
	Path(post_id): Path<i64>,
) -> Result<(), ServiceError> {
	state.posts.delete_post(post_id).await
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;
	use serde_json::json;

	use crate::routes::test_support::{app, call};

	#[tokio::test]
	async fn test_blog_scenario() {
		'_given: {
			let app = app();
			let (status, user) = call(&app, "POST", "/api/users", Some(json!({"username": "alice", "email": "a@x.com"}))).await;
			assert_eq!(status, StatusCode::OK);
			assert_eq!(user["id"], 1);

			'_when: {
				let (status, post) = call(
					&app,
					"POST",
					"/api/posts",
					Some(json!({"title": "Hi", "content": "World", "user": {"id": 1}})),
				)
				.await;
				assert_eq!(status, StatusCode::OK);
				assert_eq!(post["approved"], false);
				assert_eq!(post["user"]["username"], "alice");

				let uri = format!("/api/posts/{}/approve", post["id"]);
				let (status, body) = call(&app, "PUT", &uri, None).await;
				assert_eq!(status, StatusCode::OK);
				assert!(body.is_null());

				'_then: {
					let (status, fetched) = call(&app, "GET", &format!("/api/posts/{}", post["id"]), None).await;
					assert_eq!(status, StatusCode::OK);
					assert_eq!(fetched["approved"], true);
					assert_eq!(fetched["title"], "Hi");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_create_post_with_unknown_owner() {
		let app = app();

		let (status, body) = call(&app, "POST", "/api/posts", Some(json!({"title": "Hi", "content": "World", "user_id": 7}))).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["code"], "INVALID_REFERENCE");
		assert_eq!(body["message"], "User not found");

		let (_, posts) = call(&app, "GET", "/api/posts", None).await;
		assert_eq!(posts, json!([]));
	}

	#[tokio::test]
	async fn test_update_then_delete_post() {
		let app = app();
		let (_, post) = call(&app, "POST", "/api/posts", Some(json!({"title": "Hi", "content": "World"}))).await;
		assert!(post["user"].is_null());

		let (status, updated) = call(&app, "PUT", "/api/posts/1", Some(json!({"title": "Hello", "content": "There", "approved": true}))).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(updated["title"], "Hello");
		assert_eq!(updated["approved"], false);

		let (status, _) = call(&app, "DELETE", "/api/posts/1", None).await;
		assert_eq!(status, StatusCode::OK);

		let (status, body) = call(&app, "GET", "/api/posts/1", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["code"], "NOT_FOUND");
		assert_eq!(body["message"], "Post not found");
	}

	#[tokio::test]
	async fn test_missing_post_operations() {
		let app = app();

		assert_eq!(call(&app, "PUT", "/api/posts/9/approve", None).await.0, StatusCode::NOT_FOUND);
		assert_eq!(call(&app, "DELETE", "/api/posts/9", None).await.0, StatusCode::NOT_FOUND);
		assert_eq!(
			call(&app, "PUT", "/api/posts/9", Some(json!({"title": "a", "content": "b"}))).await.0,
			StatusCode::NOT_FOUND
		);
	}

	#[tokio::test]
	async fn test_non_numeric_id_is_rejected() {
		let app = app();

		let (status, _) = call(&app, "GET", "/api/posts/abc", None).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn test_health() {
		let (status, _) = call(&app(), "GET", "/health", None).await;
		assert_eq!(status, StatusCode::OK);
	}
}
