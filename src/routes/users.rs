use axum::{
	extract::{Path, State},
	routing::get,
	Json, Router,
};

use super::AppState;
use crate::{
	domain::user::{
		commands::{CreateUser, UpdateUser},
		User,
	},
	services::response::ServiceError,
};

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_users).post(create_user))
		.route("/:user_id", get(get_user_by_id).put(update_user).delete(delete_user))
}

async fn create_user(
	State(state): State<AppState>,
	Json(cmd): Json<CreateUser>,
) -> Result<Json<User>, ServiceError> {
	Ok(Json(state.users.create_user(cmd).await?))
}

async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ServiceError> {
	Ok(Json(state.users.get_all_users().await?))
}

async fn get_user_by_id(
	State(state): State<AppState>,
	Path(user_id): Path<i64>,
) -> Result<Json<User>, ServiceError> {
	Ok(Json(state.users.get_user_by_id(user_id).await?))
}

async fn update_user(
	State(state): State<AppState>,
	Path(user_id): Path<i64>,
	Json(cmd): Json<UpdateUser>,
) -> Result<Json<User>, ServiceError> {
	Ok(Json(state.users.update_user(user_id, cmd).await?))
}

async fn delete_user(
	State(state): State<AppState>,
	Path(user_id): Path<i64>,
) -> Result<(), ServiceError> {
	state.users.delete_user(user_id).await
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;
	use serde_json::json;

	use crate::routes::test_support::{app, call};

	#[tokio::test]
	async fn test_user_crud() {
		let app = app();

		let (status, created) = call(&app, "POST", "/api/users", Some(json!({"id": 40, "username": "alice", "email": "a@x.com"}))).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(created, json!({"id": 1, "username": "alice", "email": "a@x.com"}));

		let (status, updated) = call(&app, "PUT", "/api/users/1", Some(json!({"id": 5, "username": "alicia", "email": "al@x.com"}))).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(updated, json!({"id": 1, "username": "alicia", "email": "al@x.com"}));

		let (_, all) = call(&app, "GET", "/api/users", None).await;
		assert_eq!(all, json!([updated]));

		let (status, _) = call(&app, "DELETE", "/api/users/1", None).await;
		assert_eq!(status, StatusCode::OK);

		let (status, body) = call(&app, "GET", "/api/users/1", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["message"], "User not found");
	}
}
