use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use thiserror::Error;

pub mod error_code {
	pub const NOT_FOUND: &str = "NOT_FOUND";
	pub const INVALID_REFERENCE: &str = "INVALID_REFERENCE";
	pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
	pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Error)]
pub enum ServiceError {
	/// Lookup by id yielded nothing.
	#[error("{entity} not found")]
	EntityNotFound { entity: &'static str, id: i64 },

	/// An entity refers to another one that does not exist.
	#[error("{entity} not found")]
	InvalidReference { entity: &'static str, id: i64 },

	#[error("database error: {0}")]
	DatabaseError(#[from] sqlx::Error),

	#[error("migration error: {0}")]
	MigrationError(#[from] sqlx::migrate::MigrateError),

	#[error("configuration error: {0}")]
	ConfigError(String),

	#[error("io error: {0}")]
	IoError(#[from] std::io::Error),
}

impl ServiceError {
	pub fn not_found(
		entity: &'static str,
		id: i64,
	) -> Self {
		Self::EntityNotFound { entity, id }
	}

	pub fn error_code(&self) -> &'static str {
		match self {
			Self::EntityNotFound { .. } => error_code::NOT_FOUND,
			Self::InvalidReference { .. } => error_code::INVALID_REFERENCE,
			Self::DatabaseError(_) | Self::MigrationError(_) => error_code::STORAGE_ERROR,
			Self::ConfigError(_) | Self::IoError(_) => error_code::INTERNAL,
		}
	}

	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::EntityNotFound { .. } | Self::InvalidReference { .. } => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();

		// Store failures are logged in full but only summarised to the client.
		let message = if status.is_server_error() {
			tracing::error!("Request failed: {}", self);
			String::from("internal server error")
		} else {
			self.to_string()
		};

		let body = Json(serde_json::json!({
			"code": self.error_code(),
			"message": message,
		}));
		(status, body).into_response()
	}
}

#[cfg(test)]
mod test {
	use axum::{http::StatusCode, response::IntoResponse};

	use super::ServiceError;

	#[test]
	fn test_status_code_mapping() {
		assert_eq!(ServiceError::not_found("Post", 1).status_code(), StatusCode::NOT_FOUND);
		assert_eq!(
			ServiceError::InvalidReference { entity: "User", id: 7 }.status_code(),
			StatusCode::NOT_FOUND
		);
		assert_eq!(ServiceError::DatabaseError(sqlx::Error::RowNotFound).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(ServiceError::ConfigError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_invalid_reference_message() {
		let err = ServiceError::InvalidReference { entity: "User", id: 3 };
		assert_eq!(err.to_string(), "User not found");
		assert_eq!(err.error_code(), "INVALID_REFERENCE");
	}

	#[tokio::test]
	async fn test_store_failure_hides_details() {
		let response = ServiceError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
		let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(body["code"], "STORAGE_ERROR");
		assert_eq!(body["message"], "internal server error");
	}
}
