use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /api/users`. A client supplied `id` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateUser {
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub email: String,
}

impl From<CreateUser> for User {
	fn from(value: CreateUser) -> Self {
		User {
			id: None,
			username: value.username,
			email: value.email,
		}
	}
}

/// Body of `PUT /api/users/{id}`; both fields overwrite the stored ones.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateUser {
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub email: String,
}
