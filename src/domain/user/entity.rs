use serde::{Deserialize, Serialize};

use crate::domain::Entity;

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
	pub id: Option<i64>,
	pub username: String,
	pub email: String,
}

impl Entity for User {
	const NAME: &'static str = "User";

	fn id(&self) -> Option<i64> {
		self.id
	}
	fn set_id(
		&mut self,
		id: i64,
	) {
		self.id = Some(id)
	}
}
