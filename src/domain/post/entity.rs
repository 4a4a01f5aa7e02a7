use serde::{Deserialize, Serialize};

use crate::domain::Entity;

/// Row of the `posts` table. The owner is kept as a raw id; resolving it is the service's job.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: Option<i64>,
	pub title: String,
	pub content: String,
	pub approved: bool,
	pub user_id: Option<i64>,
}

impl Entity for Post {
	const NAME: &'static str = "Post";

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
