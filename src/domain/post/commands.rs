use serde::{Deserialize, Serialize};

/// Legacy owner shape, `"user": {"id": 1}`. Other user fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
	pub id: Option<i64>,
}

/// Body of `POST /api/posts`. Any `approved` value sent by the client is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreatePost {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub user_id: Option<i64>,
	#[serde(default)]
	pub user: Option<OwnerRef>,
}

impl CreatePost {
	/// Owner id from either `user_id` or `user.id`, the former taking precedence.
	pub fn owner_id(&self) -> Option<i64> {
		self.user_id.or_else(|| self.user.as_ref().and_then(|owner| owner.id))
	}
}

/// Body of `PUT /api/posts/{id}`. Only title and content are applied.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdatePost {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
}
