use std::ops::{Deref, DerefMut};

use serde::Serialize;

use self::entity::Post;
use crate::domain::user::User;

pub mod commands;
pub mod entity;

/// A post together with its eagerly resolved owner, as handed out to callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostAggregate {
	#[serde(flatten)]
	pub(crate) post: Post,
	pub(crate) user: Option<User>,
}

impl PostAggregate {
	pub fn new(
		post: Post,
		user: Option<User>,
	) -> Self {
		Self { post, user }
	}
	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}
}

impl Deref for PostAggregate {
	type Target = Post;
	fn deref(&self) -> &Self::Target {
		&self.post
	}
}
impl DerefMut for PostAggregate {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.post
	}
}

#[test]
fn test_aggregate_representation() {
	let aggregate = PostAggregate::new(
		Post {
			id: Some(1),
			title: "Hi".into(),
			content: "World".into(),
			approved: false,
			user_id: Some(1),
		},
		Some(User {
			id: Some(1),
			username: "alice".into(),
			email: "a@x.com".into(),
		}),
	);

	let jsonified = serde_json::to_value(&aggregate).unwrap();
	assert_eq!(jsonified["id"], 1);
	assert_eq!(jsonified["approved"], false);
	assert_eq!(jsonified["user"]["username"], "alice");

	let orphan = serde_json::to_value(PostAggregate::default()).unwrap();
	assert!(orphan["user"].is_null());
}
