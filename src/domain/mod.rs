pub mod post;
pub mod user;

/// Persisted record with a store-assigned integer id.
pub trait Entity: Clone + Send + Sync + 'static {
	const NAME: &'static str;

	/// `None` until the record has been saved once.
	fn id(&self) -> Option<i64>;
	fn set_id(
		&mut self,
		id: i64,
	);
}
