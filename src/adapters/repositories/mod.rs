pub(crate) mod memory;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{domain::Entity, services::response::ServiceError};

pub use memory::InMemoryRepository;

/// Persistence primitives for one entity type.
///
/// Store failures are returned as they are; translating them is up to the caller.
#[async_trait]
pub trait TRepository<E: Entity>: Send + Sync {
	/// Inserts when `entity` has no id yet, otherwise overwrites the stored record.
	async fn save(
		&self,
		entity: E,
	) -> Result<E, ServiceError>;

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<E>, ServiceError>;

	async fn find_all(&self) -> Result<Vec<E>, ServiceError>;

	async fn delete(
		&self,
		entity: &E,
	) -> Result<(), ServiceError>;
}

/// Postgres backed store; one `impl TRepository` per entity lives next to this module.
pub struct Repository<E: Entity> {
	pub pool: PgPool,
	pub _phantom: PhantomData<E>,
}

impl<E: Entity> Repository<E> {
	pub fn new(pool: PgPool) -> Self {
		Self {
			pool,
			_phantom: Default::default(),
		}
	}
}

impl<E: Entity> Clone for Repository<E> {
	fn clone(&self) -> Self {
		Self::new(self.pool.clone())
	}
}
