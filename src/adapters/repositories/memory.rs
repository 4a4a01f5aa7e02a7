use std::{
	collections::BTreeMap,
	sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{domain::Entity, services::response::ServiceError};

use super::TRepository;

/// Process-local store. Ids start at 1 and are never reused.
pub struct InMemoryRepository<E: Entity> {
	records: RwLock<BTreeMap<i64, E>>,
	sequence: AtomicI64,
}

impl<E: Entity> Default for InMemoryRepository<E> {
	fn default() -> Self {
		Self {
			records: Default::default(),
			sequence: AtomicI64::new(0),
		}
	}
}

impl<E: Entity> InMemoryRepository<E> {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.records.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.records.read().await.is_empty()
	}
}

#[async_trait]
impl<E: Entity> TRepository<E> for InMemoryRepository<E> {
	async fn save(
		&self,
		mut entity: E,
	) -> Result<E, ServiceError> {
		let id = match entity.id() {
			Some(id) => {
				// Keep the sequence ahead of explicitly chosen ids.
				self.sequence.fetch_max(id, Ordering::SeqCst);
				id
			}
			None => self.sequence.fetch_add(1, Ordering::SeqCst) + 1,
		};
		entity.set_id(id);
		self.records.write().await.insert(id, entity.clone());
		Ok(entity)
	}

	async fn find_by_id(
		&self,
		id: i64,
	) -> Result<Option<E>, ServiceError> {
		Ok(self.records.read().await.get(&id).cloned())
	}

	async fn find_all(&self) -> Result<Vec<E>, ServiceError> {
		Ok(self.records.read().await.values().cloned().collect())
	}

	async fn delete(
		&self,
		entity: &E,
	) -> Result<(), ServiceError> {
		if let Some(id) = entity.id() {
			self.records.write().await.remove(&id);
		}
		Ok(())
	}
}
