//! In-memory repository for developer directory tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::developer::{
    domain::{Developer, DeveloperId},
    ports::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult},
};

/// Thread-safe in-memory developer repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeveloperRepository {
    state: Arc<RwLock<HashMap<DeveloperId, Developer>>>,
}

impl InMemoryDeveloperRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_name(mut developers: Vec<Developer>) -> Vec<Developer> {
    developers.sort_by_key(|d| (d.name().full(), d.id().into_inner()));
    developers
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn store(&self, developer: &Developer) -> DeveloperRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&developer.id()) {
            return Err(DeveloperRepositoryError::DuplicateDeveloper(developer.id()));
        }
        state.insert(developer.id(), developer.clone());
        Ok(())
    }

    async fn update(&self, developer: &Developer) -> DeveloperRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&developer.id()) {
            return Err(DeveloperRepositoryError::NotFound(developer.id()));
        }
        state.insert(developer.id(), developer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DeveloperId) -> DeveloperRepositoryResult<Option<Developer>> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_active(&self) -> DeveloperRepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let active = state.values().filter(|d| d.is_active()).cloned().collect();
        Ok(sorted_by_name(active))
    }

    async fn list_all(&self) -> DeveloperRepositoryResult<Vec<Developer>> {
        let state = self.state.read().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sorted_by_name(state.values().cloned().collect()))
    }

    async fn delete(&self, id: DeveloperId) -> DeveloperRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeveloperRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(DeveloperRepositoryError::NotFound(id))
    }
}
