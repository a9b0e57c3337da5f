use std::sync::Arc;

use async_trait::async_trait;
use models::{seed, PersonRecord, ServiceRecord};
use tokio::sync::RwLock;

/// Ordered storage of service records.
///
/// Lookups are first-match in insertion order; ids are not required to be
/// unique.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self) -> Vec<ServiceRecord>;
    async fn get(&self, id: &str) -> Option<ServiceRecord>;
    async fn append(&self, record: ServiceRecord);
    /// Remove the first record with `id`, shifting later records down.
    async fn remove_first(&self, id: &str) -> Option<ServiceRecord>;
}

/// Process-local registry. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryRegistry {
    services: Arc<RwLock<Vec<ServiceRecord>>>,
    people: Arc<Vec<PersonRecord>>,
}

impl MemoryRegistry {
    pub fn new(services: Vec<ServiceRecord>, people: Vec<PersonRecord>) -> Arc<Self> {
        Arc::new(Self { services: Arc::new(RwLock::new(services)), people: Arc::new(people) })
    }

    /// Registry holding the fixed startup records.
    pub fn seeded() -> Arc<Self> {
        Self::new(seed::seed_services(), seed::seed_people())
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn from_config(cfg: &configs::RegistryConfig) -> Arc<Self> {
        if cfg.seed { Self::seeded() } else { Self::empty() }
    }

    pub fn people(&self) -> &[PersonRecord] {
        &self.people
    }

    pub async fn len(&self) -> usize {
        self.services.read().await.len()
    }
}

#[async_trait]
impl ServiceRepository for MemoryRegistry {
    async fn list(&self) -> Vec<ServiceRecord> {
        self.services.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<ServiceRecord> {
        let services = self.services.read().await;
        services.iter().find(|s| s.id == id).cloned()
    }

    async fn append(&self, record: ServiceRecord) {
        self.services.write().await.push(record);
    }

    async fn remove_first(&self, id: &str) -> Option<ServiceRecord> {
        let mut services = self.services.write().await;
        let idx = services.iter().position(|s| s.id == id)?;
        Some(services.remove(idx))
    }
}
