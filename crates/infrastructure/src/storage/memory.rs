use async_trait::async_trait;
use helm_broker_application::ports::AddonStorage;
use helm_broker_domain::{Addon, AddonScope, DomainError};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Addon storage held in process memory, keyed by scope.
///
/// Addons keep the order they were first inserted in; replacing an addon
/// keeps its position.
#[derive(Debug, Default)]
pub struct InMemoryAddonStorage {
    addons: RwLock<HashMap<AddonScope, Vec<Addon>>>,
}

impl InMemoryAddonStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, scope: AddonScope, addon: Addon) -> Result<(), DomainError> {
        addon.validate()?;

        let mut lock = self.addons.write().unwrap_or_else(|e| e.into_inner());
        let entries = lock.entry(scope).or_default();
        match entries.iter_mut().find(|a| a.id == addon.id) {
            Some(existing) => {
                debug!(addon_id = %addon.id, "Replacing addon");
                *existing = addon;
            }
            None => {
                debug!(addon_id = %addon.id, "Inserting addon");
                entries.push(addon);
            }
        }
        Ok(())
    }

    pub fn remove(&self, scope: &AddonScope, id: &str) -> Result<Addon, DomainError> {
        let mut lock = self.addons.write().unwrap_or_else(|e| e.into_inner());
        let entries = lock
            .get_mut(scope)
            .ok_or_else(|| DomainError::AddonNotFound(id.to_string()))?;
        let idx = entries
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::AddonNotFound(id.to_string()))?;
        let removed = entries.remove(idx);
        if entries.is_empty() {
            lock.remove(scope);
        }
        Ok(removed)
    }

    pub fn len(&self, scope: &AddonScope) -> usize {
        self.addons
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(scope)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.addons
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

#[async_trait]
impl AddonStorage for InMemoryAddonStorage {
    async fn find_all(&self, scope: &AddonScope) -> Result<Vec<Addon>, DomainError> {
        let lock = self.addons.read().unwrap_or_else(|e| e.into_inner());
        Ok(lock.get(scope).cloned().unwrap_or_default())
    }
}
