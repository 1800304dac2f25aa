use async_trait::async_trait;
use helm_broker_domain::{Addon, AddonScope, DomainError};

#[async_trait]
pub trait AddonStorage: Send + Sync {
    /// Returns every addon visible in `scope`, in the storage's own order.
    async fn find_all(&self, scope: &AddonScope) -> Result<Vec<Addon>, DomainError>;
}
