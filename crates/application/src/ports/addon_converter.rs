use helm_broker_domain::{Addon, DomainError, Service};

/// Projects one addon onto its OSB catalog entry. Must not perform I/O.
pub trait AddonConverter: Send + Sync {
    fn convert(&self, addon: &Addon) -> Result<Service, DomainError>;
}
