//! Helm Broker Domain Layer
pub mod addon;
pub mod addon_scope;
pub mod addon_version;
pub mod config;
pub mod errors;
pub mod osb;
pub mod plan_schema;

pub use addon::{Addon, AddonMetadata, AddonPlan, AddonPlanId, AddonPlanMetadata, Labels};
pub use addon_scope::AddonScope;
pub use addon_version::AddonVersion;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{CatalogError, DomainError};
pub use osb::{
    CatalogResponse, InputParameters, OsbContext, Plan, Schemas, Service, ServiceBindingSchema,
    ServiceInstanceSchema,
};
pub use plan_schema::{PlanSchema, PlanSchemaType, PlanSchemas};
