use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::{AddonVersion, DomainError, PlanSchemas};

pub type AddonPlanId = String;

/// Marketplace flags attached to a service, encoded as `"true"`/`"false"` strings.
pub type Labels = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub version: AddonVersion,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bindable: bool,
    #[serde(default)]
    pub metadata: AddonMetadata,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub plans: BTreeMap<AddonPlanId, AddonPlan>,
}

impl Addon {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidAddon("addon id cannot be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidAddon(format!(
                "addon {} has an empty name",
                self.id
            )));
        }
        for (key, plan) in &self.plans {
            if key != &plan.id {
                return Err(DomainError::InvalidAddon(format!(
                    "addon {} lists plan {} under key {}",
                    self.id, plan.id, key
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonMetadata {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub provider_display_name: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub documentation_url: String,
    #[serde(default)]
    pub support_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub provision_only_once: bool,
    #[serde(default, deserialize_with = "null_as_empty_labels")]
    pub labels: Labels,
}

fn null_as_empty_labels<'de, D>(deserializer: D) -> Result<Labels, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Labels>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonPlan {
    pub id: AddonPlanId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: AddonPlanMetadata,
    /// Unset means the plan inherits the addon's bindable flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(default)]
    pub schemas: PlanSchemas,
}

impl AddonPlan {
    pub fn resolve_bindable(&self, addon_bindable: bool) -> bool {
        self.bindable.unwrap_or(addon_bindable)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonPlanMetadata {
    #[serde(default)]
    pub display_name: String,
}
