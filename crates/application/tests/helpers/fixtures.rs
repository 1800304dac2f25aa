use helm_broker_domain::{
    Addon, AddonMetadata, AddonPlan, AddonPlanMetadata, AddonVersion, DomainError, Labels,
    PlanSchema, PlanSchemas, Service,
};
use serde_json::json;
use std::collections::BTreeMap;

pub fn fix_addon() -> Addon {
    fix_addon_with_schemas(fix_plan_schemas())
}

pub fn fix_addon_with_schemas(schemas: PlanSchemas) -> Addon {
    let mut labels = Labels::new();
    labels.insert("testing".to_string(), "true".to_string());
    labels.insert("provisionOnlyOnce".to_string(), "true".to_string());

    let mut plans = BTreeMap::new();
    plans.insert(
        "planID".to_string(),
        AddonPlan {
            id: "planID".to_string(),
            name: "planName".to_string(),
            description: "planDescription".to_string(),
            metadata: AddonPlanMetadata {
                display_name: "displayName-1".to_string(),
            },
            bindable: Some(true),
            schemas,
        },
    );

    Addon {
        id: "addonID".to_string(),
        name: "addonName".to_string(),
        version: AddonVersion::new(1, 2, 3),
        description: "addonDescription".to_string(),
        bindable: true,
        metadata: AddonMetadata {
            display_name: "DisplayName".to_string(),
            provider_display_name: "ProviderDisplayName".to_string(),
            long_description: "LongDescription".to_string(),
            documentation_url: "DocumentationURL".to_string(),
            support_url: "SupportURL".to_string(),
            image_url: "ImageURL".to_string(),
            provision_only_once: true,
            labels,
        },
        tags: vec!["awesome-tag".to_string()],
        plans,
    }
}

pub fn fix_named_addon(id: &str) -> Addon {
    let mut addon = fix_addon_with_schemas(PlanSchemas::default());
    addon.id = id.to_string();
    addon.name = format!("{}-name", id);
    addon
}

pub fn fix_plan_schemas() -> PlanSchemas {
    PlanSchemas {
        provision: Some(fix_provision_schema()),
        update: Some(fix_update_schema()),
        bind: Some(fix_bind_schema()),
    }
}

fn fix_titled_schema(title: &str) -> PlanSchema {
    PlanSchema::new(json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "string",
        "title": title
    }))
}

pub fn fix_provision_schema() -> PlanSchema {
    fix_titled_schema("ProvisionSchema")
}

pub fn fix_update_schema() -> PlanSchema {
    fix_titled_schema("UpdateSchema")
}

pub fn fix_bind_schema() -> PlanSchema {
    fix_titled_schema("BindSchema")
}

pub fn fix_service() -> Service {
    fix_service_with_id("addonID")
}

pub fn fix_service_with_id(id: &str) -> Service {
    Service {
        id: id.to_string(),
        ..Default::default()
    }
}

pub fn fix_error() -> DomainError {
    DomainError::StorageError("some error".to_string())
}
