use helm_broker_domain::{
    Addon, AddonMetadata, AddonPlan, DomainError, InputParameters, Plan, PlanSchema,
    PlanSchemaType, Schemas, Service, ServiceBindingSchema, ServiceInstanceSchema,
};
use jsonschema::{Draft, JSONSchema};
use serde_json::{Map, Value};

use crate::ports::AddonConverter;

const LOCAL_LABEL: &str = "local";

/// Default [`AddonConverter`]: maps the addon model onto the OSB catalog entry.
///
/// Every served service is labelled `local=true`; a caller-provided `local`
/// label is overwritten, never rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddonToServiceConverter;

impl AddonToServiceConverter {
    pub fn new() -> Self {
        Self
    }

    fn convert_metadata(&self, metadata: &AddonMetadata) -> Result<Map<String, Value>, DomainError> {
        let mut metadata = metadata.clone();
        metadata
            .labels
            .insert(LOCAL_LABEL.to_string(), "true".to_string());

        // A struct always encodes as a JSON object.
        serde_json::to_value(&metadata)
            .and_then(serde_json::from_value)
            .map_err(|e| DomainError::MetadataEncoding(e.to_string()))
    }

    fn convert_plan(&self, plan: &AddonPlan, addon_bindable: bool) -> Result<Plan, DomainError> {
        let mut metadata = Map::new();
        metadata.insert(
            "displayName".to_string(),
            Value::String(plan.metadata.display_name.clone()),
        );

        Ok(Plan {
            id: plan.id.clone(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            bindable: Some(plan.resolve_bindable(addon_bindable)),
            metadata,
            schemas: self.convert_schemas(plan)?,
        })
    }

    fn convert_schemas(&self, plan: &AddonPlan) -> Result<Option<Schemas>, DomainError> {
        if plan.schemas.is_empty() {
            return Ok(None);
        }

        let mut instance = ServiceInstanceSchema::default();
        let mut binding = ServiceBindingSchema::default();

        for (schema_type, schema) in plan.schemas.iter() {
            let params = Some(input_parameters(&plan.id, schema_type, schema)?);
            match schema_type {
                PlanSchemaType::Provision => instance.create = params,
                PlanSchemaType::Update => instance.update = params,
                PlanSchemaType::Bind => binding.create = params,
            }
        }

        let has_instance = instance.create.is_some() || instance.update.is_some();
        Ok(Some(Schemas {
            service_instance: has_instance.then_some(instance),
            service_binding: binding.create.is_some().then_some(binding),
        }))
    }
}

impl AddonConverter for AddonToServiceConverter {
    fn convert(&self, addon: &Addon) -> Result<Service, DomainError> {
        let plans = addon
            .plans
            .values()
            .map(|plan| self.convert_plan(plan, addon.bindable))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Service {
            id: addon.id.clone(),
            name: addon.name.clone(),
            description: addon.description.clone(),
            tags: addon.tags.clone(),
            bindable: addon.bindable,
            plans,
            metadata: self.convert_metadata(&addon.metadata)?,
        })
    }
}

fn input_parameters(
    plan_id: &str,
    schema_type: PlanSchemaType,
    schema: &PlanSchema,
) -> Result<InputParameters, DomainError> {
    let invalid = |reason: String| DomainError::InvalidPlanSchema {
        plan_id: plan_id.to_string(),
        schema_type: schema_type.to_str().to_string(),
        reason,
    };

    let document = schema.as_value();
    if !document.is_object() {
        return Err(invalid("expected a JSON object".to_string()));
    }

    JSONSchema::options()
        .with_draft(Draft::Draft4)
        .compile(document)
        .map_err(|e| invalid(e.to_string()))?;

    Ok(InputParameters {
        parameters: document.clone(),
    })
}
