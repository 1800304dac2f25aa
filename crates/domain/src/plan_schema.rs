use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSchemaType {
    Provision,
    Update,
    Bind,
}

impl PlanSchemaType {
    pub fn to_str(&self) -> &'static str {
        match self {
            PlanSchemaType::Provision => "provision",
            PlanSchemaType::Update => "update",
            PlanSchemaType::Bind => "bind",
        }
    }
}

impl std::fmt::Display for PlanSchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// JSON Schema (draft-04) document describing the parameters of one plan operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanSchema(Value);

impl PlanSchema {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PlanSchema {
    fn from(document: Value) -> Self {
        Self(document)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSchemas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision: Option<PlanSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<PlanSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<PlanSchema>,
}

impl PlanSchemas {
    pub fn is_empty(&self) -> bool {
        self.provision.is_none() && self.update.is_none() && self.bind.is_none()
    }

    pub fn get(&self, schema_type: PlanSchemaType) -> Option<&PlanSchema> {
        match schema_type {
            PlanSchemaType::Provision => self.provision.as_ref(),
            PlanSchemaType::Update => self.update.as_ref(),
            PlanSchemaType::Bind => self.bind.as_ref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlanSchemaType, &PlanSchema)> {
        [
            PlanSchemaType::Provision,
            PlanSchemaType::Update,
            PlanSchemaType::Bind,
        ]
        .into_iter()
        .filter_map(|t| self.get(t).map(|s| (t, s)))
    }
}
