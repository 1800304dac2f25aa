#![allow(dead_code)]
use helm_broker_domain::{Addon, AddonPlan, AddonVersion, PlanSchemas};
use std::collections::BTreeMap;

pub struct AddonBuilder {
    id: String,
    name: String,
    version: AddonVersion,
    bindable: bool,
    plans: Vec<String>,
}

impl AddonBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("{}-name", id),
            version: AddonVersion::new(0, 1, 0),
            bindable: false,
            plans: vec!["default".to_string()],
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn version(mut self, major: u64, minor: u64, patch: u64) -> Self {
        self.version = AddonVersion::new(major, minor, patch);
        self
    }

    pub fn bindable(mut self, bindable: bool) -> Self {
        self.bindable = bindable;
        self
    }

    pub fn plans(mut self, plans: &[&str]) -> Self {
        self.plans = plans.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn build(self) -> Addon {
        let plans: BTreeMap<String, AddonPlan> = self
            .plans
            .into_iter()
            .map(|id| {
                let plan = AddonPlan {
                    id: id.clone(),
                    name: id.clone(),
                    description: format!("{} plan", id),
                    metadata: Default::default(),
                    bindable: None,
                    schemas: PlanSchemas::default(),
                };
                (id, plan)
            })
            .collect();

        Addon {
            id: self.id,
            name: self.name,
            version: self.version,
            description: String::new(),
            bindable: self.bindable,
            metadata: Default::default(),
            tags: vec![],
            plans,
        }
    }
}
