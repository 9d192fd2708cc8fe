// src/infrastructure/params.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::policy::PolicyOverrideProvider,
};
use crate::domain::password::ComponentParams;
use serde_json::Value;
use std::{collections::HashMap, fs, path::Path};

/// Component parameters loaded once from a JSON document of the form
/// `{"com_users": {"minimum_length": "8", ...}}`.
#[derive(Debug, Clone, Default)]
pub struct JsonParamsStore {
    components: HashMap<String, ComponentParams>,
}

impl JsonParamsStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> ApplicationResult<Self> {
        let document: Value = serde_json::from_str(raw)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid params JSON: {err}")))?;

        let Value::Object(entries) = document else {
            return Err(ApplicationError::infrastructure(
                "params document must be an object keyed by component",
            ));
        };

        let mut components = HashMap::with_capacity(entries.len());
        for (component, value) in entries {
            components.insert(component, ComponentParams::from_value(value)?);
        }

        Ok(Self { components })
    }

    pub fn from_file(path: &Path) -> ApplicationResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to read params file {}: {err}",
                path.display()
            ))
        })?;
        let store = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            components = store.components.len(),
            "loaded component parameters"
        );
        Ok(store)
    }

    pub fn with_component(mut self, component: impl Into<String>, params: ComponentParams) -> Self {
        self.components.insert(component.into(), params);
        self
    }
}

impl PolicyOverrideProvider for JsonParamsStore {
    fn params(&self, component: &str) -> ApplicationResult<Option<ComponentParams>> {
        Ok(self.components.get(component).cloned())
    }
}
