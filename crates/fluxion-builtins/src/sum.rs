// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in `Sum` plugin.
//!
//! Adds a set of numeric input fields into a single output field, record by
//! record. Input records are otherwise passed through untouched.

use async_trait::async_trait;
use fluxion_core::{FluxionError, GlobalConfig, PluginInstance, PluginMetadata, PluginParams};

/// Sums the configured input fields into the output field.
#[derive(Debug)]
pub struct Sum {
    metadata: PluginMetadata,
    input_parameters: Vec<String>,
    output_parameter: String,
}

impl Sum {
    /// Build from a `global-config` block with `input-parameters` (array of
    /// field names) and `output-parameter` (field name).
    pub fn from_config(config: &GlobalConfig) -> Result<Self, FluxionError> {
        let input_parameters = string_list(config, "input-parameters")?;
        if input_parameters.is_empty() {
            return Err(FluxionError::GlobalConfig(
                "'input-parameters' must name at least one field".to_string(),
            ));
        }
        let output_parameter = required_string(config, "output-parameter")?;

        Ok(Self {
            metadata: PluginMetadata::execute(),
            input_parameters,
            output_parameter,
        })
    }
}

#[async_trait]
impl PluginInstance for Sum {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    async fn execute(&self, inputs: Vec<PluginParams>) -> Result<Vec<PluginParams>, FluxionError> {
        inputs
            .into_iter()
            .map(|mut record| {
                let mut total = 0.0;
                for field in &self.input_parameters {
                    total += numeric_field(&record, field)?;
                }
                record.insert(self.output_parameter.clone(), total.into());
                Ok(record)
            })
            .collect()
    }
}

/// Read a required string key from a global config block.
pub(crate) fn required_string(config: &GlobalConfig, key: &str) -> Result<String, FluxionError> {
    config
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| FluxionError::GlobalConfig(format!("'{key}' is required and must be a string")))
}

/// Read a required string-array key from a global config block.
pub(crate) fn string_list(config: &GlobalConfig, key: &str) -> Result<Vec<String>, FluxionError> {
    let values = config
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            FluxionError::GlobalConfig(format!("'{key}' is required and must be an array of strings"))
        })?;
    values
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                FluxionError::GlobalConfig(format!("'{key}' entries must be strings"))
            })
        })
        .collect()
}

/// Read a numeric field from an input record.
pub(crate) fn numeric_field(record: &PluginParams, field: &str) -> Result<f64, FluxionError> {
    record
        .get(field)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| FluxionError::InputValidation(format!("'{field}' is missing or not numeric")))
}
