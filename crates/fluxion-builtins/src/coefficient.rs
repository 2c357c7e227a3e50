// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in `Coefficient` plugin.
//!
//! Scales one numeric input field by a fixed coefficient into an output field.

use async_trait::async_trait;
use fluxion_core::{FluxionError, GlobalConfig, PluginInstance, PluginMetadata, PluginParams};

use crate::sum::{numeric_field, required_string};

/// Multiplies a single input field by a configured constant.
#[derive(Debug)]
pub struct Coefficient {
    metadata: PluginMetadata,
    input_parameter: String,
    coefficient: f64,
    output_parameter: String,
}

impl Coefficient {
    /// Build from a `global-config` block with `input-parameter` (string),
    /// `coefficient` (number), and `output-parameter` (string).
    pub fn from_config(config: &GlobalConfig) -> Result<Self, FluxionError> {
        let input_parameter = required_string(config, "input-parameter")?;
        let output_parameter = required_string(config, "output-parameter")?;
        let coefficient = config
            .get("coefficient")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| {
                FluxionError::GlobalConfig("'coefficient' is required and must be a number".to_string())
            })?;

        Ok(Self {
            metadata: PluginMetadata::execute(),
            input_parameter,
            coefficient,
            output_parameter,
        })
    }
}

#[async_trait]
impl PluginInstance for Coefficient {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    async fn execute(&self, inputs: Vec<PluginParams>) -> Result<Vec<PluginParams>, FluxionError> {
        inputs
            .into_iter()
            .map(|mut record| {
                let value = numeric_field(&record, &self.input_parameter)?;
                record.insert(self.output_parameter.clone(), (value * self.coefficient).into());
                Ok(record)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn scales_input_by_coefficient() {
        let config = json!({
            "input-parameter": "vcpus",
            "coefficient": 0.5,
            "output-parameter": "cpu-share",
        })
        .as_object()
        .unwrap()
        .clone();
        let plugin = Coefficient::from_config(&config).unwrap();

        let record = json!({"vcpus": 8.0}).as_object().unwrap().clone();
        let outputs = plugin.execute(vec![record]).await.unwrap();
        assert_eq!(outputs[0]["cpu-share"], json!(4.0));
    }

    #[test]
    fn non_numeric_coefficient_is_a_config_error() {
        let config = json!({
            "input-parameter": "vcpus",
            "coefficient": "half",
            "output-parameter": "cpu-share",
        })
        .as_object()
        .unwrap()
        .clone();
        let err = Coefficient::from_config(&config).unwrap_err();
        assert!(matches!(err, FluxionError::GlobalConfig(_)));
    }
}
