// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in `Multiply` plugin.
//!
//! Multiplies a set of numeric input fields into a single output field.

use async_trait::async_trait;
use fluxion_core::{FluxionError, GlobalConfig, PluginInstance, PluginMetadata, PluginParams};

use crate::sum::{numeric_field, required_string, string_list};

/// Multiplies the configured input fields into the output field.
pub struct Multiply {
    metadata: PluginMetadata,
    input_parameters: Vec<String>,
    output_parameter: String,
}

impl Multiply {
    /// Build from a `global-config` block with `input-parameters` and
    /// `output-parameter`, same shape as `Sum`.
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
impl PluginInstance for Multiply {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    async fn execute(&self, inputs: Vec<PluginParams>) -> Result<Vec<PluginParams>, FluxionError> {
        inputs
            .into_iter()
            .map(|mut record| {
                let mut product = 1.0;
                for field in &self.input_parameters {
                    product *= numeric_field(&record, field)?;
                }
                record.insert(self.output_parameter.clone(), product.into());
                Ok(record)
            })
            .collect()
    }
}
