// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in `TimeSync` plugin.
//!
//! Aligns a batch of observation records to a configured time window: records
//! are sorted by timestamp, records outside the window are dropped, and when
//! padding is allowed zero-filled boundary records are synthesized so the
//! window edges are covered. The `time-sync` context block activates this
//! plugin without a manifest entry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fluxion_core::{FluxionError, GlobalConfig, PluginInstance, PluginMetadata, PluginParams};

/// Record field holding the observation's RFC 3339 timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Record field holding the observation's duration in seconds.
pub const DURATION_FIELD: &str = "duration";

/// Aligns records to a `[start-time, end-time]` window.
#[derive(Debug)]
pub struct TimeSync {
    metadata: PluginMetadata,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    allow_padding: bool,
}

impl TimeSync {
    /// Build from a config block with `start-time` and `end-time` (RFC 3339,
    /// required), `interval` (seconds, currently informational), and
    /// `allow-padding` (bool, default false).
    pub fn from_config(config: &GlobalConfig) -> Result<Self, FluxionError> {
        let start_time = window_edge(config, "start-time")?;
        let end_time = window_edge(config, "end-time")?;
        if start_time >= end_time {
            return Err(FluxionError::GlobalConfig(
                "'start-time' must be earlier than 'end-time'".to_string(),
            ));
        }
        if let Some(interval) = config.get("interval") {
            let seconds = interval.as_i64().ok_or_else(|| {
                FluxionError::GlobalConfig("'interval' must be an integer number of seconds".to_string())
            })?;
            if seconds <= 0 {
                return Err(FluxionError::GlobalConfig(
                    "'interval' must be positive".to_string(),
                ));
            }
        }
        let allow_padding = config
            .get("allow-padding")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok(Self {
            metadata: PluginMetadata::execute(),
            start_time,
            end_time,
            allow_padding,
        })
    }

    /// Zero-filled boundary record covering `[from, to]`, shaped after
    /// `template` when one exists.
    fn pad_record(
        &self,
        template: Option<&PluginParams>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> PluginParams {
        let mut record = PluginParams::new();
        if let Some(template) = template {
            for (key, value) in template {
                if value.is_number() {
                    record.insert(key.clone(), 0.into());
                } else {
                    record.insert(key.clone(), value.clone());
                }
            }
        }
        record.insert(TIMESTAMP_FIELD.to_string(), from.to_rfc3339().into());
        record.insert(
            DURATION_FIELD.to_string(),
            ((to - from).num_seconds()).into(),
        );
        record
    }
}

#[async_trait]
impl PluginInstance for TimeSync {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    async fn execute(&self, inputs: Vec<PluginParams>) -> Result<Vec<PluginParams>, FluxionError> {
        let mut stamped: Vec<(DateTime<Utc>, PluginParams)> = inputs
            .into_iter()
            .map(|record| Ok((record_timestamp(&record)?, record)))
            .collect::<Result<_, FluxionError>>()?;
        stamped.sort_by_key(|(ts, _)| *ts);
        stamped.retain(|(ts, _)| *ts >= self.start_time && *ts <= self.end_time);

        let mut outputs = Vec::with_capacity(stamped.len() + 2);

        if self.allow_padding {
            match stamped.first() {
                Some((first_ts, first)) if *first_ts > self.start_time => {
                    outputs.push(self.pad_record(Some(first), self.start_time, *first_ts));
                }
                None => {
                    outputs.push(self.pad_record(None, self.start_time, self.end_time));
                }
                _ => {}
            }
        }

        let tail = match stamped.last() {
            Some((last_ts, last)) => {
                let covered_until = *last_ts
                    + chrono::Duration::seconds(
                        last.get(DURATION_FIELD).and_then(|v| v.as_i64()).unwrap_or(0),
                    );
                (covered_until < self.end_time).then(|| (covered_until, last.clone()))
            }
            None => None,
        };

        outputs.extend(stamped.into_iter().map(|(_, record)| record));

        if self.allow_padding {
            if let Some((covered_until, template)) = tail {
                outputs.push(self.pad_record(Some(&template), covered_until, self.end_time));
            }
        }

        Ok(outputs)
    }
}

/// Parse a required RFC 3339 window edge from the config block.
fn window_edge(config: &GlobalConfig, key: &str) -> Result<DateTime<Utc>, FluxionError> {
    let raw = config.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        FluxionError::GlobalConfig(format!("'{key}' is required and must be an RFC 3339 string"))
    })?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FluxionError::GlobalConfig(format!("'{key}' is not a valid RFC 3339 timestamp: {e}")))
}

/// Parse a record's timestamp field.
fn record_timestamp(record: &PluginParams) -> Result<DateTime<Utc>, FluxionError> {
    let raw = record
        .get(TIMESTAMP_FIELD)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            FluxionError::InputValidation(format!("'{TIMESTAMP_FIELD}' is missing or not a string"))
        })?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            FluxionError::InputValidation(format!(
                "'{TIMESTAMP_FIELD}' is not a valid RFC 3339 timestamp: {e}"
            ))
        })
}
