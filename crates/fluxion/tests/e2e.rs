// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the full pipeline context flow: a real TOML file on
//! disk, figment loading, plugin initialization, and plugin execution.

use std::io::Write;

use figment::providers::{Format, Toml};
use figment::Figment;
use fluxion_plugin::{Context, TIME_SYNC_PLUGIN_NAME};

fn write_context_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn load_context(path: &std::path::Path) -> Context {
    Figment::new()
        .merge(Toml::file(path))
        .extract()
        .expect("context file should parse")
}

#[tokio::test]
async fn builtin_pipeline_initializes_and_computes_from_a_context_file() {
    let file = write_context_file(
        r#"
[initialize.plugins.total-energy]
path = "builtin"
method = "Sum"
global-config = { input-parameters = ["cpu-energy", "memory-energy"], output-parameter = "total-energy" }

[initialize.plugins.carbon]
path = "builtin"
method = "Multiply"
global-config = { input-parameters = ["total-energy", "carbon-intensity"], output-parameter = "carbon" }
"#,
    );

    let context = load_context(file.path());
    let registry = fluxion_plugin::initialize(&context).await.unwrap();

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["total-energy", "carbon"]
    );

    // Run the two stages by hand, the way a pipeline executor would.
    let record = serde_json::json!({
        "cpu-energy": 1.0,
        "memory-energy": 0.5,
        "carbon-intensity": 400.0,
    })
    .as_object()
    .unwrap()
    .clone();

    let summed = registry
        .get("total-energy")
        .unwrap()
        .execute(vec![record])
        .await
        .unwrap();
    let multiplied = registry
        .get("carbon")
        .unwrap()
        .execute(summed)
        .await
        .unwrap();

    assert_eq!(multiplied[0]["total-energy"], serde_json::json!(1.5));
    assert_eq!(multiplied[0]["carbon"], serde_json::json!(600.0));
}

#[tokio::test]
async fn time_sync_block_alone_produces_a_working_registry() {
    let file = write_context_file(
        r#"
[initialize.plugins]

[time-sync]
start-time = "2024-09-04T00:00:00Z"
end-time = "2024-09-04T00:01:00Z"
allow-padding = true
interval = 5
"#,
    );

    let context = load_context(file.path());
    let registry = fluxion_plugin::initialize(&context).await.unwrap();

    let time_sync = registry.get(TIME_SYNC_PLUGIN_NAME).expect("auto-loaded");
    let outputs = time_sync.execute(vec![]).await.unwrap();
    // Padding covers the whole empty window with one synthesized record.
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0]["duration"], serde_json::json!(60));
}

#[tokio::test]
async fn invalid_manifest_in_context_file_fails_initialization() {
    let file = write_context_file(
        r#"
[initialize.plugins.broken]
method = "Sum"
"#,
    );

    let context = load_context(file.path());
    let err = fluxion_plugin::initialize(&context).await.unwrap_err();
    assert_eq!(err.to_string(), "path is missing");
}
