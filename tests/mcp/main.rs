use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a translations/ directory and config file.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Write translations/<name>.json
    pub fn write_bundle(&self, name: &str, content: &Value) -> Result<()> {
        let path = self
            .project_root
            .join("translations")
            .join(format!("{}.json", name));
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize bundle: {}", name))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write bundle: {}", path.display()))?;
        Ok(())
    }

    /// Write a .trmergerc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".trmergerc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// A fixture using the default layout: translations/en.json plus
/// translations/*-<locale>.json.
pub fn portal_fixture() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::new()?;
    fixture.write_bundle(
        "en",
        &json!({
            "app": {"en": {"title": "Hub", "subtitle": "Portal"}},
            "plugin.extensions": {"en": {"common.readMore": "Read more"}}
        }),
    )?;
    fixture.write_bundle(
        "backstage-fr",
        &json!({"app": {"fr": {"title": "Concentrateur"}}}),
    )?;
    fixture.write_bundle(
        "rhdh-ja",
        &json!({"plugin.extensions": {"ja": {"common.readMore": "続きを読む"}}}),
    )?;
    Ok(fixture)
}

/// Extract and parse the JSON text from a tool result.
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
