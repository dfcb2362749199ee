use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::{Coverage, Messages, merge::CombineMode},
    locale::Locale,
};

// ============================================================
// Parameter Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project containing .trmergerc.json
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path of the project containing .trmergerc.json
    pub project_root_path: String,
    /// Translation namespace, e.g. "plugin.extensions"
    pub namespace: String,
    /// Message key, e.g. "common.readMore"
    pub key: String,
    /// Locale code (en, fr, it, ja). Defaults to the configured locale environment variable.
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNamespaceParams {
    /// Absolute path of the project containing .trmergerc.json
    pub project_root_path: String,
    pub namespace: String,
    /// Restrict the result to one locale code
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCoverageParams {
    /// Absolute path of the project containing .trmergerc.json
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    /// Directory config paths are resolved against
    pub root: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub reference: String,
    pub sources: BTreeMap<String, Vec<String>>,
    pub locale_env: String,
    pub combine: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            reference: c.reference,
            sources: c.sources,
            locale_env: c.locale_env,
            combine: match c.combine {
                CombineMode::Keys => "keys".to_string(),
                CombineMode::Namespaces => "namespaces".to_string(),
            },
        }
    }
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub namespace: String,
    pub key: String,
    pub locale: Locale,
    pub text: String,
    /// False when nothing was defined and the key itself was returned
    pub resolved: bool,
    /// True when the English value stood in for a missing translation
    pub fallback: bool,
}

// ============================================================
// Namespace Types (get_namespace)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceResult {
    pub namespace: String,
    pub locales: BTreeMap<Locale, Messages>,
}

// ============================================================
// Coverage Types (get_coverage)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    pub files_loaded: usize,
    pub fallback_count: usize,
    pub rows: Vec<Coverage>,
    pub warnings: Vec<String>,
}
