use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{ConfigLoadResult, load_config},
    core::{EnvLocale, LoadedSources, LocaleSource, MergedTable, Messages, load_sources},
    locale::Locale,
};

use super::types::{
    ConfigDto, ConfigValues, CoverageResult, GetConfigParams, GetCoverageParams,
    GetNamespaceParams, NamespaceResult, TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct TrmergeMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TrmergeMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

struct Project {
    config: ConfigLoadResult,
    sources: LoadedSources,
    table: MergedTable,
}

fn load_project(project_root_path: &str) -> Result<Project, McpError> {
    let config = load_config(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;
    let sources = load_sources(&config.root, &config.config).map_err(|e| {
        McpError::internal_error(format!("Failed to load translations: {:#}", e), None)
    })?;
    let table = sources.merge();
    Ok(Project {
        config,
        sources,
        table,
    })
}

fn parse_locale(value: &str) -> Result<Locale, McpError> {
    value
        .parse()
        .map_err(|e: anyhow::Error| McpError::invalid_params(e.to_string(), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl TrmergeMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current trmerge configuration
    #[tool(description = "Get the current trmerge configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = load_config(Path::new(&params.0.project_root_path))
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            root: result.root.to_string_lossy().to_string(),
            config: ConfigValues::from(result.config),
        })
    }

    /// Resolve one key for a locale
    #[tool(
        description = "Resolve a translation key in a namespace. Falls back to English, then to the key itself. Without a locale, the configured locale environment variable decides."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let project = load_project(&params.project_root_path)?;

        let locale = match params.locale.as_deref() {
            Some(code) => parse_locale(code)?,
            None => EnvLocale::new(&project.config.config.locale_env).current(),
        };

        let table = &project.table;
        let text = table.lookup(&params.namespace, &params.key, locale).to_string();
        let resolved = table.get(&params.namespace, locale, &params.key).is_some();
        let fallback = table.is_fallback(&params.namespace, locale, &params.key);

        json_result(&TranslateResult {
            namespace: params.namespace,
            key: params.key,
            locale,
            text,
            resolved,
            fallback,
        })
    }

    /// Get every merged message of a namespace
    #[tool(
        description = "Get the merged messages of one namespace for every locale (or one locale), with English fallback applied."
    )]
    pub async fn get_namespace(
        &self,
        params: Parameters<GetNamespaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let project = load_project(&params.project_root_path)?;

        let Some(locales) = project.table.namespace(&params.namespace) else {
            return Err(McpError::invalid_params(
                format!("Unknown namespace \"{}\"", params.namespace),
                None,
            ));
        };

        let locales: BTreeMap<Locale, Messages> = match params.locale.as_deref() {
            Some(code) => {
                let locale = parse_locale(code)?;
                locales
                    .iter()
                    .filter(|(l, _)| **l == locale)
                    .map(|(l, m)| (*l, m.clone()))
                    .collect()
            }
            None => locales.clone(),
        };

        json_result(&NamespaceResult {
            namespace: params.namespace,
            locales,
        })
    }

    /// Get translation coverage statistics
    #[tool(
        description = "Get per-namespace, per-locale counts of translated keys, keys falling back to English, and keys English lacks."
    )]
    pub async fn get_coverage(
        &self,
        params: Parameters<GetCoverageParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;

        let rows: Vec<_> = project
            .table
            .coverage()
            .into_iter()
            .filter(|row| !row.locale.is_reference())
            .collect();

        json_result(&CoverageResult {
            files_loaded: project.sources.files_loaded,
            fallback_count: rows.iter().map(|r| r.fallback).sum(),
            rows,
            warnings: project
                .sources
                .warnings
                .iter()
                .map(|w| format!("{}: {}", w.file_path, w.message))
                .collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for TrmergeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "trmerge MCP resolves UI strings from merged translation bundles (en, fr, it, ja) \
                 with English fallback.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (reference bundle, locale sources)\n\
                 2. translate - Resolve one key in a namespace for a locale\n\
                 3. get_namespace - Get all merged messages of a namespace\n\
                 4. get_coverage - Get translated/fallback key counts per namespace and locale\n\n\
                 Unknown keys resolve to the key itself, so a translate result equal to the key \
                 usually means the key or namespace is misspelled."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TrmergeMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
