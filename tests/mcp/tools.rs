use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use trmerge::mcp::{
    TrmergeMcpServer,
    types::{GetConfigParams, GetCoverageParams, GetNamespaceParams, TranslateParams},
};

use crate::{McpTestFixture, extract_tool_result_json, portal_fixture};

fn translate_params(
    fixture: &McpTestFixture,
    namespace: &str,
    key: &str,
    locale: Option<&str>,
) -> Parameters<TranslateParams> {
    Parameters(TranslateParams {
        project_root_path: fixture.root(),
        namespace: namespace.to_string(),
        key: key.to_string(),
        locale: locale.map(str::to_string),
    })
}

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrmergeMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["reference"], "translations/en.json");
    assert_eq!(json_result["config"]["localeEnv"], "LOCALE");
    assert_eq!(json_result["config"]["combine"], "keys");
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "reference": "i18n/all-en.json",
            "sources": {"it": ["i18n/*-it.json"]},
            "combine": "namespaces"
        }))
        .unwrap();

    let server = TrmergeMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let json_result = extract_tool_result_json(&server.get_config(params).await.unwrap());
    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["reference"], "i18n/all-en.json");
    assert_eq!(json_result["config"]["sources"], json!({"it": ["i18n/*-it.json"]}));
    assert_eq!(json_result["config"]["combine"], "namespaces");
    assert_eq!(
        json_result["root"],
        fixture.root_path().to_string_lossy().to_string()
    );
}

// ============================================================================
// translate tests
// ============================================================================

#[tokio::test]
async fn test_translate_override_and_fallback() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let result = server
        .translate(translate_params(&fixture, "app", "title", Some("fr")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "Concentrateur");
    assert_eq!(json_result["locale"], "fr");
    assert_eq!(json_result["resolved"], true);
    assert_eq!(json_result["fallback"], false);

    let result = server
        .translate(translate_params(&fixture, "app", "subtitle", Some("fr")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "Portal");
    assert_eq!(json_result["fallback"], true);
}

#[tokio::test]
async fn test_translate_unknown_key_returns_key() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let result = server
        .translate(translate_params(&fixture, "app", "nope.key", Some("ja")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "nope.key");
    assert_eq!(json_result["resolved"], false);
}

#[tokio::test]
async fn test_translate_rejects_unsupported_locale() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let result = server
        .translate(translate_params(&fixture, "app", "title", Some("de")))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_translate_missing_reference_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrmergeMcpServer::new();

    let result = server
        .translate(translate_params(&fixture, "app", "title", Some("en")))
        .await;
    assert!(result.is_err());
}

// ============================================================================
// get_namespace tests
// ============================================================================

#[tokio::test]
async fn test_get_namespace_all_locales() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let params = Parameters(GetNamespaceParams {
        project_root_path: fixture.root(),
        namespace: "plugin.extensions".to_string(),
        locale: None,
    });

    let json_result = extract_tool_result_json(&server.get_namespace(params).await.unwrap());
    assert_eq!(json_result["namespace"], "plugin.extensions");
    assert_eq!(
        json_result["locales"],
        json!({
            "en": {"common.readMore": "Read more"},
            "fr": {"common.readMore": "Read more"},
            "it": {"common.readMore": "Read more"},
            "ja": {"common.readMore": "続きを読む"}
        })
    );
}

#[tokio::test]
async fn test_get_namespace_single_locale() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let params = Parameters(GetNamespaceParams {
        project_root_path: fixture.root(),
        namespace: "app".to_string(),
        locale: Some("fr".to_string()),
    });

    let json_result = extract_tool_result_json(&server.get_namespace(params).await.unwrap());
    assert_eq!(
        json_result["locales"],
        json!({"fr": {"subtitle": "Portal", "title": "Concentrateur"}})
    );
}

#[tokio::test]
async fn test_get_namespace_unknown() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let params = Parameters(GetNamespaceParams {
        project_root_path: fixture.root(),
        namespace: "missing".to_string(),
        locale: None,
    });

    assert!(server.get_namespace(params).await.is_err());
}

// ============================================================================
// get_coverage tests
// ============================================================================

#[tokio::test]
async fn test_get_coverage() {
    let fixture = portal_fixture().unwrap();
    let server = TrmergeMcpServer::new();

    let params = Parameters(GetCoverageParams {
        project_root_path: fixture.root(),
    });

    let json_result = extract_tool_result_json(&server.get_coverage(params).await.unwrap());
    assert_eq!(json_result["filesLoaded"], 3);
    // fr: subtitle + readMore; it: title + subtitle + readMore; ja: title + subtitle
    assert_eq!(json_result["fallbackCount"], 7);

    let rows = json_result["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    let ja_plugin = rows
        .iter()
        .find(|r| r["namespace"] == "plugin.extensions" && r["locale"] == "ja")
        .unwrap();
    assert_eq!(ja_plugin["translated"], 1);
    assert_eq!(ja_plugin["fallback"], 0);

    // The it glob matched nothing.
    assert_eq!(json_result["warnings"].as_array().unwrap().len(), 1);
}
