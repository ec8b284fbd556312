use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsglot::mcp::{TsglotMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert!(json_result.get("configPath").is_none());
    assert_eq!(json_result["config"]["catalogsRoot"], ".");
    assert_eq!(json_result["config"]["includes"], json!(["**/*.ts"]));
    assert_eq!(json_result["config"]["includeUnfinished"], true);
}

#[tokio::test]
async fn test_get_config_from_tsglotrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "catalogsRoot": "i18n",
            "ignoreContexts": ["QShortcut"],
            "disabledRules": ["accelerator-mismatch"]
        }))
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert!(
        json_result["configPath"]
            .as_str()
            .unwrap()
            .ends_with(".tsglotrc.json")
    );
    assert_eq!(json_result["config"]["catalogsRoot"], "i18n");
    assert_eq!(json_result["config"]["ignoreContexts"], json!(["QShortcut"]));
    assert_eq!(
        json_result["config"]["disabledRules"],
        json!(["accelerator-mismatch"])
    );
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "disabledRules": ["no-such-rule"] }))
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
