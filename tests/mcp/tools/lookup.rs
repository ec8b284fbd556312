use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{TsglotMcpServer, types::LookupMessageParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_drawpile};

fn lookup_params(
    fixture: &McpTestFixture,
    context: &str,
    source: &str,
) -> LookupMessageParams {
    LookupMessageParams {
        project_root_path: fixture.root(),
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
        catalog: None,
    }
}

#[tokio::test]
async fn test_lookup_message_every_catalog() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let params = lookup_params(&fixture, "QGuiApplication", "All Files (*)");
    let result = server.lookup_message(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["context"], "QGuiApplication");
    assert_eq!(json_result["translatedCount"], 1);

    let results = json_result["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["language"], "uk_UA");
    assert_eq!(results[0]["text"], "All Files (*)");
    assert_eq!(results[0]["translated"], false);
    assert_eq!(results[1]["language"], "vi_VN");
    assert_eq!(results[1]["text"], "Mọi tập tin (*)");
    assert_eq!(results[1]["translated"], true);
}

#[tokio::test]
async fn test_lookup_message_catalog_filter_and_count() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "QGuiApplication", "%n layer(s)");
    params.count = Some(7);
    params.catalog = Some("*_vi.ts".to_string());

    let result = server.lookup_message(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let results = json_result["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["text"], "7 lớp");
}

#[tokio::test]
async fn test_lookup_message_invalid_glob() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "QGuiApplication", "All Files (*)");
    params.catalog = Some("[vi".to_string());

    assert!(server.lookup_message(Parameters(params)).await.is_err());
}
