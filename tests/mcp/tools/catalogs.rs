use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{TsglotMcpServer, types::GetCatalogsParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_drawpile};

#[tokio::test]
async fn test_get_catalogs_progress() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    // Sorted by path: uk before vi
    let uk = &catalogs[0];
    assert!(uk["filePath"].as_str().unwrap().ends_with("drawpile_uk.ts"));
    assert_eq!(uk["language"], "uk_UA");
    assert_eq!(uk["family"], "drawpile");
    assert_eq!(uk["formCount"], 3);
    assert_eq!(uk["messages"], 2);
    assert_eq!(uk["finished"], 1);
    assert_eq!(uk["unfinished"], 1);
    assert_eq!(uk["obsolete"], 1);

    let vi = &catalogs[1];
    assert_eq!(vi["language"], "vi_VN");
    assert_eq!(vi["family"], "drawpile");
    assert_eq!(vi["formCount"], 1);
    assert_eq!(vi["finished"], 2);

    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_lists_parse_errors() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_raw("broken_de.ts", "<TS version=\"2.1\" language=\"de_DE\">\n<context>")
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["catalogs"].as_array().unwrap().is_empty());
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("broken_de.ts")
    );
    assert!(!errors[0]["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_missing_root() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture
            .root_path()
            .join("does-not-exist")
            .to_string_lossy()
            .to_string(),
    });

    assert!(server.get_catalogs(params).await.is_err());
}
