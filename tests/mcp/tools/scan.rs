use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{
    TsglotMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};

use crate::{
    McpTestFixture, VI_BODY, assert_pagination, extract_tool_result_json, fixture_drawpile,
};

fn scan_params(fixture: &McpTestFixture, rule: Option<&str>) -> Parameters<ScanIssuesParams> {
    Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: rule.map(str::to_string),
        limit: None,
        offset: None,
    })
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_clean_project() {
    let fixture = McpTestFixture::with_catalogs(vec![("drawpile_vi.ts", "vi_VN", VI_BODY)]).unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 1);
    assert_eq!(json_result["messageCount"], 2);
    assert_eq!(json_result["totalCount"], 0);
    assert!(json_result["rules"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_overview_counts_per_rule() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 2);
    assert_eq!(json_result["messageCount"], 5);
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 1);

    let rules = json_result["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0]["rule"], "numerus-count");
    assert_eq!(rules[0]["severity"], "error");
    assert_eq!(rules[0]["totalCount"], 1);
    assert_eq!(rules[0]["fileCount"], 1);
    assert_eq!(rules[1]["rule"], "obsolete-message");
    assert_eq!(rules[1]["severity"], "warning");
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_all_rules() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(&fixture, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["totalFileCount"], 1);
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_issues_filtered_by_rule() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(&fixture, Some("numerus-count")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "numerus-count");
    assert_eq!(item["severity"], "error");
    assert!(item["filePath"].as_str().unwrap().ends_with("drawpile_uk.ts"));
    assert_eq!(item["context"], "QGuiApplication");
    assert_eq!(item["source"], "%n layer(s)");
    assert_eq!(item["line"], 11);
    assert_eq!(item["col"], 9);
    assert_eq!(item["details"], "1 numerus form(s), uk_UA needs 3");
    assert!(item["hint"].as_str().unwrap().contains("tsglot fix"));
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(1),
        offset: None,
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_pagination(&json_result, 0, 1, true);

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(1),
        offset: Some(1),
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_pagination(&json_result, 1, 1, false);
}

#[tokio::test]
async fn test_scan_issues_limit_is_capped() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(1000),
        offset: None,
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_issues_parse_errors() {
    let fixture = fixture_drawpile().unwrap();
    fixture
        .write_raw("drawpile_de.ts", "<TS version=\"2.1\" language=\"de_DE\">\n<context>")
        .unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(&fixture, Some("parse-error")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "parse-error");
    assert!(item.get("line").is_none());
    assert!(item["filePath"].as_str().unwrap().ends_with("drawpile_de.ts"));
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_drawpile().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(scan_params(&fixture, Some("hardcoded-text")))
        .await;

    assert!(result.is_err());
}
