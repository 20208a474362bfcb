// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP `ServerHandler` exposing the LimeAI tools.
//!
//! Each tool forwards to [`LimeClient`]. Successful calls return the remote
//! response object as JSON content; failures become tool error results so
//! the calling agent sees the message instead of a protocol error.

use limeai_client::LimeClient;
use limeai_core::{LimeError, RemoteResult};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

const INSTRUCTIONS: &str = "LimeAI tools: read the current user's profile and save \
Markdown or HTML content as documents in the user's LimeAI workspace.";

/// Arguments of `save_markdown`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveMarkdownParams {
    /// Markdown text to store.
    pub text_content: String,
    /// Document filename. `.md` is appended if missing; a random name is used when omitted.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Arguments of `save_html`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveHtmlParams {
    /// HTML source to store.
    pub html_content: String,
    /// Document filename. `.html` is appended if missing; a random name is used when omitted.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// The LimeAI MCP server.
#[derive(Clone)]
pub struct LimeMcpServer {
    client: LimeClient,
    name: String,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LimeMcpServer {
    /// Creates a server reporting itself to hosts as `name`.
    pub fn new(client: LimeClient, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(name = "get_user_info", description = "Get the current LimeAI user's information")]
    async fn get_user_info(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "get_user_info", "tool invoked");
        into_tool_result("get_user_info", self.client.fetch_user_info().await)
    }

    #[tool(name = "save_markdown", description = "Save text content (Markdown) to LimeAI")]
    async fn save_markdown(
        &self,
        Parameters(params): Parameters<SaveMarkdownParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "save_markdown", file_name = ?params.file_name, "tool invoked");
        let result = self
            .client
            .save_markdown(&params.text_content, params.file_name.as_deref())
            .await;
        into_tool_result("save_markdown", result)
    }

    #[tool(name = "save_html", description = "Save HTML code to LimeAI")]
    async fn save_html(
        &self,
        Parameters(params): Parameters<SaveHtmlParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "save_html", file_name = ?params.file_name, "tool invoked");
        let result = self
            .client
            .save_html(&params.html_content, params.file_name.as_deref())
            .await;
        into_tool_result("save_html", result)
    }
}

#[tool_handler]
impl ServerHandler for LimeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

/// Translate an adapter outcome into what the host sees.
fn into_tool_result(
    tool: &str,
    outcome: Result<RemoteResult, LimeError>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(result) => Ok(CallToolResult::success(vec![Content::json(result)?])),
        Err(e) => {
            warn!(tool, kind = ?e.kind(), error = %e, "tool failed");
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

#[cfg(test)]
mod tests {
    use limeai_core::AccessCredential;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn server_for(base_url: &str, token: Option<&str>) -> LimeMcpServer {
        let client =
            LimeClient::new(base_url, token.and_then(AccessCredential::new), None).unwrap();
        LimeMcpServer::new(client, "test-server")
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[test]
    fn registers_three_tools() {
        let server = server_for("http://localhost", Some("tok"));
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["get_user_info", "save_html", "save_markdown"]);
    }

    #[test]
    fn content_params_are_required_and_file_name_is_optional() {
        let server = server_for("http://localhost", Some("tok"));
        let tools = server.tool_router.list_all();
        let markdown = tools
            .iter()
            .find(|tool| tool.name == "save_markdown")
            .expect("save_markdown registered");
        let schema = Value::Object(markdown.input_schema.as_ref().clone());
        let required = schema["required"].as_array().expect("required list");
        assert!(required.contains(&json!("text_content")));
        assert!(!required.contains(&json!("file_name")));
    }

    #[test]
    fn info_reports_name_and_tools_capability() {
        let info = server_for("http://localhost", None).get_info();
        assert_eq!(info.server_info.name, "test-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn save_markdown_returns_remote_body() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mcp/resource/create-document"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "success", "id": "123"})),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri(), Some("tok"));
        let result = server
            .save_markdown(Parameters(SaveMarkdownParams {
                text_content: "# Hello".into(),
                file_name: None,
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let body: Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(body, json!({"status": "success", "id": "123"}));
    }

    #[tokio::test]
    async fn remote_rejection_becomes_tool_error() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mcp/resource/create-document"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "error", "message": "quota exceeded"})),
            )
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri(), Some("tok"));
        let result = server
            .save_html(Parameters(SaveHtmlParams {
                html_content: "<p>hi</p>".into(),
                file_name: Some("report".into()),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("quota exceeded"));
    }

    #[tokio::test]
    async fn missing_credential_becomes_tool_error_without_request() {
        let mock = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri(), None);
        let result = server.get_user_info().await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("missing access credential."));
        mock.verify().await;
    }
}
