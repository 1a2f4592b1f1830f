//! MCP Server implementation
//!
//! The main server struct that reads JSON-RPC messages from stdin, routes
//! them to tool and resource handlers, and writes responses to stdout.

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::handlers::{ToolContext, handle_tool_call};
use crate::protocol::{
    InitializeParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    ReadResourceParams, ResourcesCapability, ServerCapabilities, ServerInfo, ToolCallParams,
    ToolsCapability, codes,
};
use crate::resource_handlers::read_resource;
use crate::resources::{ResourceDefinition, get_resource_definitions};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for Magic: The Gathering lookups
///
/// # Example
///
/// ```ignore
/// use mtg_mcp::{MtgMcpServer, ServerConfig, ToolContext};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let context = ToolContext::from_config(&ServerConfig::default())?;
///     MtgMcpServer::new(context).run().await?;
///     Ok(())
/// }
/// ```
pub struct MtgMcpServer {
    context: ToolContext,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,

    /// Available MCP resources
    resources: Vec<ResourceDefinition>,
}

impl MtgMcpServer {
    pub fn new(context: ToolContext) -> Self {
        Self {
            context,
            initialized: false,
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Load tool and resource definitions
    pub fn initialize(&mut self) {
        info!(data_root = %self.context.corpus.root().display(), "Initializing MCP server");

        self.tools = get_tool_definitions();
        self.resources = get_resource_definitions();
        self.initialized = true;
    }

    /// Run the MCP server over stdin/stdout until stdin closes
    pub async fn run(&mut self) -> Result<()> {
        self.initialize();

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        info!("MCP server ready, listening on stdio");

        self.serve(stdin.lock(), stdout.lock()).await
    }

    /// Process line-delimited messages from `input`, writing responses to `output`
    ///
    /// A line that is not valid UTF-8 is answered with a parse error and the
    /// loop moves on to the next line.
    pub async fn serve(&self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    debug!(request = %line.trim_end(), "Received message");
                    self.handle_message(line).await?
                }
                Err(e) => {
                    warn!(error = %e, "Message is not valid UTF-8");
                    parse_error(format!("Parse error: {e}"))?
                }
            };

            if !response.is_empty() {
                writeln!(output, "{response}")?;
                output.flush()?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the JSON-RPC response as a string, or an empty string for
    /// notifications. Malformed input is answered with a JSON-RPC error
    /// rather than returned as `Err`.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Unparseable message");
                return parse_error(format!("Parse error: {e}"));
            }
        };
        let request: JsonRpcRequest = match serde_json::from_value(raw.clone()) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed request");
                let id = raw.get("id").cloned().unwrap_or(Value::Null);
                let response = JsonRpcResponse::error(
                    Some(id),
                    codes::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                );
                return Ok(serde_json::to_string(&response)?);
            }
        };

        if request.jsonrpc != "2.0" {
            warn!(version = %request.jsonrpc, "Unsupported JSON-RPC version");
            let response = JsonRpcResponse::error(
                Some(request.id.unwrap_or(Value::Null)),
                codes::INVALID_REQUEST,
                format!("Invalid request: unsupported jsonrpc version \"{}\"", request.jsonrpc),
            );
            return Ok(serde_json::to_string(&response)?);
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification, no response");
            return Ok(String::new());
        }

        let id = request.id.clone();
        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "tools/list" => Ok(self.handle_tools_list(id)),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            "resources/list" => Ok(self.handle_resources_list(id)),
            "resources/read" => self.handle_resources_read(id, request.params).await,
            _ => Ok(JsonRpcResponse::error(
                id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        let response = response.unwrap_or_else(|e| {
            warn!(method = %request.method, error = %e, "Invalid params");
            JsonRpcResponse::error(
                request.id,
                codes::INVALID_PARAMS,
                format!("Invalid params: {e}"),
            )
        });

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    fn handle_initialize(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        if !params.is_null() {
            let params: InitializeParams = decode_params(params)?;
            info!(
                client_protocol = %params.protocol_version,
                client = ?params.client_info.as_ref().map(|c| &c.name),
                "Client initializing"
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "mtg-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools_value: Vec<Value> = self
            .tool_definitions()
            .into_iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools_value }))
    }

    /// Handle tools/call request
    ///
    /// Dispatch failures (unknown tool, bad arguments) become an
    /// error-flagged result, not a JSON-RPC error.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = decode_params(params)?;

        let tool_result =
            match handle_tool_call(&self.context, &tool_params.name, tool_params.arguments).await {
                Ok(result) => result,
                Err(e) => {
                    warn!(tool = %tool_params.name, error = %e, "Tool call rejected");
                    ToolResult::error(e.to_string())
                }
            };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    /// Handle resources/list request
    fn handle_resources_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let resources_value: Vec<Value> = self
            .resource_definitions()
            .into_iter()
            .map(|r| {
                json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "resources": resources_value }))
    }

    /// Handle resources/read request
    async fn handle_resources_read(
        &self,
        id: Option<Value>,
        params: Value,
    ) -> Result<JsonRpcResponse> {
        let read_params: ReadResourceParams = decode_params(params)?;

        match read_resource(&self.context.corpus, &read_params.uri).await {
            Ok(content) => Ok(JsonRpcResponse::success(
                id,
                json!({
                    "contents": [{
                        "uri": content.uri,
                        "mimeType": content.mime_type,
                        "text": content.text
                    }]
                }),
            )),
            Err(e) => Ok(JsonRpcResponse::error(
                id,
                codes::INVALID_PARAMS,
                format!("Resource error: {e}"),
            )),
        }
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        if self.initialized {
            self.tools.clone()
        } else {
            get_tool_definitions()
        }
    }

    fn resource_definitions(&self) -> Vec<ResourceDefinition> {
        if self.initialized {
            self.resources.clone()
        } else {
            get_resource_definitions()
        }
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Get available resources
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }
}

/// A serialized `-32700` response; the request id is unknown, so it is null
fn parse_error(message: String) -> Result<String> {
    let response = JsonRpcResponse::error(Some(Value::Null), codes::PARSE_ERROR, message);
    Ok(serde_json::to_string(&response)?)
}

fn decode_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| Error::InvalidArgument(e.to_string()))
}
