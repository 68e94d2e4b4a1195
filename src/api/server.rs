//! API Server Module
//!
//! This module implements a JSON-RPC server that runs submitted transactions
//! through the ante filters. Transactions admitted by `checkTx` are added to
//! the transaction pool; `simulateTx` runs the same checks without admitting.

use crate::{
    ante::{AnteDecorator, MessageFilterDecorator, terminator},
    config::Config,
    pool::TransactionPool,
    CheckTxResponse,
    Context,
    Tx,
};
use axum::{Router, routing::post, Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn, error};

/// Shared application state that is accessible across all request handlers
///
/// - `decorator`: The message filter chain, immutable after construction
/// - `tx_pool`: Transactions admitted by `checkTx`
/// - `chain_id`: Reported in the execution context of every check
#[derive(Clone)]
pub struct AppState {
    decorator: Arc<MessageFilterDecorator>,
    tx_pool: Arc<TransactionPool>,
    chain_id: String,
}

/// The main API server struct
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server instance
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port, chain id)
    /// * `decorator` - Message filter chain applied to every transaction
    /// * `tx_pool` - Pool receiving admitted transactions
    pub fn new(
        config: Config,
        decorator: MessageFilterDecorator,
        tx_pool: Arc<TransactionPool>,
    ) -> Self {
        let state = AppState {
            decorator: Arc::new(decorator),
            tx_pool,
            chain_id: config.chain.chain_id.clone(),
        };

        Self { config, state }
    }

    /// Router with a single POST endpoint at "/"
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(handle_rpc))
            .with_state(self.state.clone())
    }

    /// Starts the API server and begins listening for incoming requests
    ///
    /// # Returns
    /// `Ok(())` if the server shuts down cleanly, or an error if binding fails
    pub async fn start(self) -> anyhow::Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// JSON-RPC 2.0 request structure
///
/// - `jsonrpc`: Protocol version (should be "2.0")
/// - `method`: "checkTx" or "simulateTx"
/// - `params`: The transaction, `{"body": {"messages": [...]}}`
/// - `id`: Request identifier for matching responses
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` will be populated, but not both.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

/// JSON-RPC error object
///
/// - `code`: Error code (e.g., -32601 for method not found, -32602 for invalid params)
/// - `message`: Human-readable error description
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: &CheckTxResponse) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self {
                jsonrpc: "2.0".to_string(),
                result: Some(value),
                error: None,
                id,
            },
            Err(e) => Self::failure(id, -32603, format!("Internal error: {}", e)),
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError { code, message }),
            id,
        }
    }
}

/// Main RPC request handler
///
/// Routes the request to the appropriate handler based on the method name.
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);

    match request.method.as_str() {
        "checkTx" => handle_check_tx(state, request, false).await,
        "simulateTx" => handle_check_tx(state, request, true).await,
        _ => Json(JsonRpcResponse::failure(
            request.id,
            -32601,
            "Method not found".to_string(),
        )),
    }
}

/// Handles the "checkTx" and "simulateTx" RPC methods
///
/// 1. Deserializes the transaction from the request parameters
/// 2. Runs the message filter chain
/// 3. On acceptance outside simulation, adds the transaction to the pool,
///    reporting a rejection when the pool is full
async fn handle_check_tx(
    state: AppState,
    request: JsonRpcRequest,
    simulate: bool,
) -> Json<JsonRpcResponse> {
    let tx: Tx = match serde_json::from_value(request.params) {
        Ok(tx) => tx,
        Err(e) => {
            error!("Failed to deserialize transaction: {}", e);
            return Json(JsonRpcResponse::failure(
                request.id,
                -32602,
                format!("Invalid params: {}", e),
            ));
        }
    };

    let ctx = Context::new(state.chain_id.clone(), 0, chrono::Utc::now()).with_check_tx(!simulate);

    match state.decorator.ante_handle(&ctx, &tx, simulate, &terminator) {
        Ok(_) => {
            if !simulate {
                if let Err(e) = state.tx_pool.add(tx).await {
                    warn!("Transaction not admitted: {}", e);
                    return Json(JsonRpcResponse::success(
                        request.id,
                        &CheckTxResponse::not_admitted(simulate, e.to_string()),
                    ));
                }
                info!("Transaction admitted to pool");
            }
            Json(JsonRpcResponse::success(
                request.id,
                &CheckTxResponse::accepted(simulate),
            ))
        }
        Err(e) => {
            warn!("Transaction rejected: {}", e);
            Json(JsonRpcResponse::success(
                request.id,
                &CheckTxResponse::rejected(simulate, &e),
            ))
        }
    }
}
