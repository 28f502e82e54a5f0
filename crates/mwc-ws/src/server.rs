/*!
WebSocket server.
*/

use axum::{
  extract::{
    ws::{Message, WebSocket, WebSocketUpgrade},
    State,
  },
  response::Response,
  routing::get,
  Router,
};
use mwc::MwcError;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::control::WindowControl;
use crate::envelope::Envelope;
use crate::rpc::Bridge;

/// Default bind host.
pub const DEFAULT_WS_HOST: &str = "127.0.0.1";
/// Default WebSocket server port.
pub const DEFAULT_WS_PORT: u16 = 3031;

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_WS_HOST.to_owned(),
      port: DEFAULT_WS_PORT,
    }
  }
}

impl ServerConfig {
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
  #[error("Failed to bind WebSocket server to {addr}: {source}")]
  Bind {
    addr: String,
    source: std::io::Error,
  },
  #[error("WebSocket server failed: {0}")]
  Serve(std::io::Error),
}

/// Serve `/ws` until the listener fails.
pub async fn start_server<C: WindowControl>(
  bridge: Bridge<C>,
  config: ServerConfig,
) -> Result<(), ServerError> {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  let app = Router::new()
    .route("/ws", get(websocket_handler::<C>))
    .layer(cors)
    .with_state(bridge);

  let addr = config.addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|source| ServerError::Bind {
      addr: addr.clone(),
      source,
    })?;

  log::info!("WebSocket server: ws://{addr}/ws");

  axum::serve(listener, app)
    .await
    .map_err(ServerError::Serve)
}

async fn websocket_handler<C: WindowControl>(
  ws: WebSocketUpgrade,
  State(bridge): State<Bridge<C>>,
) -> Response {
  ws.on_upgrade(|socket| handle_websocket(socket, bridge))
}

async fn handle_websocket<C: WindowControl>(mut socket: WebSocket, bridge: Bridge<C>) {
  while let Some(msg) = socket.recv().await {
    match msg {
      Ok(Message::Text(text)) => {
        let bridge = bridge.clone();
        let response = tokio::task::spawn_blocking(move || respond(&bridge, &text))
          .await
          .unwrap_or_else(|e| {
            log::error!("[ws] request task failed: {e}");
            json!({ "success": false, "error": { "type": "MWCError", "message": "request task failed" } })
              .to_string()
          });
        if socket.send(Message::Text(response)).await.is_err() {
          break;
        }
      }
      Ok(Message::Close(_)) => {
        log::debug!("[ws] client closed connection");
        break;
      }
      Err(e) => {
        log::warn!("[ws] socket error: {e}");
        break;
      }
      Ok(_) => {}
    }
  }
  log::debug!("[ws] client disconnected");
}

/// Answer one `{id, method, args}` frame with the envelope plus `id`.
pub(crate) fn respond<C: WindowControl>(bridge: &Bridge<C>, request: &str) -> String {
  let (id, envelope) = match serde_json::from_str::<Value>(request) {
    Ok(req) => {
      let id = req.get("id").cloned().unwrap_or(Value::Null);
      match req.get("method").and_then(Value::as_str) {
        Some(method) => {
          let args = req.get("args").cloned().unwrap_or(Value::Null);
          (id, bridge.call_value(method, args))
        }
        None => (
          id,
          Envelope::failure(&MwcError::validation("method must be a string")),
        ),
      }
    }
    Err(e) => (Value::Null, Envelope::failure(&MwcError::decoding(e.to_string()))),
  };

  let mut response = serde_json::to_value(&envelope).unwrap_or(Value::Null);
  if let Some(obj) = response.as_object_mut() {
    obj.insert("id".to_owned(), id);
  }
  response.to_string()
}
