/*!
Success/error envelopes.
*/

use mwc::MwcError;
use serde::Serialize;
use ts_rs::TS;

use crate::rpc::RpcResponse;

/// Error details reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ErrorInfo {
  /// Error class: `PermError`, `NotFoundError`, `ValidationError`,
  /// `DecodingError` or `MWCError`.
  #[serde(rename = "type")]
  pub kind: String,
  /// Debug form of the error.
  pub description: String,
  /// Human readable message.
  pub message: String,
  /// Frames captured where the error was created. Empty when capture was off.
  pub stack: Vec<String>,
}

impl ErrorInfo {
  pub(crate) fn from_error(error: &MwcError) -> Self {
    Self {
      kind: error.class().to_owned(),
      description: format!("{error:?}"),
      message: error.to_string(),
      stack: error.stack(),
    }
  }
}

/// Call result as sent back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Envelope {
  pub success: bool,
  /// Omitted for calls without a result.
  #[serde(skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub value: Option<RpcResponse>,
  #[serde(skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub error: Option<ErrorInfo>,
}

impl Envelope {
  pub fn success(value: RpcResponse) -> Self {
    let value = match value {
      RpcResponse::Null => None,
      other => Some(other),
    };
    Self {
      success: true,
      value,
      error: None,
    }
  }

  pub fn failure(error: &MwcError) -> Self {
    Self {
      success: false,
      value: None,
      error: Some(ErrorInfo::from_error(error)),
    }
  }

  /// Encoded JSON text.
  pub fn encode(&self) -> String {
    serde_json::to_string(self).unwrap_or_else(|e| {
      log::error!("[bridge] failed to encode envelope: {e}");
      r#"{"success":false,"error":{"type":"MWCError","description":"Encoding","message":"Failed to encode response","stack":[]}}"#.to_owned()
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn unit_success_omits_value() {
    let env = Envelope::success(RpcResponse::Null);
    assert_eq!(serde_json::to_value(&env).unwrap(), json!({"success": true}));
  }

  #[test]
  fn success_carries_value() {
    let env = Envelope::success(RpcResponse::Number(24.0));
    assert_eq!(
      serde_json::to_value(&env).unwrap(),
      json!({"success": true, "value": 24.0})
    );
  }

  #[test]
  fn failure_shape() {
    let env = Envelope::failure(&MwcError::not_found("Window"));
    let value = serde_json::to_value(&env).unwrap();
    assert_eq!(value["success"], json!(false));
    assert_eq!(value["error"]["type"], json!("NotFoundError"));
    assert_eq!(value["error"]["message"], json!("Window not found"));
    assert_eq!(value["error"]["description"], json!("NotFound(\"Window\")"));
    assert!(value["error"]["stack"].is_array());
    assert!(value.get("value").is_none());
  }

  #[test]
  fn stack_comes_from_the_error() {
    mwc::force_backtraces();
    let err = MwcError::permission_denied();
    let info = ErrorInfo::from_error(&err);
    assert_eq!(info.kind, "PermError");
    assert!(!info.stack.is_empty());
    assert_eq!(info.stack, err.stack());
  }

  #[test]
  fn encode_is_json_text() {
    let text = Envelope::failure(&MwcError::validation("bad")).encode();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["error"]["type"], json!("ValidationError"));
  }
}
