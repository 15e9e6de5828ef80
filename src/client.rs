//! Remote Action Client
//!
//! Talks to the CodeCrafter backend over HTTP. One POST per action,
//! single attempt, fail fast: transport problems, non-success statuses
//! and unexpected body shapes all map to a typed [`RemoteFailure`].

use crate::action::{ActionKind, ActionRequest, ActionResult};
use crate::config::Config;
use crate::error::RemoteFailure;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Trait for backends that can answer an action request
#[async_trait]
pub trait ActionClient: Send + Sync {
    /// Perform the remote call for one action
    async fn send(&self, request: &ActionRequest) -> Result<ActionResult, RemoteFailure>;
}

#[derive(Debug, Deserialize)]
struct GenerateBody {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExplainBody {
    explanation: Option<String>,
}

/// HTTP client for the CodeCrafter backend
#[derive(Clone)]
pub struct RemoteActionClient {
    endpoint: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl RemoteActionClient {
    /// Create a new client from config; the endpoint is fixed for the
    /// life of the client
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout),
            http: reqwest::Client::new(),
        }
    }

    /// Health check - verify the backend is reachable
    pub async fn health_check(&self) -> bool {
        match self
            .http
            .get(&self.endpoint)
            .timeout(Duration::from_secs(2))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn remote_path(kind: ActionKind) -> &'static str {
        match kind {
            ActionKind::GenerateCode => "/generate-code",
            ActionKind::ExplainCode => "/explain-code",
        }
    }

    fn payload(request: &ActionRequest) -> serde_json::Value {
        match request.kind {
            ActionKind::GenerateCode => serde_json::json!({
                "prompt": request.input_text,
                "language": request.language_id,
            }),
            ActionKind::ExplainCode => serde_json::json!({
                "code": request.input_text,
                "language": request.language_id,
            }),
        }
    }

    fn parse_body(kind: ActionKind, body: &str) -> Result<ActionResult, RemoteFailure> {
        match kind {
            ActionKind::GenerateCode => {
                let parsed: GenerateBody = serde_json::from_str(body)
                    .map_err(|e| RemoteFailure::malformed(format!("invalid response body: {e}")))?;
                let code = parsed
                    .code
                    .ok_or_else(|| RemoteFailure::malformed("response is missing the 'code' field"))?;
                Ok(ActionResult::Insertion { text: code })
            }
            ActionKind::ExplainCode => {
                let parsed: ExplainBody = serde_json::from_str(body)
                    .map_err(|e| RemoteFailure::malformed(format!("invalid response body: {e}")))?;
                let explanation = parsed.explanation.ok_or_else(|| {
                    RemoteFailure::malformed("response is missing the 'explanation' field")
                })?;
                Ok(ActionResult::Display {
                    content: explanation,
                    format: "markdown".to_string(),
                })
            }
        }
    }
}

#[async_trait]
impl ActionClient for RemoteActionClient {
    async fn send(&self, request: &ActionRequest) -> Result<ActionResult, RemoteFailure> {
        let url = format!("{}{}", self.endpoint, Self::remote_path(request.kind));
        debug!("📡 POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&Self::payload(request))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| RemoteFailure::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteFailure::network(e.to_string()))?;

        if !status.is_success() {
            warn!("❌ Backend error ({}): {}", status, body);
            return Err(RemoteFailure::server_error(format!(
                "backend returned {status}"
            )));
        }

        Self::parse_body(request.kind, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureCause;

    fn request(kind: ActionKind) -> ActionRequest {
        ActionRequest::from_selection(kind, "let x = 1;", "rust").unwrap()
    }

    #[test]
    fn test_path_mapping() {
        assert_eq!(
            RemoteActionClient::remote_path(ActionKind::GenerateCode),
            "/generate-code"
        );
        assert_eq!(
            RemoteActionClient::remote_path(ActionKind::ExplainCode),
            "/explain-code"
        );
    }

    #[test]
    fn test_payload_shape_per_kind() {
        let generate = RemoteActionClient::payload(&request(ActionKind::GenerateCode));
        assert_eq!(generate["prompt"], "let x = 1;");
        assert_eq!(generate["language"], "rust");
        assert!(generate.get("code").is_none());

        let explain = RemoteActionClient::payload(&request(ActionKind::ExplainCode));
        assert_eq!(explain["code"], "let x = 1;");
        assert_eq!(explain["language"], "rust");
        assert!(explain.get("prompt").is_none());
    }

    #[test]
    fn test_parse_success_bodies() {
        let generated =
            RemoteActionClient::parse_body(ActionKind::GenerateCode, r#"{"code": "X"}"#).unwrap();
        assert_eq!(
            generated,
            ActionResult::Insertion {
                text: "X".to_string()
            }
        );

        let explained =
            RemoteActionClient::parse_body(ActionKind::ExplainCode, r#"{"explanation": "Y"}"#)
                .unwrap();
        assert_eq!(
            explained,
            ActionResult::Display {
                content: "Y".to_string(),
                format: "markdown".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = RemoteActionClient::parse_body(ActionKind::GenerateCode, "{}").unwrap_err();
        assert_eq!(err.cause, FailureCause::MalformedResponse);

        let err = RemoteActionClient::parse_body(ActionKind::ExplainCode, "{}").unwrap_err();
        assert_eq!(err.cause, FailureCause::MalformedResponse);
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = RemoteActionClient::parse_body(ActionKind::GenerateCode, "<html>oops</html>")
            .unwrap_err();
        assert_eq!(err.cause, FailureCause::MalformedResponse);
    }
}
