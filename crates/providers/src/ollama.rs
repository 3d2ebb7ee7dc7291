//! Ollama provider implementation.
//!
//! Talks to a local Ollama server through its native API:
//! - `POST /api/chat` for non-streaming chat completions
//! - `GET /api/tags` for model listing and health checks

use std::time::Duration;

use artscope_core::error::{Error, ProviderError};
use artscope_core::message::Message;
use artscope_core::provider::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A local model server speaking the Ollama API.
pub struct OllamaProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    /// Create a provider for the server at `base_url` (no `/api` suffix).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> artscope_core::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn to_api_messages(messages: &[Message]) -> Vec<ApiMessage> {
        messages
            .iter()
            .map(|m| ApiMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect()
    }

    async fn fetch_tags(&self) -> std::result::Result<reqwest::Response, ProviderError> {
        let url = format!("{}/api/tags", self.base_url);
        self.client.get(&url).send().await.map_err(map_transport)
    }
}

fn map_transport(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(e.to_string())
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);

        let body = ApiChatRequest {
            model: &request.model,
            messages: Self::to_api_messages(&request.messages),
            stream: false,
            options: ApiOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        debug!(model = %request.model, messages = request.messages.len(), "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status().as_u16();

        if status == 404 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(model = %request.model, body = %error_body, "Model not available");
            return Err(ProviderError::ModelNotFound(request.model));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiChatResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let usage = match (api_response.prompt_eval_count, api_response.eval_count) {
            (None, None) => None,
            (prompt, completion) => {
                let prompt_tokens = prompt.unwrap_or(0);
                let completion_tokens = completion.unwrap_or(0);
                Some(Usage {
                    prompt_tokens,
                    completion_tokens,
                    total_tokens: prompt_tokens + completion_tokens,
                })
            }
        };

        Ok(ProviderResponse {
            message: Message::assistant(api_response.message.content),
            usage,
            model: api_response.model.unwrap_or(request.model),
        })
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        let response = self.fetch_tags().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ProviderError::ApiError {
                status_code: status,
                message: "Failed to list models".into(),
            });
        }

        let tags: ApiTags = response.json().await.map_err(|e| ProviderError::ApiError {
            status_code: 200,
            message: format!("Failed to parse model list: {e}"),
        })?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        let response = self.fetch_tags().await?;
        Ok(response.status().is_success())
    }
}

// --- Ollama API types ---

#[derive(Debug, Serialize)]
struct ApiChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage>,
    stream: bool,
    options: ApiOptions,
}

#[derive(Debug, Serialize)]
struct ApiOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiChatResponse {
    #[serde(default)]
    model: Option<String>,
    message: ApiMessage,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiTags {
    #[serde(default)]
    models: Vec<ApiModel>,
}

#[derive(Debug, Deserialize)]
struct ApiModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use artscope_core::message::Role;
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};

    async fn spawn_ollama(router: Router) -> OllamaProvider {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        OllamaProvider::new(format!("http://{addr}/"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn message_conversion() {
        let messages = vec![Message::system("You are an art historian"), Message::user("Hello")];
        let api_messages = OllamaProvider::to_api_messages(&messages);
        assert_eq!(api_messages.len(), 2);
        assert_eq!(api_messages[0].role, "system");
        assert_eq!(api_messages[1].role, "user");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let provider =
            OllamaProvider::new("http://localhost:11434/", Duration::from_secs(1)).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:11434");
        assert_eq!(provider.name(), "ollama");
    }

    #[tokio::test]
    async fn complete_sends_history_and_reads_answer() {
        let router = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                let ok = body["model"] == "deepseek-r1:1.5b"
                    && body["stream"] == false
                    && body["messages"].as_array().map(Vec::len) == Some(2)
                    && body["messages"][0]["role"] == "system";
                if !ok {
                    return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad request" })));
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "model": "deepseek-r1:1.5b",
                        "message": { "role": "assistant", "content": "<think>hmm</think>Impressionism." },
                        "done": true,
                        "prompt_eval_count": 40,
                        "eval_count": 12
                    })),
                )
            }),
        );
        let provider = spawn_ollama(router).await;

        let request = ProviderRequest::new(
            "deepseek-r1:1.5b",
            vec![Message::system("persona"), Message::user("What style?")],
        );
        let response = provider.complete(request).await.unwrap();

        assert_eq!(response.message.role, Role::Assistant);
        assert_eq!(response.message.content, "<think>hmm</think>Impressionism.");
        let usage = response.usage.unwrap();
        assert_eq!(usage.total_tokens, 52);
    }

    #[tokio::test]
    async fn missing_model_is_reported() {
        let router = Router::new().route(
            "/api/chat",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "model 'nope' not found" })),
                )
            }),
        );
        let provider = spawn_ollama(router).await;

        let err = provider
            .complete(ProviderRequest::new("nope", vec![Message::user("hi")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ModelNotFound(ref m) if m == "nope"));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let router = Router::new().route(
            "/api/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "out of memory") }),
        );
        let provider = spawn_ollama(router).await;

        let err = provider
            .complete(ProviderRequest::new("m", vec![Message::user("hi")]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("out of memory"));
    }

    #[tokio::test]
    async fn lists_installed_models() {
        let router = Router::new().route(
            "/api/tags",
            get(|| async {
                Json(json!({ "models": [
                    { "name": "deepseek-r1:1.5b", "size": 1117322599u64 },
                    { "name": "llama3.2:3b" }
                ]}))
            }),
        );
        let provider = spawn_ollama(router).await;

        let models = provider.list_models().await.unwrap();
        assert_eq!(models, vec!["deepseek-r1:1.5b", "llama3.2:3b"]);
        assert!(provider.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let provider =
            OllamaProvider::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();

        let err = provider.health_check().await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }
}
