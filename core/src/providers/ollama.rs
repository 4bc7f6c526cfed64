use crate::traits::{ChatMessage, ChatRequest, ChatResponse, Provider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    options: OllamaOptions,
    format: &'a str,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
    num_predict: u32,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: Option<String>,
}

/// Local models served by Ollama. Requests JSON-formatted output.
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn convert_messages(messages: &[ChatMessage]) -> Vec<OllamaMessage<'_>> {
        messages
            .iter()
            .map(|m| OllamaMessage {
                role: &m.role,
                content: &m.content,
            })
            .collect()
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(&self, request: ChatRequest<'_>) -> anyhow::Result<ChatResponse> {
        let ollama_request = OllamaRequest {
            model: &self.model,
            messages: Self::convert_messages(request.messages),
            options: OllamaOptions {
                temperature: request.sampling.temperature,
                num_predict: request.sampling.max_tokens,
                top_p: request.sampling.top_p,
            },
            format: "json",
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&ollama_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Ollama API error ({}): {}",
                status,
                error_text
            ));
        }

        let ollama_response: OllamaResponse = response.json().await?;
        let text = ollama_response
            .message
            .content
            .filter(|c| !c.trim().is_empty());

        Ok(ChatResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_map_max_tokens_to_num_predict() {
        let messages = [ChatMessage::user("rust roles")];
        let body = OllamaRequest {
            model: "llama3.2",
            messages: OllamaProvider::convert_messages(&messages),
            options: OllamaOptions {
                temperature: 0.2,
                num_predict: 512,
                top_p: 1.0,
            },
            format: "json",
            stream: false,
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["options"]["num_predict"], 512);
        assert_eq!(json["format"], "json");
        assert_eq!(json["messages"][0]["content"], "rust roles");
    }
}
