use crate::config::LlmConfig;
use crate::providers::openai::GROQ_BASE_URL;
use crate::providers::{OllamaProvider, OpenAIProvider};
use crate::traits::{Provider, Sampling};
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn Provider>> {
    let provider_name = config.provider.as_deref().unwrap_or("groq");

    match provider_name.to_lowercase().as_str() {
        "groq" => {
            let api_key = require_key(config, "groq")?;
            let provider = OpenAIProvider::new(api_key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.as_deref().unwrap_or(GROQ_BASE_URL));
            Ok(Arc::new(provider))
        }
        "openai" => {
            let api_key = require_key(config, "openai")?;
            let mut provider = OpenAIProvider::new(api_key).with_model(config.model.clone());
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Arc::new(provider))
        }
        "ollama" => {
            let mut provider = OllamaProvider::new().with_model(config.model.clone());
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Arc::new(provider))
        }
        _ => Err(anyhow!(
            "Unknown provider: {}. Available: groq, openai, ollama",
            provider_name
        )),
    }
}

pub fn sampling_from(config: &LlmConfig) -> Sampling {
    Sampling {
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        top_p: config.top_p,
    }
}

fn require_key(config: &LlmConfig, provider: &str) -> Result<String> {
    if config.api_key.trim().is_empty() {
        Err(anyhow!(
            "No API key found for {provider}. Set JOBSCOUT_LLM_API_KEY or run 'jobscout onboard'."
        ))
    } else {
        Ok(config.api_key.clone())
    }
}
