pub mod factory;
pub mod ollama;
pub mod openai;

pub use factory::{create_provider, sampling_from};
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
