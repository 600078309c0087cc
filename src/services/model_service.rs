use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::constants::prompts::{quiz_request_prompt, QUIZ_TEACHER_PROMPT};
use crate::errors::{AppError, AppResult};

/// Produces raw quiz text for a subject and education level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, subject: &str, level: &str) -> AppResult<String>;
}

/// Chat-completion backed generator. The base URL is configurable so any
/// OpenAI-compatible provider works.
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model_name.clone(),
        }
    }
}

#[async_trait]
impl QuizGenerator for OpenAiModelService {
    async fn generate(&self, subject: &str, level: &str) -> AppResult<String> {
        log::info!("Requesting quiz generation for {} at {} level", subject, level);

        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(QUIZ_TEACHER_PROMPT)
            .build()?;
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(quiz_request_prompt(subject, level))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_message),
                ChatCompletionRequestMessage::User(user_message),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let quiz_text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        if quiz_text.trim().is_empty() {
            return Err(AppError::GeneratorError(
                "Model returned an empty completion".to_string(),
            ));
        }

        Ok(quiz_text)
    }
}
