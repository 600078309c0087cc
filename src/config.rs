use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("AIML_API_KEY")
                    .unwrap_or_else(|_| "dev_api_key_change_in_production".to_string()),
            ),
            llm_api_base_url: env::var("LLM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.aimlapi.com/v1".to_string()),
            llm_model_name: env::var("LLM_MODEL_NAME")
                .unwrap_or_else(|_| "deepseek-chat".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the API key is still the development default
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.llm_api_key.expose_secret() == "dev_api_key_change_in_production" {
            panic!(
                "FATAL: AIML_API_KEY is using default value! Set AIML_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base_url: "https://api.aimlapi.com/v1".to_string(),
            llm_model_name: "deepseek-chat".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
