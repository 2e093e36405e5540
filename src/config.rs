use std::env;

/// Chat-completion settings, read from the environment once at startup.
/// Read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

const DEFAULT_MODEL: &str = "llama3-70b-8192";
const DEFAULT_TEMPERATURE: f32 = 0.7;

impl AiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("GROQ_API_KEY", ""),
            model: env_or("GROQ_MODEL", DEFAULT_MODEL),
            temperature: env::var("AI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
