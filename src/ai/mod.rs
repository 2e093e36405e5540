pub mod groq;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::config::AiConfig;

// ── Types ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub text: String,
    pub model: String,
}

/// Everything that can go wrong with a completion call. Callers match on
/// the variant; the Display text is what ends up in the error panel.
#[derive(Debug, Clone, PartialEq)]
pub enum AiError {
    /// Missing or rejected credentials.
    Auth,
    /// Transport-level failure (DNS, connect, timeout).
    Connection(String),
    /// Anything else: unexpected status or malformed body. Detail kept verbatim.
    Unknown(String),
}

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiError::Auth => write!(f, "Invalid API key"),
            AiError::Connection(detail) => write!(f, "Network issue: {}", detail),
            AiError::Unknown(detail) => write!(f, "Unexpected error: {}", detail),
        }
    }
}

// ── Client ────────────────────────────────────────────

/// One HTTP client plus the provider settings, built at startup and shared
/// through Rocket managed state.
pub struct AiClient {
    pub config: AiConfig,
    pub http: reqwest::blocking::Client,
}

impl AiClient {
    pub fn new(config: AiConfig) -> Result<Self, String> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(Self { config, http })
    }

    /// Send a single chat-completion request. No retries.
    pub fn complete(&self, req: &AiRequest) -> Result<AiResponse, AiError> {
        match groq::call(self, req) {
            Ok(resp) => Ok(resp),
            Err(e) => {
                log::warn!("Groq completion failed: {}", e);
                Err(e)
            }
        }
    }
}
