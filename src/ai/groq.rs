use serde_json::{json, Value};

use super::{AiClient, AiError, AiRequest, AiResponse};

const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub fn call(client: &AiClient, req: &AiRequest) -> Result<AiResponse, AiError> {
    let api_key = client.config.api_key.as_str();
    if api_key.is_empty() {
        // No point opening a socket with no credentials
        return Err(AiError::Auth);
    }

    let model = client.config.model.clone();

    let body = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": req.system},
            {"role": "user", "content": req.prompt}
        ],
        "max_tokens": req.max_tokens.unwrap_or(4096),
        "temperature": req.temperature.unwrap_or(client.config.temperature)
    });

    let resp = client
        .http
        .post(GROQ_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AiError::Connection(e.to_string())
            } else {
                AiError::Unknown(e.to_string())
            }
        })?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(AiError::Auth);
    }
    if !status.is_success() {
        let text = resp.text().unwrap_or_default();
        return Err(AiError::Unknown(format!("Groq returned {}: {}", status, text)));
    }

    let json: Value = resp
        .json()
        .map_err(|e| AiError::Unknown(format!("Groq JSON parse error: {}", e)))?;

    let text = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| AiError::Unknown("Groq reply had no message content".into()))?
        .to_string();

    log::debug!("Groq reply: {} bytes from {}", text.len(), model);

    Ok(AiResponse { text, model })
}
