use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::ai::AiClient;
use crate::blog::{self, BlogOutcome};
use crate::render;
use crate::seo;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub title: String,
}

// ── Generate Blog ─────────────────────────────────────

#[post("/generate", format = "json", data = "<body>")]
pub fn generate(client: &State<AiClient>, body: Json<GenerateRequest>) -> Json<Value> {
    match blog::generate(client, &body.title) {
        BlogOutcome::EmptyTitle => {
            Json(json!({"ok": false, "error": "Please enter a blog title."}))
        }
        BlogOutcome::Failed(e) => Json(json!({"ok": false, "error": e.to_string()})),
        BlogOutcome::Generated {
            slug,
            raw,
            blog: Ok(parsed),
            ..
        } => Json(json!({
            "ok": true,
            "seo_title": parsed.seo_title,
            "slug": parsed.slug,
            "meta_description": parsed.meta_description,
            "keyphrases": parsed.keyphrases,
            "article": parsed.article,
            "article_html": render::markdown_to_html(&parsed.article),
            "word_count": blog::word_count(&parsed.article),
            "download_filename": seo::download_filename(&slug),
            "raw": raw,
        })),
        BlogOutcome::Generated {
            raw, blog: Err(e), ..
        } => Json(json!({"ok": false, "error": e.to_string(), "raw": raw})),
    }
}

// ── Status Check ──────────────────────────────────────

#[get("/status")]
pub fn status(client: &State<AiClient>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "model": client.config.model,
        "key_configured": !client.config.api_key.is_empty(),
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![generate, status]
}
