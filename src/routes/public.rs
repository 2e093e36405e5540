use rocket::form::Form;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::State;

use crate::ai::AiClient;
use crate::blog::{self, BlogOutcome};
use crate::render;
use crate::seo;

// ── Forms ─────────────────────────────────────────────

#[derive(FromForm)]
pub struct GenerateForm {
    pub title: String,
}

#[derive(FromForm)]
pub struct DownloadForm {
    pub slug: String,
    pub raw: String,
}

// ── Pages ─────────────────────────────────────────────

#[get("/")]
pub fn index() -> RawHtml<String> {
    RawHtml(render::form_page())
}

#[post("/generate", data = "<form>")]
pub fn generate(client: &State<AiClient>, form: Form<GenerateForm>) -> RawHtml<String> {
    match blog::generate(client, &form.title) {
        BlogOutcome::EmptyTitle => RawHtml(render::warning_page("Please enter a blog title.")),
        BlogOutcome::Failed(e) => RawHtml(render::error_page(&form.title, &e.to_string())),
        BlogOutcome::Generated {
            title,
            slug,
            raw,
            blog: Ok(parsed),
        } => RawHtml(render::results_page(&title, &slug, &parsed, &raw)),
        BlogOutcome::Generated {
            title,
            raw,
            blog: Err(e),
            ..
        } => {
            log::warn!("Parse failure: {}", e);
            RawHtml(render::parse_error_page(
                &title,
                "Could not parse blog output. Please try again or adjust formatting.",
                &raw,
            ))
        }
    }
}

// ── Download ──────────────────────────────────────────

/// Plain-text attachment carrying the verbatim raw completion.
#[derive(Responder)]
#[response(content_type = "text/plain")]
pub struct Download {
    content: String,
    disposition: Header<'static>,
}

#[post("/download", data = "<form>")]
pub fn download(form: Form<DownloadForm>) -> Download {
    // Re-slug the submitted value so the header stays quote-free
    let slug = seo::slug_from_title(&form.slug);
    let filename = seo::download_filename(&slug);
    Download {
        content: form.raw.clone(),
        disposition: Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ),
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, generate, download]
}
