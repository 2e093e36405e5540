#![cfg(test)]

use crate::ai::{prompts, AiClient, AiError};
use crate::blog::{self, BlogOutcome, ARTICLE_MARKER, TITLE_MARKER};
use crate::config::AiConfig;
use crate::render;
use crate::seo;

/// Client with no credentials: every completion attempt fails with an
/// auth error before any socket is opened, so tests stay offline.
fn test_client() -> AiClient {
    AiClient::new(AiConfig {
        api_key: String::new(),
        model: "llama3-70b-8192".to_string(),
        temperature: 0.7,
    })
    .unwrap()
}

/// A well-formed model reply in the numbered layout the prompt asks for.
fn sample_reply() -> String {
    "Here is your SEO blog:\n\
     \n\
     1. SEO-Optimized Blog Title: Best POS System in Saudi Arabia for 2025\n\
     2. Slug: best-pos-system-saudi-arabia\n\
     3. Meta Description: Discover the best POS system for Saudi businesses.\n\
     4. Focus SEO Keyphrases:\n\
     - best pos system\n\
     * pos software saudi arabia\n\
     • cloud billing\n\
     \n\
     Blog Article:\n\
     # Best POS System in Saudi Arabia\n\
     \n\
     ## Why It Matters\n\
     Tijarah360 leads the market with cloud billing and ZATCA compliance.\n"
        .to_string()
}

// ═══════════════════════════════════════════════════════════
// Slug derivation
// ═══════════════════════════════════════════════════════════

#[test]
fn slug_lowercases_and_hyphenates() {
    assert_eq!(
        seo::slug_from_title("Best POS System in Saudi Arabia"),
        "best-pos-system-in-saudi-arabia"
    );
}

#[test]
fn slug_strips_punctuation() {
    assert_eq!(seo::slug_from_title("Best POS System!"), "best-pos-system");
    assert_eq!(
        seo::slug_from_title("QR Ordering: What's Next?"),
        "qr-ordering-whats-next"
    );
}

#[test]
fn slug_collapses_whitespace_runs() {
    assert_eq!(
        seo::slug_from_title("Cloud   Billing\tGuide"),
        "cloud-billing-guide"
    );
    assert_eq!(seo::slug_from_title("  padded title  "), "padded-title");
}

#[test]
fn download_filename_pattern() {
    let name = seo::download_filename("best-pos-system");
    let re = regex::Regex::new(r"^best-pos-system_\d{12}\.txt$").unwrap();
    assert!(re.is_match(&name), "unexpected filename: {}", name);
}

// ═══════════════════════════════════════════════════════════
// Prompt builder
// ═══════════════════════════════════════════════════════════

#[test]
fn prompt_embeds_title() {
    let prompt = prompts::generate_blog("Best POS System");
    assert!(prompt.contains("\"Best POS System\""));
}

#[test]
fn prompt_requests_all_five_sections() {
    let prompt = prompts::generate_blog("anything");
    for marker in [
        "SEO-Optimized Blog Title:",
        "Slug:",
        "Meta Description:",
        "Focus SEO Keyphrases:",
        "Blog Article:",
    ] {
        assert!(prompt.contains(marker), "prompt missing {}", marker);
    }
}

#[test]
fn prompt_carries_constraints_and_brand() {
    let prompt = prompts::generate_blog("anything");
    assert!(prompt.contains("between 1000 and 1200 words"));
    assert!(prompt.contains("Tijarah360"));
    assert!(prompt.contains("ZATCA compliance"));
    assert!(prompts::blog_system().contains("SEO blog writer"));
}

// ═══════════════════════════════════════════════════════════
// Section parser
// ═══════════════════════════════════════════════════════════

#[test]
fn parse_well_formed_reply() {
    let parsed = blog::parse(&sample_reply()).unwrap();
    assert_eq!(parsed.seo_title, "Best POS System in Saudi Arabia for 2025");
    assert_eq!(parsed.slug, "best-pos-system-saudi-arabia");
    assert_eq!(
        parsed.meta_description,
        "Discover the best POS system for Saudi businesses."
    );
    assert_eq!(
        parsed.keyphrases,
        vec![
            "best pos system",
            "pos software saudi arabia",
            "cloud billing"
        ]
    );
    assert!(parsed.article.starts_with("# Best POS System in Saudi Arabia"));
    assert!(parsed.article.ends_with("ZATCA compliance."));
}

#[test]
fn parse_captures_article_to_end_of_reply() {
    let mut raw = sample_reply();
    raw.push_str("\n## Closing Thoughts\nMore content after the headings.\n");
    let parsed = blog::parse(&raw).unwrap();
    assert!(parsed.article.ends_with("More content after the headings."));
}

#[test]
fn parse_fails_without_article_marker() {
    let raw = sample_reply().replace("Blog Article:", "Article:");
    let err = blog::parse(&raw).unwrap_err();
    assert_eq!(err.marker, ARTICLE_MARKER);
}

#[test]
fn parse_fails_without_title_marker() {
    let raw = sample_reply().replace("SEO-Optimized Blog Title:", "Title:");
    let err = blog::parse(&raw).unwrap_err();
    assert_eq!(err.marker, TITLE_MARKER);
}

#[test]
fn parse_fails_when_markers_out_of_order() {
    // Article marker ahead of the keyphrase block must not parse
    let raw = "SEO-Optimized Blog Title: t\n\
               Slug: s\n\
               Meta Description: m\n\
               Blog Article:\n\
               body text\n\
               Focus SEO Keyphrases:\n\
               - one\n";
    assert!(blog::parse(raw).is_err());
}

#[test]
fn parse_is_case_sensitive() {
    let raw = sample_reply().replace("Meta Description:", "meta description:");
    assert!(blog::parse(raw.as_str()).is_err());
}

#[test]
fn keyphrases_strip_bullets_and_blanks() {
    let raw = "SEO-Optimized Blog Title: t\n\
               Slug: s\n\
               Meta Description: m\n\
               Focus SEO Keyphrases:\n\
               - keyword one\n\
               * keyword two\n\
               \n\
               •   keyword three\n\
               Blog Article:\n\
               body\n";
    let parsed = blog::parse(raw).unwrap();
    assert_eq!(
        parsed.keyphrases,
        vec!["keyword one", "keyword two", "keyword three"]
    );
}

#[test]
fn word_count_counts_whitespace_tokens() {
    let article = "word ".repeat(1000);
    assert_eq!(blog::word_count(&article), 1000);
    assert_eq!(blog::word_count("one\n two\t three"), 3);
    assert_eq!(blog::word_count(""), 0);
}

// ═══════════════════════════════════════════════════════════
// Completion client errors
// ═══════════════════════════════════════════════════════════

#[test]
fn auth_error_display_names_the_key() {
    assert_eq!(AiError::Auth.to_string(), "Invalid API key");
}

#[test]
fn error_displays_keep_detail() {
    let conn = AiError::Connection("connection refused".to_string());
    assert!(conn.to_string().contains("Network issue"));
    assert!(conn.to_string().contains("connection refused"));

    let unknown = AiError::Unknown("Groq returned 500: boom".to_string());
    assert!(unknown.to_string().contains("Groq returned 500: boom"));
}

#[test]
fn missing_key_fails_before_any_network_call() {
    let client = test_client();
    match blog::generate(&client, "Best POS System") {
        BlogOutcome::Failed(AiError::Auth) => {}
        other => panic!("expected auth failure, got {}", outcome_name(&other)),
    }
}

// ═══════════════════════════════════════════════════════════
// Generation pipeline
// ═══════════════════════════════════════════════════════════

#[test]
fn empty_title_never_reaches_the_client() {
    // The keyless client would report Auth if a call were attempted;
    // EmptyTitle proves the guard ran first.
    let client = test_client();
    assert!(matches!(
        blog::generate(&client, ""),
        BlogOutcome::EmptyTitle
    ));
    assert!(matches!(
        blog::generate(&client, "   \t\n"),
        BlogOutcome::EmptyTitle
    ));
}

fn outcome_name(outcome: &BlogOutcome) -> &'static str {
    match outcome {
        BlogOutcome::EmptyTitle => "EmptyTitle",
        BlogOutcome::Failed(_) => "Failed",
        BlogOutcome::Generated { .. } => "Generated",
    }
}

// ═══════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════

#[test]
fn markdown_renders_heading_levels() {
    let html = render::markdown_to_html("# Top\n\n## Section\n\nBody text.");
    assert!(html.contains("<h1>Top</h1>"));
    assert!(html.contains("<h2>Section</h2>"));
    assert!(html.contains("<p>Body text.</p>"));
}

#[test]
fn html_escape_neutralizes_markup() {
    assert_eq!(
        render::html_escape(r#"<b>"a" & 'b'</b>"#),
        "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
    );
}

#[test]
fn results_page_shows_fields_and_count() {
    let parsed = blog::parse(&sample_reply()).unwrap();
    let page = render::results_page("My Title", "my-title", &parsed, &sample_reply());
    assert!(page.contains("Best POS System in Saudi Arabia for 2025"));
    assert!(page.contains("best pos system"));
    assert!(page.contains("words)"));
    assert!(page.contains(r#"action="/download""#));
}

#[test]
fn parse_error_page_surfaces_raw_text() {
    let page = render::parse_error_page("t", "Could not parse blog output.", "RAW REPLY HERE");
    assert!(page.contains("Could not parse blog output."));
    assert!(page.contains("RAW REPLY HERE"));
}
