use pulldown_cmark::{html, Parser};

use crate::blog::ParsedBlog;

const BASE_CSS: &str = r#"
:root { --accent: #4f46e5; --text: #1f2937; --muted: #6b7280; --border: #e5e7eb; }
* { box-sizing: border-box; }
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; color: var(--text); max-width: 760px; margin: 0 auto; padding: 32px 20px 60px; line-height: 1.6; }
h1.app-title { font-size: 1.9rem; margin-bottom: 4px; }
p.app-tagline { color: var(--muted); margin-top: 0; }
form.generate { display: flex; gap: 8px; margin: 24px 0; }
form.generate input[type=text] { flex: 1; padding: 10px 14px; border: 1px solid var(--border); border-radius: 8px; font-size: 15px; }
form.generate button, form.download button { padding: 10px 20px; border: none; border-radius: 8px; background: var(--accent); color: #fff; font-size: 15px; font-weight: 600; cursor: pointer; }
.panel { border: 1px solid var(--border); border-radius: 10px; padding: 18px 22px; margin: 18px 0; }
.panel h2 { font-size: 1.1rem; margin-top: 0; }
.panel.warning { border-color: #f59e0b; background: #fffbeb; }
.panel.error { border-color: #dc2626; background: #fef2f2; }
.panel.success { border-color: #16a34a; background: #f0fdf4; }
.panel dl dt { font-weight: 600; margin-top: 8px; }
.panel dl dd { margin: 0; color: var(--muted); }
.article { border-top: 1px solid var(--border); margin-top: 24px; padding-top: 8px; }
.article h1 { font-size: 1.6rem; }
textarea.raw { width: 100%; height: 300px; font-family: monospace; font-size: 13px; border: 1px solid var(--border); border-radius: 8px; padding: 12px; }
footer { margin-top: 48px; text-align: center; color: var(--muted); font-size: 13px; border-top: 1px solid var(--border); padding-top: 16px; }
"#;

/// Wrap page content in the shared shell: header, title form, footer.
/// `title_value` re-fills the input after a submission.
fn page(title_value: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tijarah360 SmartBlog Creator</title>
    <style>{css}</style>
</head>
<body>
    <h1 class="app-title">Tijarah360 SmartBlog Creator</h1>
    <p class="app-tagline">Generate high-quality, SEO-optimized blog content with built-in Tijarah360 branding — tailored for Saudi businesses.</p>
    <form class="generate" method="post" action="/generate">
        <input type="text" name="title" value="{title_value}" placeholder="e.g. Best POS System in Saudi Arabia">
        <button type="submit">Generate Blog</button>
    </form>
    {body}
    <footer>Crafted for Tijarah360</footer>
</body>
</html>"#,
        css = BASE_CSS,
        title_value = html_escape(title_value),
        body = body,
    )
}

// ── Pages ─────────────────────────────────────────────

pub fn form_page() -> String {
    page("", "")
}

/// Empty-title submission: warning panel, nothing was sent to the model.
pub fn warning_page(message: &str) -> String {
    page(
        "",
        &format!(
            r#"<div class="panel warning">{}</div>"#,
            html_escape(message)
        ),
    )
}

/// Completion call failed: error panel with the taxonomy message.
pub fn error_page(title_value: &str, message: &str) -> String {
    page(
        title_value,
        &format!(r#"<div class="panel error">{}</div>"#, html_escape(message)),
    )
}

/// Extraction failed: error panel plus the raw reply in a read-only area.
pub fn parse_error_page(title_value: &str, message: &str, raw: &str) -> String {
    let body = format!(
        r#"<div class="panel error">{message}</div>
<div class="panel">
    <h2>Raw Output</h2>
    <textarea class="raw" readonly>{raw}</textarea>
</div>"#,
        message = html_escape(message),
        raw = html_escape(raw),
    );
    page(title_value, &body)
}

/// Full result: SEO overview, keyphrases, rendered article, download form.
pub fn results_page(title: &str, slug: &str, blog: &ParsedBlog, raw: &str) -> String {
    let mut keyphrases = String::new();
    for phrase in &blog.keyphrases {
        keyphrases.push_str(&format!("<li>{}</li>\n", html_escape(phrase)));
    }

    let words = crate::blog::word_count(&blog.article);

    let body = format!(
        r#"<div class="panel success">Blog generated for: <strong>{title}</strong></div>
<div class="panel">
    <h2>SEO Overview</h2>
    <dl>
        <dt>SEO Title</dt><dd>{seo_title}</dd>
        <dt>Slug</dt><dd>{blog_slug}</dd>
        <dt>Meta Description</dt><dd>{meta_description}</dd>
    </dl>
</div>
<div class="panel">
    <h2>Suggested Focus Keyphrases</h2>
    <ul>
{keyphrases}    </ul>
</div>
<div class="panel">
    <h2>Full Blog Content ({words} words)</h2>
    <div class="article">{article_html}</div>
</div>
<form class="download" method="post" action="/download">
    <input type="hidden" name="slug" value="{slug}">
    <input type="hidden" name="raw" value="{raw}">
    <button type="submit">Download Blog</button>
</form>"#,
        title = html_escape(title),
        seo_title = html_escape(&blog.seo_title),
        blog_slug = html_escape(&blog.slug),
        meta_description = html_escape(&blog.meta_description),
        keyphrases = keyphrases,
        words = words,
        article_html = markdown_to_html(&blog.article),
        slug = html_escape(slug),
        raw = html_escape(raw),
    );
    page(title, &body)
}

// ── Helpers ───────────────────────────────────────────

/// Render the Markdown article body to HTML for the results panel.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
