use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ai::{prompts, AiClient, AiError, AiRequest};
use crate::seo;

// ── Types ─────────────────────────────────────────────

/// The structured fields extracted from a model reply. Either all five
/// sections are located or the parse fails; never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedBlog {
    pub seo_title: String,
    pub slug: String,
    pub meta_description: String,
    pub keyphrases: Vec<String>,
    pub article: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub marker: &'static str,
}

impl ParseError {
    fn missing(marker: &'static str) -> Self {
        Self { marker }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not locate \"{}\" in the model reply", self.marker)
    }
}

/// What one submission produced. Routes match on this to pick a panel.
pub enum BlogOutcome {
    /// Blank title, rejected before the prompt is built; no call made.
    EmptyTitle,
    /// The completion call failed; the parser never ran.
    Failed(AiError),
    /// The call succeeded. `raw` is the verbatim reply, kept for the
    /// download and the parse-failure panel.
    Generated {
        title: String,
        slug: String,
        raw: String,
        blog: Result<ParsedBlog, ParseError>,
    },
}

// ── Generation Pipeline ───────────────────────────────

pub fn generate(client: &AiClient, title: &str) -> BlogOutcome {
    let title = title.trim();
    if title.is_empty() {
        return BlogOutcome::EmptyTitle;
    }

    let slug = seo::slug_from_title(title);
    let req = AiRequest {
        system: prompts::blog_system(),
        prompt: prompts::generate_blog(title),
        max_tokens: Some(4096),
        temperature: None,
    };

    match client.complete(&req) {
        Ok(resp) => {
            let blog = parse(&resp.text);
            BlogOutcome::Generated {
                title: title.to_string(),
                slug,
                raw: resp.text,
                blog,
            }
        }
        Err(e) => BlogOutcome::Failed(e),
    }
}

// ── Section Extraction ────────────────────────────────

pub const TITLE_MARKER: &str = "SEO-Optimized Blog Title:";
pub const SLUG_MARKER: &str = "Slug:";
pub const META_MARKER: &str = "Meta Description:";
pub const KEYPHRASES_MARKER: &str = "Focus SEO Keyphrases:";
pub const ARTICLE_MARKER: &str = "Blog Article:";

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static SLUG_RE: OnceLock<Regex> = OnceLock::new();
static META_RE: OnceLock<Regex> = OnceLock::new();
static KEYPHRASES_RE: OnceLock<Regex> = OnceLock::new();
static ARTICLE_RE: OnceLock<Regex> = OnceLock::new();

fn re(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("hardcoded pattern compiles"))
}

/// Extract the five sections from a raw completion. Markers are literal,
/// case-sensitive, and must appear in order; each search starts where the
/// previous match ended.
pub fn parse(raw: &str) -> Result<ParsedBlog, ParseError> {
    let mut pos = 0;

    let seo_title = capture_line(
        re(&TITLE_RE, r"SEO-Optimized Blog Title:[ \t]*(.*)"),
        raw,
        &mut pos,
        TITLE_MARKER,
    )?;
    let slug = capture_line(re(&SLUG_RE, r"Slug:[ \t]*(.*)"), raw, &mut pos, SLUG_MARKER)?;
    let meta_description = capture_line(
        re(&META_RE, r"Meta Description:[ \t]*(.*)"),
        raw,
        &mut pos,
        META_MARKER,
    )?;

    // The keyphrase block runs from its marker up to the article marker.
    let keys_re = re(
        &KEYPHRASES_RE,
        r"(?s)Focus SEO Keyphrases:[ \t]*(.*?)Blog Article:",
    );
    let (keyphrase_block, article_at) = match keys_re
        .captures_at(raw, pos)
        .and_then(|c| c.get(1).map(|g| (g.as_str().trim().to_string(), g.end())))
    {
        Some(found) => found,
        None => {
            let marker = if raw[pos..].contains(KEYPHRASES_MARKER) {
                ARTICLE_MARKER
            } else {
                KEYPHRASES_MARKER
            };
            return Err(ParseError::missing(marker));
        }
    };
    pos = article_at;

    let article = re(&ARTICLE_RE, r"(?s)Blog Article:[ \t]*(.*)")
        .captures_at(raw, pos)
        .and_then(|c| c.get(1).map(|g| g.as_str().trim().to_string()))
        .ok_or(ParseError::missing(ARTICLE_MARKER))?;

    Ok(ParsedBlog {
        seo_title,
        slug,
        meta_description,
        keyphrases: split_keyphrases(&keyphrase_block),
        article,
    })
}

/// Match `marker` at or after `pos` and return the rest of that line,
/// trimmed. Advances `pos` past the matched line.
fn capture_line(
    re: &Regex,
    text: &str,
    pos: &mut usize,
    marker: &'static str,
) -> Result<String, ParseError> {
    let caps = re
        .captures_at(text, *pos)
        .ok_or(ParseError::missing(marker))?;
    let (content, end) = match (caps.get(1), caps.get(0)) {
        (Some(content), Some(whole)) => (content.as_str().trim().to_string(), whole.end()),
        _ => return Err(ParseError::missing(marker)),
    };
    *pos = end;
    Ok(content)
}

/// One keyphrase per line; leading bullets (`-`, `*`, `•`) and surrounding
/// whitespace stripped, empty lines discarded.
fn split_keyphrases(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Whitespace-token count of the article body. Display only.
pub fn word_count(article: &str) -> usize {
    article.split_whitespace().count()
}
