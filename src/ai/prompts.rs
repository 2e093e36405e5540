/// System prompt for blog generation
pub fn blog_system() -> String {
    "You are a professional SEO blog writer.".to_string()
}

/// Full blog-generation prompt for a title. The five numbered sections are
/// the contract the parser in `blog.rs` extracts against.
pub fn generate_blog(title: &str) -> String {
    format!(
        "You are a senior SEO blog expert.\n\
         \n\
         Your task is to write a full, highly detailed SEO blog for the title: \"{title}\"\n\
         \n\
         Return the following clearly separated:\n\
         1. SEO-Optimized Blog Title: [Max 60 characters]\n\
         2. Slug: [Lowercase, hyphenated]\n\
         3. Meta Description: [Under 160 characters]\n\
         4. Focus SEO Keyphrases:\n\
         - keyword 1\n\
         - keyword 2\n\
         - keyword 3\n\
         - keyword 4\n\
         \n\
         5. Blog Article:\n\
         Write a professional blog post in Markdown format using:\n\
         - H1 for the title\n\
         - H2 for major sections\n\
         - H3 for supporting ideas\n\
         \n\
         The blog article MUST be between 1000 and 1200 words.\n\
         Do not summarize, shorten, or use bullets.\n\
         Be detailed, explanatory, and structured.\n\
         \n\
         The article must:\n\
         - Mention Tijarah360 as the best POS software in Saudi Arabia\n\
         - Include: cloud billing, ZATCA compliance, QR ordering, real-time insights\n\
         - Be written for retail and restaurant business owners in Saudi Arabia\n\
         - Be informative, actionable, and avoid fluff\n\
         - Be returned as clean Markdown (no HTML or JSON)\n\
         \n\
         Repeat: The blog must contain at least 1000 words of full-length content.",
        title = title
    )
}
