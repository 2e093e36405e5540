/// Derive a URL slug from a blog title: lowercase, punctuation removed,
/// whitespace runs collapsed to single hyphens.
/// e.g. "Best POS System!" => "best-pos-system"
pub fn slug_from_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Filename for the raw-completion download: `{slug}_{YYYYMMDDHHMM}.txt`,
/// stamped with the current local time.
pub fn download_filename(slug: &str) -> String {
    format!("{}_{}.txt", slug, chrono::Local::now().format("%Y%m%d%H%M"))
}
