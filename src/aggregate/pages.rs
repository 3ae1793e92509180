use crate::github::models::RepositoryNode;

/// Static hosting domains a homepage may point at
const HOSTING_DOMAINS: &[&str] = &["github.io", "vercel.app", "netlify.app"];

/// Repository names that are themselves a site (`user.github.io`)
const SITE_NAME_SUFFIXES: &[&str] = &["github.io"];

/// Whether a repository hosts a deployed site
pub fn is_page(repo: &RepositoryNode) -> bool {
    let homepage = repo
        .homepage_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    if let Some(url) = homepage {
        if HOSTING_DOMAINS.iter().any(|domain| url.contains(domain)) || is_absolute_url(url) {
            return true;
        }
    }

    SITE_NAME_SUFFIXES
        .iter()
        .any(|suffix| repo.name.contains(suffix))
}

fn is_absolute_url(url: &str) -> bool {
    url::Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}
