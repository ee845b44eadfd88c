//! Request path extraction.
//!
//! Parsing works on the path alone: scheme, host, query and fragment are
//! dropped first. Sites served below the domain root (`https://x.com/bn/`)
//! strip that prefix too.

/// Path component of a URL or path, without query string or fragment.
///
/// A leading `//` starts a protocol-relative URL: the host is dropped like
/// a scheme's would be. Returns `None` when the input has a scheme or host
/// but does not parse as a URL.
///
/// ```ignore
/// request_path("https://example.com/2025/01/26/a/b?ref=fb") -> Some("/2025/01/26/a/b")
/// request_path("//example.com/article/5/x")                 -> Some("/article/5/x")
/// request_path("2025/01/26/a/b#top")                        -> Some("/2025/01/26/a/b")
/// ```
pub fn request_path(url: &str) -> Option<String> {
    let trimmed = url.trim();

    if trimmed.contains("://") {
        let parsed = url::Url::parse(trimmed).ok()?;
        return Some(parsed.path().to_string());
    }
    if trimmed.starts_with("//") {
        let parsed = url::Url::parse(&format!("https:{trimmed}")).ok()?;
        return Some(parsed.path().to_string());
    }

    let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
    if path.starts_with('/') {
        Some(path.to_string())
    } else {
        Some(format!("/{path}"))
    }
}

/// Path component of a base URL, without surrounding slashes.
///
/// ```ignore
/// url_path_prefix("https://example.com/bn/") -> Some("bn")
/// url_path_prefix("https://example.com")     -> Some("")
/// url_path_prefix("not a url")               -> None
/// ```
pub fn url_path_prefix(base_url: &str) -> Option<String> {
    let parsed = url::Url::parse(base_url).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Remove a leading path prefix (whole segments only).
///
/// Paths outside the prefix are returned unchanged.
pub fn strip_path_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        return path;
    }

    let Some(rest) = path
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(prefix))
    else {
        return path;
    };

    if rest.is_empty() {
        "/"
    } else if rest.starts_with('/') {
        rest
    } else {
        // `/bnx/...` is not under `/bn`
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_full_url() {
        assert_eq!(
            request_path("https://bengali-news.com/2025/01/26/a/b?ref=fb#top").as_deref(),
            Some("/2025/01/26/a/b")
        );
        assert_eq!(
            request_path("http://localhost:8080/article/5/x").as_deref(),
            Some("/article/5/x")
        );
    }

    #[test]
    fn test_request_path_encodes_non_ascii_from_url() {
        // The url crate percent-encodes the path; segments are decoded later
        assert_eq!(
            request_path("https://x.com/খবর").as_deref(),
            Some("/%E0%A6%96%E0%A6%AC%E0%A6%B0")
        );
    }

    #[test]
    fn test_request_path_protocol_relative() {
        assert_eq!(
            request_path("//bengali-news.com/article/5/x?ref=fb").as_deref(),
            Some("/article/5/x")
        );
        assert_eq!(request_path("//").as_deref(), None);
    }

    #[test]
    fn test_request_path_bare() {
        assert_eq!(request_path("/a/b?x=1").as_deref(), Some("/a/b"));
        assert_eq!(request_path("a/b#frag").as_deref(), Some("/a/b"));
        assert_eq!(request_path("  /খবর/আজ  ").as_deref(), Some("/খবর/আজ"));
    }

    #[test]
    fn test_request_path_invalid_url() {
        assert_eq!(request_path("https://"), None);
    }

    #[test]
    fn test_url_path_prefix() {
        assert_eq!(
            url_path_prefix("https://example.com/bn/").as_deref(),
            Some("bn")
        );
        assert_eq!(
            url_path_prefix("https://example.com/a/b").as_deref(),
            Some("a/b")
        );
        assert_eq!(url_path_prefix("https://example.com").as_deref(), Some(""));
        assert_eq!(url_path_prefix("example.com/bn"), None);
    }

    #[test]
    fn test_strip_path_prefix() {
        assert_eq!(strip_path_prefix("/bn/2025/01/26/a/b", "bn"), "/2025/01/26/a/b");
        assert_eq!(strip_path_prefix("/bn/2025/01/26/a/b", "/bn/"), "/2025/01/26/a/b");
        assert_eq!(strip_path_prefix("/bn", "bn"), "/");
        assert_eq!(strip_path_prefix("/bnx/a", "bn"), "/bnx/a");
        assert_eq!(strip_path_prefix("/en/a", "bn"), "/en/a");
        assert_eq!(strip_path_prefix("/a/b", ""), "/a/b");
    }
}
