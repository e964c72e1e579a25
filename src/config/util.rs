//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{ConfigDiagnostics, FieldPath};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/pages/   ← cwd
/// /home/user/site/folio.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Report an error if `value` is blank.
pub fn require_text(value: &str, field: FieldPath, what: &str, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error(field, format!("{what} must not be empty"));
    }
}

/// Check an absolute `http`/`https` URL with a host (site url, form endpoints).
pub fn check_http_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Check a profile link: `https://` with a host, or `mailto:` with an address.
pub fn check_external_href(href: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use https://example.com/you or mailto:you@example.com";

    let parsed = match url::Url::parse(href) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL '{href}': {e}"), HINT);
            return;
        }
    };

    match parsed.scheme() {
        "https" if parsed.host_str().is_some() => {}
        "https" => diag.error_with_hint(field, "URL must have a valid host", HINT),
        "mailto" if !parsed.path().is_empty() => {}
        "mailto" => diag.error_with_hint(field, "mailto link has no address", HINT),
        scheme => diag.error_with_hint(
            field,
            format!("scheme '{scheme}' not supported, must be mailto or https"),
            HINT,
        ),
    }
}

/// Check a site-relative path such as `/blog`.
///
/// Returns false when the path was rejected.
pub fn check_site_path(href: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    if href.is_empty() {
        diag.error_with_hint(field, "href must not be empty", "use a path like \"/blog\"");
        return false;
    }
    if !href.starts_with('/') || href.starts_with("//") {
        let suggestion = format!("/{}", href.trim_start_matches(['.', '/']));
        diag.error_with_hint(
            field,
            format!("'{href}' is not a site-relative path"),
            format!("use \"{suggestion}\""),
        );
        return false;
    }
    true
}

/// Check an image source: a site-relative path or an absolute http(s) URL.
pub fn check_asset_src(src: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use a path like \"/images/me.jpg\" or an https URL";

    if src.trim().is_empty() {
        diag.error_with_hint(field, "image src must not be empty", HINT);
        return;
    }
    if src.starts_with('/') && !src.starts_with("//") {
        return;
    }
    match url::Url::parse(src) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => diag.error_with_hint(field, format!("'{src}' is neither a site path nor a URL"), HINT),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldPath {
        FieldPath::new("test.href")
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src").join("pages");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));

        assert!(find_config_file_from(&nested, Path::new("missing-folio.toml")).is_none());
    }

    #[test]
    fn test_external_href() {
        let mut diag = ConfigDiagnostics::new();
        check_external_href("https://github.com/michaelryang", field(), &mut diag);
        check_external_href("mailto:michaelryang2@gmail.com", field(), &mut diag);
        assert!(diag.is_empty());

        check_external_href("http://github.com/michaelryang", field(), &mut diag);
        check_external_href("github.com/michaelryang", field(), &mut diag);
        check_external_href("mailto:", field(), &mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_site_path() {
        let mut diag = ConfigDiagnostics::new();
        assert!(check_site_path("/", field(), &mut diag));
        assert!(check_site_path("/projects", field(), &mut diag));
        assert!(diag.is_empty());

        assert!(!check_site_path("", field(), &mut diag));
        assert!(!check_site_path("blog", field(), &mut diag));
        assert!(!check_site_path("//evil.example", field(), &mut diag));
        assert_eq!(diag.len(), 3);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use \"/blog\""));
    }

    #[test]
    fn test_http_url() {
        let mut diag = ConfigDiagnostics::new();
        check_http_url("https://michael-yang.com", field(), &mut diag);
        check_http_url("http://localhost:4321/subscribe", field(), &mut diag);
        assert!(diag.is_empty());

        check_http_url("ftp://example.com", field(), &mut diag);
        check_http_url("not a url", field(), &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_asset_src() {
        let mut diag = ConfigDiagnostics::new();
        check_asset_src("/michael_canyon.jpg", field(), &mut diag);
        check_asset_src("https://cdn.example.com/me.png", field(), &mut diag);
        assert!(diag.is_empty());

        check_asset_src("", field(), &mut diag);
        check_asset_src("michael_canyon.jpg", field(), &mut diag);
        assert_eq!(diag.len(), 2);
    }
}
