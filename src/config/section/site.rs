//! `[site]` configuration.
//!
//! Site-wide metadata used for every page's `<head>`.

use serde::{Deserialize, Serialize};

use super::Text;
use crate::config::util::{check_http_url, require_text};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title.
    pub title: Text,
    /// Site description.
    pub description: Text,
    /// Author name.
    pub author: Text,
    /// Canonical origin (e.g. "https://example.com"), used for absolute URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Text>,
}

impl SiteMeta {
    const TITLE: FieldPath = FieldPath::new("site.title");
    const DESCRIPTION: FieldPath = FieldPath::new("site.description");
    const AUTHOR: FieldPath = FieldPath::new("site.author");
    const URL: FieldPath = FieldPath::new("site.url");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url`, if set, is an http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        require_text(&self.title, Self::TITLE, "site title", diag);

        if self.description.trim().is_empty() {
            diag.hint(Self::DESCRIPTION, "description is empty, pages get no meta description");
        }
        if self.author.trim().is_empty() {
            diag.hint(Self::AUTHOR, "author is empty");
        }

        if let Some(url) = &self.url {
            check_http_url(url, Self::URL, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SITE;

    #[test]
    fn test_shipped_site_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        SITE.validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_rejects_bad_url_and_empty_title() {
        let site = SiteMeta {
            title: "  ".into(),
            url: Some("michael-yang.com".into()),
            ..SITE.clone()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_error_at("site.title"));
        assert!(diag.has_error_at("site.url"));
    }
}
