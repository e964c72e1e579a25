//! Navigation and social links.
//!
//! # Example
//!
//! ```toml
//! [[links]]
//! text = "Home"
//! href = "/"
//!
//! [[socials]]
//! name = "Github"
//! icon = "github"
//! text = "michaelryang"
//! href = "https://github.com/michaelryang"
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::Text;
use crate::config::util::{check_external_href, check_site_path, require_text};
use crate::config::{ConfigDiagnostics, FieldPath};

/// A navigation entry; list order is menu order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: Text,
    pub href: Text,
}

impl NavLink {
    pub const fn new(text: &'static str, href: &'static str) -> Self {
        Self {
            text: Text::Borrowed(text),
            href: Text::Borrowed(href),
        }
    }
}

/// An external profile (email, GitHub, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name.
    pub name: Text,
    /// Icon key understood by the renderer's icon set.
    pub icon: Text,
    /// Display label.
    pub text: Text,
    /// `mailto:` or `https:` target.
    pub href: Text,
}

impl SocialLink {
    pub const fn new(
        name: &'static str,
        icon: &'static str,
        text: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            name: Text::Borrowed(name),
            icon: Text::Borrowed(icon),
            text: Text::Borrowed(text),
            href: Text::Borrowed(href),
        }
    }
}

/// Validate a navigation list.
///
/// Every entry needs text and a site-relative `href`, and no `href` may
/// appear twice in the same list.
pub fn validate_nav_links(links: &[NavLink], base: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (i, link) in links.iter().enumerate() {
        let at = base.index(i);
        require_text(&link.text, at.field("text"), "link text", diag);

        let href: &str = &link.href;
        if check_site_path(href, at.field("href"), diag) && !seen.insert(href) {
            diag.error(
                at.field("href"),
                format!("duplicate href '{href}' in {}", base.as_str()),
            );
        }
    }
}

/// Validate the social profile list.
pub fn validate_social_links(links: &[SocialLink], base: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        let at = base.index(i);
        require_text(&link.name, at.field("name"), "social name", diag);
        require_text(&link.icon, at.field("icon"), "social icon", diag);
        check_external_href(&link.href, at.field("href"), diag);
    }
}
