//! `[theme]` configuration.
//!
//! The richer configuration object read by the page templates: branding,
//! header and footer menus, the landing hero, the subscribe block and
//! listing page sizes. Every optional block is simply left out of the page
//! when it is absent.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! title = "Michael Yang"
//! subtitle = "Personal Website and Portfolio"
//! description = ""
//! posts_per_page = 8
//!
//! [theme.image]
//! src = "/michael_canyon.jpg"
//! alt = "Picture of me at the canyon"
//!
//! [[theme.header_nav_links]]
//! text = "Home"
//! href = "/"
//!
//! [theme.hero]
//! title = "Welcome to my portfolio."
//! text = "I'm **Michael Yang** ..."
//!
//! [[theme.hero.actions]]
//! text = "Get in Touch"
//! href = "/contact"
//!
//! [theme.subscribe]
//! title = "Newsletter"
//! form_url = "https://example.com/subscribe"
//! ```

use serde::{Deserialize, Serialize};

use super::{List, NavLink, Text, validate_nav_links};
use crate::config::util::{check_asset_src, check_external_href, check_http_url, require_text};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::paginate::resolve_page_size;

/// An image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Site-relative path or absolute URL.
    pub src: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Text>,
}

impl Image {
    pub fn validate(&self, base: &FieldPath, diag: &mut ConfigDiagnostics) {
        check_asset_src(&self.src, base.field("src"), diag);
        if self.alt.as_deref().is_none_or(|alt| alt.trim().is_empty()) {
            diag.hint(base.field("alt"), "image has no alt text");
        }
    }
}

/// Landing page hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    /// Markdown-flavored text, rendered by the page template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<List<NavLink>>,
}

impl Hero {
    /// Call-to-action links, empty when none are configured.
    pub fn actions(&self) -> &[NavLink] {
        self.actions.as_deref().unwrap_or_default()
    }

    pub fn validate(&self, base: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.is_none() && self.text.is_none() && self.image.is_none() {
            diag.hint(base.clone(), "hero has no title, text or image and renders empty");
        }
        if let Some(image) = &self.image {
            image.validate(&base.field("image"), diag);
        }
        validate_nav_links(self.actions(), &base.field("actions"), diag);
    }
}

/// Subscription call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscribe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    /// Form endpoint the subscribe form posts to.
    pub form_url: Text,
}

/// Site configuration consumed by the page templates.
///
/// `title` and `description` are required; a file without them fails to
/// parse. Everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Text>,
    pub description: Text,

    /// Page size of the posts listing. See [`Self::posts_page_size`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_per_page: Option<u32>,
    /// Page size of the projects listing. See [`Self::projects_page_size`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_per_page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_nav_links: Option<List<NavLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_nav_links: Option<List<NavLink>>,
    /// External profiles, `https:` or `mailto:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<List<NavLink>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<Subscribe>,
}

impl SiteConfig {
    const BASE: FieldPath = FieldPath::new("theme");

    pub fn header_nav(&self) -> &[NavLink] {
        self.header_nav_links.as_deref().unwrap_or_default()
    }

    pub fn footer_nav(&self) -> &[NavLink] {
        self.footer_nav_links.as_deref().unwrap_or_default()
    }

    pub fn socials(&self) -> &[NavLink] {
        self.social_links.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn has_hero(&self) -> bool {
        self.hero.is_some()
    }

    /// Posts per listing page, falling back to the default page size.
    pub fn posts_page_size(&self) -> usize {
        resolve_page_size(self.posts_per_page)
    }

    /// Projects per listing page, falling back to the default page size.
    pub fn projects_page_size(&self) -> usize {
        resolve_page_size(self.projects_per_page)
    }

    /// Validate the `[theme]` section.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - menus hold unique site-relative paths
    /// - social links are `https:` or `mailto:`
    /// - page sizes, when set, are positive
    /// - the subscribe endpoint is an http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let base = &Self::BASE;

        require_text(&self.title, base.field("title"), "site title", diag);
        if self.description.trim().is_empty() {
            diag.hint(
                base.field("description"),
                "description is empty, pages get no meta description",
            );
        }

        for (name, size) in [
            ("posts_per_page", self.posts_per_page),
            ("projects_per_page", self.projects_per_page),
        ] {
            if size == Some(0) {
                diag.error_with_hint(
                    base.field(name),
                    "page size must be a positive integer",
                    format!("remove {name} to use the default, or set e.g. {name} = 8"),
                );
            }
        }

        if let Some(logo) = &self.logo {
            logo.validate(&base.field("logo"), diag);
        }
        if let Some(image) = &self.image {
            image.validate(&base.field("image"), diag);
        }

        validate_nav_links(self.header_nav(), &base.field("header_nav_links"), diag);
        validate_nav_links(self.footer_nav(), &base.field("footer_nav_links"), diag);

        let socials = base.field("social_links");
        for (i, link) in self.socials().iter().enumerate() {
            let at = socials.index(i);
            require_text(&link.text, at.field("text"), "link text", diag);
            check_external_href(&link.href, at.field("href"), diag);
        }

        if let Some(hero) = &self.hero {
            hero.validate(&base.field("hero"), diag);
        }
        if let Some(subscribe) = &self.subscribe {
            check_http_url(&subscribe.form_url, base.field("subscribe").field("form_url"), diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SITE_CONFIG;

    fn diagnose(config: &SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let diag = diagnose(&SITE_CONFIG);
        assert!(diag.is_empty(), "{diag}");
        // The shipped description is intentionally blank.
        assert!(diag.hints().iter().any(|(f, _)| f.as_str() == "theme.description"));
    }

    #[test]
    fn test_absent_blocks() {
        let config = SiteConfig {
            title: "Minimal".into(),
            subtitle: None,
            description: "Only what is required".into(),
            posts_per_page: None,
            projects_per_page: None,
            logo: None,
            image: None,
            header_nav_links: None,
            footer_nav_links: None,
            social_links: None,
            hero: None,
            subscribe: None,
        };
        assert!(!config.has_hero());
        assert!(config.header_nav().is_empty());
        assert!(config.socials().is_empty());
        assert_eq!(config.posts_page_size(), crate::paginate::DEFAULT_PAGE_SIZE);
        assert!(diagnose(&config).is_empty());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = SiteConfig {
            posts_per_page: Some(0),
            ..SITE_CONFIG.clone()
        };
        let diag = diagnose(&config);
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("theme.posts_per_page"));
    }

    #[test]
    fn test_nested_errors_carry_full_paths() {
        let config = SiteConfig {
            footer_nav_links: Some(
                vec![NavLink::new("About", "/about"), NavLink::new("Contact", "/about")].into(),
            ),
            social_links: Some(vec![NavLink::new("LinkedIn", "linkedin.com/in/me")].into()),
            hero: Some(Hero {
                title: Some("Hi".into()),
                text: None,
                image: Some(Image {
                    src: "".into(),
                    alt: None,
                    caption: None,
                }),
                actions: Some(vec![NavLink::new("Get in Touch", "contact")].into()),
            }),
            subscribe: Some(Subscribe {
                title: None,
                text: None,
                form_url: "/subscribe".into(),
            }),
            ..SITE_CONFIG.clone()
        };

        let diag = diagnose(&config);
        assert!(diag.has_error_at("theme.footer_nav_links[1].href"));
        assert!(diag.has_error_at("theme.social_links[0].href"));
        assert!(diag.has_error_at("theme.hero.image.src"));
        assert!(diag.has_error_at("theme.hero.actions[0].href"));
        assert!(diag.has_error_at("theme.subscribe.form_url"));
        assert_eq!(diag.len(), 5);
    }
}
