//! Site-wide constants: metadata, page metadata, navigation and socials.
//!
//! These are the values shipped with the site. A `folio.toml` file replaces
//! them at load time; see [`crate::config::FolioConfig::builtin`].

use std::borrow::Cow;

use crate::config::{NavLink, PageMeta, SiteMeta, SocialLink};

// Global
pub static SITE: SiteMeta = SiteMeta {
    title: Cow::Borrowed("Michael Yang"),
    description: Cow::Borrowed("Welcome to my Portfolio"),
    author: Cow::Borrowed("Michael Yang"),
    url: Some(Cow::Borrowed("https://michael-yang.com")),
};

pub static WORK: PageMeta = page("Work", "Places I have worked.");

pub static BLOG: PageMeta = page("Blog", "Posts about things I'm working on.");

pub static PROJECTS: PageMeta = page("Projects", "Recent projects I have worked on.");

pub static SEARCH: PageMeta = page("Search", "Search all posts and projects by keyword.");

pub const LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Work", "/work"),
    NavLink::new("Projects", "/projects"),
    NavLink::new("Blog", "/blog"),
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink::new(
        "Email",
        "email",
        "michaelryang2@gmail.com",
        "mailto:michaelryang2@gmail.com",
    ),
    SocialLink::new(
        "Github",
        "github",
        "michaelryang",
        "https://github.com/michaelryang",
    ),
    SocialLink::new(
        "LinkedIn",
        "linkedin",
        "Michael Yang",
        "https://www.linkedin.com/in/michaelryang/",
    ),
];

const fn page(title: &'static str, description: &'static str) -> PageMeta {
    PageMeta {
        title: Cow::Borrowed(title),
        description: Cow::Borrowed(description),
    }
}
