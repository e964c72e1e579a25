//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section              | Purpose                               |
//! |---------|---------------------------|---------------------------------------|
//! | `site`  | `[site]`                  | Site-wide title, description, author  |
//! | `pages` | `[pages.*]`               | Per-page `<head>` metadata            |
//! | `links` | `[[links]]`, `[[socials]]`| Navigation and social profile links   |
//! | `theme` | `[theme]`                 | Branding, hero, subscribe, pagination |
//!
//! Strings and lists are copy-on-write so the shipped data in
//! [`crate::consts`] and [`crate::data`] can be `const` items, while values
//! parsed from a file own their contents.

mod links;
mod pages;
mod site;
mod theme;

use std::borrow::Cow;

pub use links::{NavLink, SocialLink, validate_nav_links, validate_social_links};
pub use pages::{PageKind, PageMeta, Pages};
pub use site::SiteMeta;
pub use theme::{Hero, Image, SiteConfig, Subscribe};

/// Text value: borrowed in shipped constants, owned when parsed.
pub type Text = Cow<'static, str>;

/// Ordered list value: borrowed in shipped constants, owned when parsed.
pub type List<T> = Cow<'static, [T]>;
