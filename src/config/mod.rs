//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── links      # [[links]], [[socials]]
//! │   ├── pages      # [pages.*]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # FolioConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[site]`       | Site metadata (title, description, author, url)  |
//! | `[pages.*]`    | Title and description of work/blog/projects/search |
//! | `[[links]]`    | Main navigation, in menu order                   |
//! | `[[socials]]`  | Social profiles (name, icon, text, href)         |
//! | `[theme]`      | Branding, menus, hero, subscribe, page sizes     |

pub mod section;
pub mod types;
mod util;

pub use util::{find_config_file, find_config_file_from};

// Re-export from section/
pub use section::{
    Hero, Image, List, NavLink, PageKind, PageMeta, Pages, SiteConfig, SiteMeta, SocialLink,
    Subscribe, Text,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::cli::{Cli, Commands};
use crate::{consts, data, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site-wide metadata
    pub site: SiteMeta,

    /// Per-page metadata
    pub pages: Pages,

    /// Main navigation
    #[serde(default)]
    pub links: List<NavLink>,

    /// Social profiles
    #[serde(default)]
    pub socials: List<SocialLink>,

    /// Template configuration (branding, hero, subscribe, pagination)
    pub theme: SiteConfig,
}

/// `<head>` values for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadMeta {
    /// Document title, `"<page> | <site>"`.
    pub title: String,
    pub description: String,
    pub author: String,
    /// Absolute URL of the page, when `site.url` is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

impl FolioConfig {
    /// The shipped configuration, assembled from [`crate::consts`] and
    /// [`crate::data`].
    pub fn builtin() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: consts::SITE.clone(),
            pages: Pages {
                work: consts::WORK.clone(),
                blog: consts::BLOG.clone(),
                projects: consts::PROJECTS.clone(),
                search: consts::SEARCH.clone(),
            },
            links: Cow::Borrowed(consts::LINKS),
            socials: Cow::Borrowed(consts::SOCIALS),
            theme: data::SITE_CONFIG.clone(),
        }
    }

    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create one",
                cli.config.display()
            )));
        };

        let deny_unknown = matches!(
            cli.command,
            Commands::Check {
                deny_unknown: true,
                ..
            }
        );

        let mut config = Self::from_path(&config_path, deny_unknown)?;
        config.config_path = config_path;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, deny_unknown: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) =
            Self::parse_with_ignored(&content).map_err(|err| err.in_file(path))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if deny_unknown {
                bail!(ConfigError::Validation(format!(
                    "{} unknown field(s) in config",
                    ignored.len()
                )));
            }
        }

        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting the paths of unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<FieldPath>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(FieldPath::from(&path));
        })
        .map_err(|err| ConfigError::toml(content, &err))?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[FieldPath], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field.as_str());
        }
    }

    /// `<head>` values for `kind`.
    pub fn head(&self, kind: PageKind) -> HeadMeta {
        let page = self.pages.get(kind);
        HeadMeta {
            title: format!("{} | {}", page.title, self.site.title),
            description: page.description.to_string(),
            author: self.site.author.to_string(),
            canonical: self.absolute_url(kind.route()),
        }
    }

    /// Resolve a site-relative `href` against `site.url`.
    ///
    /// Returns `None` if no site url is configured or it does not parse.
    pub fn absolute_url(&self, href: &str) -> Option<String> {
        let base = url::Url::parse(self.site.url.as_deref()?).ok()?;
        base.join(href).ok().map(String::from)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.pages.validate(&mut diag);
        section::validate_nav_links(&self.links, &FieldPath::new("links"), &mut diag);
        section::validate_social_links(&self.socials, &FieldPath::new("socials"), &mut diag);
        self.theme.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints hints and returns all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_hints();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

impl FromStr for FolioConfig {
    type Err = ConfigError;

    /// Parse configuration from TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|err| ConfigError::toml(content, &err))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal config with every required field.
#[cfg(test)]
pub const TEST_MINIMAL_CONFIG: &str = r#"
[theme]
title = "Test"
description = "Test"

[site]
title = "Test"
description = "Test"
author = "Test"

[pages.work]
title = "Work"
description = "Test"

[pages.blog]
title = "Blog"
description = "Test"

[pages.projects]
title = "Projects"
description = "Test"

[pages.search]
title = "Search"
description = "Test"
"#;

/// Parse config with minimal required fields plus `extra`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> FolioConfig {
    let config = format!("{TEST_MINIMAL_CONFIG}\n{extra}");
    let (parsed, ignored) = FolioConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
