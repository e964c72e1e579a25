//! `[pages.*]` configuration.
//!
//! # Example
//!
//! ```toml
//! [pages.work]
//! title = "Work"
//! description = "Places I have worked."
//!
//! [pages.blog]
//! title = "Blog"
//! description = "Posts about things I'm working on."
//! ```

use serde::{Deserialize, Serialize};

use super::Text;
use crate::config::util::require_text;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Title and description of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: Text,
    pub description: Text,
}

/// The pages that carry their own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PageKind {
    Work,
    Blog,
    Projects,
    Search,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [Self::Work, Self::Blog, Self::Projects, Self::Search];

    /// Key under `[pages]`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Blog => "blog",
            Self::Projects => "projects",
            Self::Search => "search",
        }
    }

    /// Site-relative route of the page.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Work => "/work",
            Self::Blog => "/blog",
            Self::Projects => "/projects",
            Self::Search => "/search",
        }
    }
}

/// Per-page metadata, one entry per [`PageKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    pub work: PageMeta,
    pub blog: PageMeta,
    pub projects: PageMeta,
    pub search: PageMeta,
}

impl Pages {
    pub const fn get(&self, kind: PageKind) -> &PageMeta {
        match kind {
            PageKind::Work => &self.work,
            PageKind::Blog => &self.blog,
            PageKind::Projects => &self.projects,
            PageKind::Search => &self.search,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let base = FieldPath::new("pages");
        for kind in PageKind::ALL {
            let page = self.get(kind);
            let at = base.field(kind.key());
            require_text(&page.title, at.field("title"), "page title", diag);
            if page.description.trim().is_empty() {
                diag.hint(at.field("description"), "description is empty");
            }
        }
    }
}
