//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, e.g. `theme.header_nav_links[2].href`.
///
/// Static paths are free to build in `const` context; indexed paths into
/// lists are built on demand while validating.
///
/// # Example
///
/// ```ignore
/// const HEADER_NAV: FieldPath = FieldPath::new("theme.header_nav_links");
///
/// diag.error(HEADER_NAV.index(2).field("href"), "duplicate href");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of a named child field.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, name)))
    }

    /// Path of a list element.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level section the path lives in (`site`, `links`, `theme`, ...).
    pub fn section(&self) -> &str {
        let end = self.0.find(['.', '[']).unwrap_or(self.0.len());
        &self.0[..end]
    }
}

/// Render a path reported by `serde_ignored` the way diagnostics name fields.
///
/// `Option` and newtype wrappers add no segment; sequence elements become
/// `[i]`.
impl From<&serde_ignored::Path<'_>> for FieldPath {
    fn from(path: &serde_ignored::Path<'_>) -> Self {
        use serde_ignored::Path;
        match path {
            Path::Root => Self::new(""),
            Path::Seq { parent, index } => Self::from(*parent).index(*index),
            Path::Map { parent, key } => {
                let parent = Self::from(*parent);
                if parent.0.is_empty() {
                    Self(Cow::Owned(key.clone()))
                } else {
                    parent.field(key)
                }
            }
            Path::Some { parent }
            | Path::NewtypeStruct { parent }
            | Path::NewtypeVariant { parent } => Self::from(*parent),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        const NAV: FieldPath = FieldPath::new("theme.header_nav_links");
        assert_eq!(NAV.as_str(), "theme.header_nav_links");
        assert_eq!(
            NAV.index(2).field("href").as_str(),
            "theme.header_nav_links[2].href"
        );
        assert_eq!(FieldPath::new("theme").field("hero").as_str(), "theme.hero");
    }

    #[test]
    fn test_section() {
        assert_eq!(FieldPath::new("theme.hero.title").section(), "theme");
        assert_eq!(FieldPath::new("links").index(3).field("href").section(), "links");
        assert_eq!(FieldPath::new("socials").section(), "socials");
    }

    #[test]
    fn test_from_ignored_path() {
        use serde_ignored::Path;
        let theme = Path::Map {
            parent: &Path::Root,
            key: "theme".into(),
        };
        let nav = Path::Map {
            parent: &theme,
            key: "header_nav_links".into(),
        };
        let some = Path::Some { parent: &nav };
        let entry = Path::Seq {
            parent: &some,
            index: 0,
        };
        let label = Path::Map {
            parent: &entry,
            key: "label".into(),
        };
        assert_eq!(
            FieldPath::from(&label).as_str(),
            "theme.header_nav_links[0].label"
        );
    }
}
