//! Errors raised while reading and checking `folio.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// The file is not valid TOML or does not match the schema.
    #[error("{}", render_parse_error(.path, .location, .message))]
    Toml {
        /// Config file, unset when parsing a string.
        path: Option<PathBuf>,
        /// 1-based line and column of the offending token.
        location: Option<(usize, usize)>,
        message: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Wrap a toml error, resolving its byte span against `content`.
    pub fn toml(content: &str, err: &toml::de::Error) -> Self {
        Self::Toml {
            path: None,
            location: err.span().map(|span| line_col(content, span.start)),
            message: err.message().trim_end().to_owned(),
        }
    }

    /// Attach the file a parse error came from.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Self::Toml {
                location, message, ..
            } => Self::Toml {
                path: Some(file.to_path_buf()),
                location,
                message,
            },
            other => other,
        }
    }
}

fn render_parse_error(
    path: &Option<PathBuf>,
    location: &Option<(usize, usize)>,
    message: &str,
) -> String {
    let mut out = match path {
        Some(path) => format!("cannot parse `{}`", path.display()),
        None => "cannot parse config".to_owned(),
    };
    if let Some((line, col)) = location {
        out.push_str(&format!(" at line {line}, column {col}"));
    }
    out.push_str(": ");
    out.push_str(message);
    out
}

/// 1-based (line, column) of a byte offset.
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let col = before
        .rsplit('\n')
        .next()
        .map_or(0, |tail| tail.chars().count())
        + 1;
    (line, col)
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// One rule violation, pinned to a field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// e.g. `theme.hero.actions[0].href`
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {} {}", self.field.as_str().cyan(), "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and hints collected over one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal notes (empty descriptions and the like).
    hints: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.hints.push((field, message.into()));
    }

    pub fn print_hints(&self) {
        for (field, message) in &self.hints {
            crate::log!("hint"; "[{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn hints(&self) -> &[(FieldPath, String)] {
        &self.hints
    }

    /// Whether any error points at `field`.
    pub fn has_error_at(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field.as_str() == field)
    }

    /// Errors bucketed by top-level section, in order of first appearance.
    pub fn by_section(&self) -> Vec<(&str, Vec<&ConfigDiagnostic>)> {
        let mut groups: Vec<(&str, Vec<&ConfigDiagnostic>)> = Vec::new();
        for err in &self.errors {
            let section = err.field.section();
            match groups.iter_mut().find(|(name, _)| *name == section) {
                Some((_, list)) => list.push(err),
                None => groups.push((section, vec![err])),
            }
        }
        groups
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "invalid configuration".red().bold())?;
        for (section, errors) in self.by_section() {
            write!(f, "\n\n{}", format_args!("[{section}]").bold())?;
            for err in errors {
                write!(f, "\n{err}")?;
            }
        }
        let count = self.errors.len();
        write!(
            f,
            "\n\n{} {} {}",
            "found".dimmed(),
            count.to_string().red().bold(),
            (if count == 1 { "error" } else { "errors" }).dimmed()
        )
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("folio.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.to_string(), "cannot read `folio.toml`");
    }

    #[test]
    fn test_parse_error_location() {
        let content = "[site]\ntitle = \"Michael Yang\"\nauthor = \n";
        let err = toml::from_str::<toml::Table>(content).unwrap_err();
        let err = ConfigError::toml(content, &err).in_file(Path::new("site/folio.toml"));

        let ConfigError::Toml { location, .. } = &err else {
            panic!("expected parse error");
        };
        assert_eq!(location.map(|(line, _)| line), Some(3));

        let display = err.to_string();
        assert!(display.starts_with("cannot parse `site/folio.toml` at line 3, column"));
    }

    #[test]
    fn test_line_col() {
        let content = "a = 1\nbb = 2\n";
        assert_eq!(line_col(content, 0), (1, 1));
        assert_eq!(line_col(content, 6), (2, 1));
        assert_eq!(line_col(content, 9), (2, 4));
        assert_eq!(line_col(content, 100), (3, 1));
    }

    #[test]
    fn test_in_file_leaves_other_errors() {
        let err = ConfigError::Validation("2 unknown field(s)".into()).in_file(Path::new("x"));
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_errors_grouped_by_section() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "title is empty");
        diag.error_with_hint(
            FieldPath::new("links").index(1).field("href"),
            "'blog' is not a site-relative path",
            "use \"/blog\"",
        );
        diag.error(FieldPath::new("site.url"), "not a url");
        diag.hint(FieldPath::new("theme.description"), "description is empty");

        let groups = diag.by_section();
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["site", "links"]);
        assert_eq!(groups[0].1.len(), 2);

        assert_eq!(diag.len(), 3);
        assert_eq!(diag.hints().len(), 1);
        assert!(diag.has_error_at("links[1].href"));

        let display = diag.into_result().unwrap_err().to_string();
        assert_eq!(display.matches("[site]").count(), 1);
        assert!(display.contains("links[1].href"));
        assert!(display.contains("use \"/blog\""));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_hints_alone_are_not_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.hint(FieldPath::new("site.author"), "author is empty");
        assert!(!diag.has_errors());
        assert!(diag.into_result().is_ok());
    }
}
