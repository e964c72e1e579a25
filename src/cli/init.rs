//! Config file generation.
//!
//! Writes the shipped configuration as a starting `folio.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::{config::FolioConfig, log};

/// Generate folio.toml content from the shipped configuration.
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# Folio configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Sections: [site], [pages.*], [[links]], [[socials]], [theme]\n\n");

    let body = toml::to_string_pretty(&FolioConfig::builtin())
        .context("Failed to serialize the built-in configuration")?;
    out.push_str(&body);

    Ok(out)
}

/// Write the config template into `root`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_config(root: &Path, file_name: &Path, force: bool) -> Result<()> {
    let path = root.join(file_name);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(&path, generate_config_template()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Run `folio init`.
pub fn new_config(dir: Option<&Path>, file_name: &Path, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template()?);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = dir.map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
    write_config(&root, file_name, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_template_parses_back_to_builtin() {
        let template = generate_config_template().unwrap();
        assert!(template.starts_with("# Folio configuration file"));

        let (parsed, ignored) = FolioConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(parsed, FolioConfig::builtin());
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let name = Path::new("folio.toml");

        write_config(dir.path(), name, false).unwrap();
        let written = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(FolioConfig::from_str(&written).is_ok());

        assert!(write_config(dir.path(), name, false).is_err());
        assert!(write_config(dir.path(), name, true).is_ok());
    }

    #[test]
    fn test_write_config_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        write_config(&root, Path::new("folio.toml"), false).unwrap();
        assert!(root.join("folio.toml").exists());
    }
}
