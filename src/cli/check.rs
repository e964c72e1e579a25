//! `folio check`: load and validate the config file.

use anyhow::Result;

use crate::config::FolioConfig;
use crate::log;

/// Summarize a config that passed validation.
pub fn summary(config: &FolioConfig) -> String {
    let theme = &config.theme;
    format!(
        "config ok: {} links, {} socials, {} header / {} footer menu entries, hero {}, subscribe {}",
        config.links.len(),
        config.socials.len(),
        theme.header_nav().len(),
        theme.footer_nav().len(),
        if theme.has_hero() { "on" } else { "off" },
        if theme.subscribe.is_some() { "on" } else { "off" },
    )
}

/// Report the result of a successful load.
///
/// Validation already ran in [`FolioConfig::load`]; errors never reach here.
pub fn report(config: &FolioConfig) -> Result<()> {
    log!("check"; "{}", config.config_path.display());
    log!("check"; "{}", summary(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_builtin() {
        let summary = summary(&FolioConfig::builtin());
        assert_eq!(
            summary,
            "config ok: 4 links, 3 socials, 4 header / 2 footer menu entries, hero on, subscribe off"
        );
    }

    #[test]
    fn test_report_shared_config() {
        let config = std::sync::Arc::new(FolioConfig::builtin());
        assert!(report(&config).is_ok());
    }
}
