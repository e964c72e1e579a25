//! `folio show` and `folio head`: print configuration for other tools.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::{OutputFormat, Section};
use crate::config::{FolioConfig, PageKind};

/// Render the config, or one section of it, in `format`.
pub fn render(config: &FolioConfig, format: OutputFormat, section: Option<Section>) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let value = match section {
        Some(section) => {
            let key = section.key();
            let inner = value.get(key).cloned().unwrap_or(JsonValue::Null);
            // Keep the key so TOML output stays a table.
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), inner);
            JsonValue::Object(map)
        }
        None => value,
    };

    encode(&value, format)
}

/// Render the `<head>` values of `page`.
pub fn render_head(config: &FolioConfig, page: PageKind) -> Result<String> {
    encode(&config.head(page), OutputFormat::Json)
}

fn encode<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to encode JSON")
        }
        OutputFormat::Toml => toml::to_string_pretty(value).context("Failed to encode TOML"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let config = FolioConfig::builtin();
        let json = render(&config, OutputFormat::Json, None).unwrap();
        let parsed: FolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_keeps_declaration_order() {
        let json = render(&FolioConfig::builtin(), OutputFormat::Json, None).unwrap();
        let site = json.find("\"site\"").unwrap();
        let pages = json.find("\"pages\"").unwrap();
        let theme = json.find("\"theme\"").unwrap();
        assert!(site < pages && pages < theme);
        assert!(!json.contains("config_path"));
    }

    #[test]
    fn test_single_section_as_toml() {
        let out = render(&FolioConfig::builtin(), OutputFormat::Toml, Some(Section::Links)).unwrap();
        let value: toml::Value = toml::from_str(&out).unwrap();
        let links = value["links"].as_array().unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[1]["href"].as_str(), Some("/work"));
        assert!(value.get("theme").is_none());
    }

    #[test]
    fn test_head_json() {
        let out = render_head(&FolioConfig::builtin(), PageKind::Search).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Search | Michael Yang");
        assert_eq!(value["canonical"], "https://michael-yang.com/search");
    }
}
