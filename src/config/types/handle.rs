//! Process-wide config handle.
//!
//! Uses `arc-swap` for lock-free reads. The loaded config is installed once
//! at startup and read from any thread afterwards; until then readers see
//! the built-in configuration.

use crate::config::FolioConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<FolioConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(FolioConfig::builtin()));

#[inline]
pub fn cfg() -> Arc<FolioConfig> {
    CONFIG.load_full()
}

/// Install the loaded config and return a shared handle to it.
#[inline]
pub fn init_config(config: FolioConfig) -> Arc<FolioConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readers_see_builtin_or_installed_config() {
        // Other tests may install first; both states carry the shipped title.
        assert_eq!(cfg().theme.title, "Michael Yang");

        let installed = init_config(FolioConfig::builtin());
        assert!(Arc::ptr_eq(&installed, &cfg()));
    }
}
