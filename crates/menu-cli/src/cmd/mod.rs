pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod serve;
pub mod suggest;

use anyhow::Context;
use menu_core::config::Config;
use menu_core::MealStore;
use std::path::Path;

/// Load the config and open the catalog it points at.
pub(crate) fn open(root: &Path) -> anyhow::Result<(Config, MealStore)> {
    let config = Config::load(root).context("failed to load menu.yaml")?;
    let store = config.open_store(root).with_context(|| {
        format!(
            "failed to load catalog {}",
            config.catalog_path(root).display()
        )
    })?;
    Ok((config, store))
}
