use crate::output::print_json;
use anyhow::Context;
use menu_core::config::Config;
use menu_core::{io, paths, MealCatalog};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    io::ensure_dir(root).context("failed to create project root")?;

    let config_path = paths::config_path(root);
    let config = Config::load(root).context("failed to load menu.yaml")?;
    let config_written = if config_path.exists() {
        false
    } else {
        config.save(root).context("failed to write menu.yaml")?;
        true
    };

    let catalog_path = config.catalog_path(root);
    let mut catalog = MealCatalog::with_defaults();
    for name in &config.categories {
        catalog.ensure_category(name);
    }
    let data = catalog.to_json_pretty()?;
    let catalog_written = io::write_if_missing(&catalog_path, data.as_bytes())
        .with_context(|| format!("failed to write {}", catalog_path.display()))?;

    if json {
        print_json(&serde_json::json!({
            "root": root,
            "config": config_path,
            "config_written": config_written,
            "catalog": catalog_path,
            "catalog_written": catalog_written,
        }))?;
    } else {
        report("config", &config_path, config_written);
        report("catalog", &catalog_path, catalog_written);
    }
    Ok(())
}

fn report(what: &str, path: &Path, written: bool) {
    if written {
        println!("Created {what}: {}", path.display());
    } else {
        println!("Kept existing {what}: {}", path.display());
    }
}
