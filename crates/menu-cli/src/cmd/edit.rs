use crate::output::print_json;
use anyhow::Context;
use std::path::Path;

pub fn add(root: &Path, category: &str, option: &str, json: bool) -> anyhow::Result<()> {
    let (_, mut store) = super::open(root)?;
    store
        .add_option(category, option)
        .with_context(|| format!("could not add '{option}' to {category}"))?;

    if json {
        print_json(&serde_json::json!({
            "category": category,
            "option": option,
            "options": store.catalog().options(category),
        }))?;
    } else {
        println!("Added '{option}' to {category}");
    }
    Ok(())
}

pub fn remove(root: &Path, category: &str, option: &str, json: bool) -> anyhow::Result<()> {
    let (_, mut store) = super::open(root)?;
    store
        .remove_option(category, option)
        .with_context(|| format!("could not remove '{option}' from {category}"))?;

    if json {
        print_json(&serde_json::json!({
            "category": category,
            "option": option,
            "options": store.catalog().options(category),
        }))?;
    } else {
        println!("Removed '{option}' from {category}");
    }
    Ok(())
}
