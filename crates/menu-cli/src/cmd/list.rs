use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(root: &Path, category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (config, store) = super::open(root)?;

    let categories = match category {
        Some(c) => {
            store.check_category(c)?;
            vec![c.to_string()]
        }
        None => config.display_categories(&store),
    };

    if json {
        let map: serde_json::Map<String, serde_json::Value> = categories
            .iter()
            .map(|c| (c.clone(), serde_json::json!(store.catalog().options(c))))
            .collect();
        return print_json(&map);
    }

    let mut rows = Vec::new();
    for c in &categories {
        let options = store.catalog().options(c);
        if options.is_empty() {
            rows.push(vec![c.clone(), "-".to_string()]);
        }
        for option in options {
            rows.push(vec![c.clone(), option.clone()]);
        }
    }
    print_table(&["CATEGORY", "OPTION"], &rows);
    Ok(())
}
