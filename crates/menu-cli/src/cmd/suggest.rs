use crate::output::print_json;
use menu_core::picker::{daily_menu, suggest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub fn run(root: &Path, category: Option<&str>, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let (config, store) = super::open(root)?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    match category {
        Some(category) => {
            store.check_category(category)?;
            let pick = suggest(store.catalog(), category, &mut rng);
            if json {
                print_json(&serde_json::json!({
                    "category": category,
                    "option": pick,
                }))?;
            } else {
                println!("{}", pick);
            }
        }
        None => {
            let today = chrono::Local::now().date_naive();
            let categories = config.display_categories(&store);
            let menu = daily_menu(store.catalog(), &categories, today, &mut rng);
            if json {
                print_json(&menu)?;
            } else {
                println!("Menu for {}", menu.date.format("%A, %B %-d"));
                for pick in &menu.picks {
                    println!("  {}: {}", pick.category, pick.option);
                }
            }
        }
    }
    Ok(())
}
