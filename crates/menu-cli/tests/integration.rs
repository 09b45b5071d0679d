#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = r#"{"breakfast": ["Pancakes"], "lunch": [], "dinner": ["Soup"]}"#;

fn menu(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("menu").unwrap();
    cmd.current_dir(dir.path()).env("MENU_ROOT", dir.path());
    cmd
}

fn scenario_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("meal_options.json"), SCENARIO).unwrap();
    dir
}

fn catalog(dir: &TempDir) -> serde_json::Value {
    let data = std::fs::read_to_string(dir.path().join("meal_options.json")).unwrap();
    serde_json::from_str(&data).unwrap()
}

// ---------------------------------------------------------------------------
// menu init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_config_and_defaults() {
    let dir = TempDir::new().unwrap();
    menu(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created catalog"));

    assert!(dir.path().join("menu.yaml").exists());
    let json = catalog(&dir);
    assert_eq!(json["breakfast"].as_array().unwrap().len(), 3);
    assert_eq!(json["lunch"].as_array().unwrap().len(), 3);
    assert_eq!(json["dinner"].as_array().unwrap().len(), 3);
}

#[test]
fn init_keeps_existing_catalog() {
    let dir = scenario_dir();
    menu(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept existing catalog"));
    assert_eq!(catalog(&dir)["dinner"], serde_json::json!(["Soup"]));
}

// ---------------------------------------------------------------------------
// menu suggest
// ---------------------------------------------------------------------------

#[test]
fn suggest_single_option_category() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["suggest", "breakfast"])
        .assert()
        .success()
        .stdout("Pancakes\n");
}

#[test]
fn suggest_empty_category_prints_fallback() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["suggest", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No options available"));
}

#[test]
fn suggest_empty_category_json_is_null() {
    let dir = scenario_dir();
    let out = menu(&dir)
        .args(["suggest", "lunch", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(json["option"].is_null());
}

#[test]
fn suggest_all_categories() {
    let dir = scenario_dir();
    menu(&dir)
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("breakfast: Pancakes"))
        .stdout(predicate::str::contains("lunch: No options available"))
        .stdout(predicate::str::contains("dinner: Soup"));
}

#[test]
fn suggest_with_seed_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let first = menu(&dir)
        .args(["suggest", "dinner", "--seed", "17"])
        .output()
        .unwrap();
    let second = menu(&dir)
        .args(["suggest", "dinner", "--seed", "17"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn suggest_unknown_category_fails() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["suggest", "brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid category"));
}

// ---------------------------------------------------------------------------
// menu add / remove
// ---------------------------------------------------------------------------

#[test]
fn add_then_duplicate_is_declined() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["add", "lunch", "Salad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Salad' to lunch"));
    assert_eq!(catalog(&dir)["lunch"], serde_json::json!(["Salad"]));

    menu(&dir)
        .args(["add", "lunch", "Salad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already on the lunch list"));
    assert_eq!(catalog(&dir)["lunch"], serde_json::json!(["Salad"]));
}

#[test]
fn add_blank_is_declined() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["add", "lunch", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn add_then_remove_restores_list() {
    let dir = scenario_dir();
    let before = catalog(&dir);
    menu(&dir).args(["add", "dinner", "Tacos"]).assert().success();
    menu(&dir)
        .args(["remove", "dinner", "Tacos"])
        .assert()
        .success();
    assert_eq!(catalog(&dir), before);
}

#[test]
fn remove_absent_is_not_found() {
    let dir = scenario_dir();
    menu(&dir)
        .args(["remove", "dinner", "Lasagna"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not on the dinner list"));
    assert_eq!(catalog(&dir)["dinner"], serde_json::json!(["Soup"]));
}

#[test]
fn add_to_unknown_category_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    menu(&dir)
        .args(["add", "brunch", "Eggs"])
        .assert()
        .failure();
    assert!(!dir.path().join("meal_options.json").exists());
}

#[test]
fn open_categories_allow_new_names() {
    let dir = scenario_dir();
    std::fs::write(dir.path().join("menu.yaml"), "open_categories: true\n").unwrap();
    menu(&dir)
        .args(["add", "brunch", "Eggs Benedict"])
        .assert()
        .success();
    menu(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("brunch"))
        .stdout(predicate::str::contains("Eggs Benedict"));
}

// ---------------------------------------------------------------------------
// menu list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_table() {
    let dir = scenario_dir();
    menu(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CATEGORY"))
        .stdout(predicate::str::contains("Pancakes"))
        .stdout(predicate::str::contains("Soup"));
}

#[test]
fn list_json_for_missing_file_is_defaults() {
    let dir = TempDir::new().unwrap();
    let out = menu(&dir).args(["list", "--json"]).output().unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["breakfast"][0], "Pancakes");
    assert!(!dir.path().join("meal_options.json").exists());
}

#[test]
fn open_categories_keep_existing_capitalized_key() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("meal_options.json"), r#"{"Snacks": ["Chips"]}"#).unwrap();
    std::fs::write(dir.path().join("menu.yaml"), "open_categories: true\n").unwrap();

    menu(&dir)
        .args(["list", "Snacks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chips"));
    menu(&dir).args(["add", "Snacks", "Nuts"]).assert().success();
    menu(&dir).args(["remove", "Snacks", "Chips"]).assert().success();
    assert_eq!(catalog(&dir)["Snacks"], serde_json::json!(["Nuts"]));
}

#[test]
fn corrupt_catalog_falls_back_then_is_preserved() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("meal_options.json"), "not json").unwrap();
    menu(&dir)
        .args(["suggest", "breakfast"])
        .assert()
        .success();

    menu(&dir).args(["add", "lunch", "Ramen"]).assert().success();
    let backup = std::fs::read_to_string(dir.path().join("meal_options.json.corrupt")).unwrap();
    assert_eq!(backup, "not json");
    assert!(catalog(&dir)["lunch"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("Ramen")));
}

#[test]
fn strict_mode_refuses_corrupt_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("meal_options.json"), "not json").unwrap();
    std::fs::write(dir.path().join("menu.yaml"), "strict: true\n").unwrap();
    menu(&dir)
        .args(["suggest", "breakfast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

// ---------------------------------------------------------------------------
// menu config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    menu(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No warnings"));
}

#[test]
fn config_validate_empty_fixed_set_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("menu.yaml"), "categories: []\n").unwrap();
    menu(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn config_show_reports_catalog_path() {
    let dir = TempDir::new().unwrap();
    menu(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("meal_options.json"))
        .stdout(predicate::str::contains("fixed"));
}
