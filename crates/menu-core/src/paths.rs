use crate::error::{MenuError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "menu.yaml";
pub const CATALOG_FILE: &str = "meal_options.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve the catalog file against the project root. Absolute paths pass through.
pub fn catalog_path(root: &Path, catalog_file: &Path) -> PathBuf {
    if catalog_file.is_absolute() {
        catalog_file.to_path_buf()
    } else {
        root.join(catalog_file)
    }
}

/// True if `dir` looks like a menu project root.
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file() || dir.join(CATALOG_FILE).is_file()
}

// ---------------------------------------------------------------------------
// Category name validation
// ---------------------------------------------------------------------------

static CATEGORY_RE: OnceLock<Regex> = OnceLock::new();

fn category_re() -> &'static Regex {
    CATEGORY_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").expect("static regex")
    })
}

pub fn validate_category_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 || !category_re().is_match(name) {
        return Err(MenuError::InvalidCategory(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
