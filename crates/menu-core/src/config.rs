use crate::category::{default_categories, CategoryPolicy};
use crate::error::Result;
use crate::paths;
use crate::store::MealStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3141
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file, relative to the project root unless absolute.
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,
    /// Categories in display order; with `open_categories: false` these are
    /// the only names accepted.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub open_categories: bool,
    /// Refuse to load an unparseable catalog instead of falling back to defaults.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from(paths::CATALOG_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            categories: default_categories(),
            open_categories: false,
            strict: false,
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load `menu.yaml` from `root`. A missing file means all defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        let Some(data) = crate::io::read_optional(&path)? else {
            return Ok(Self::default());
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_slice(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn policy(&self) -> CategoryPolicy {
        if self.open_categories {
            CategoryPolicy::Open
        } else {
            CategoryPolicy::Fixed(self.categories.clone())
        }
    }

    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        paths::catalog_path(root, &self.catalog_file)
    }

    /// Open the store this config describes, honouring `strict`.
    pub fn open_store(&self, root: &Path) -> Result<MealStore> {
        let path = self.catalog_path(root);
        if self.strict {
            MealStore::load_strict(path, self.policy())
        } else {
            Ok(MealStore::load(path, self.policy()))
        }
    }

    /// Categories to show, in order: the configured ones, then (when open)
    /// any extra names found in the catalog.
    pub fn display_categories(&self, store: &MealStore) -> Vec<String> {
        let mut out = self.categories.clone();
        if self.open_categories {
            for name in store.catalog().category_names() {
                if !out.iter().any(|c| c == name) {
                    out.push(name.to_string());
                }
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.categories.is_empty() && !self.open_categories {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "no categories configured and open_categories is off; \
                          every edit will be rejected"
                    .to_string(),
            });
        }

        let mut seen = HashSet::new();
        for name in &self.categories {
            if paths::validate_category_name(name).is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "category '{name}' should be lowercase letters, digits and hyphens"
                    ),
                });
            }
            if !seen.insert(name.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("category '{name}' is listed more than once"),
                });
            }
        }

        if self.catalog_file.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "catalog_file is empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
