use crate::catalog::MealCatalog;
use crate::category::CategoryPolicy;
use crate::error::{MenuError, Result};
use crate::io;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where the in-memory catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Parsed from the backing file.
    File,
    /// No backing file yet; defaults were substituted.
    Missing,
    /// The backing file did not parse; defaults were substituted.
    Corrupt,
    /// The backing path exists but could not be read; defaults were
    /// substituted and saving is refused.
    Unreadable,
}

/// Owns one catalog and the file it persists to.
///
/// Every accepted edit rewrites the whole file. Rejected edits touch neither
/// memory nor disk. When persisting fails the edit stays in memory and the
/// storage error is returned, so the caller can retry `save` or drop the store.
#[derive(Debug, Clone)]
pub struct MealStore {
    path: PathBuf,
    policy: CategoryPolicy,
    catalog: MealCatalog,
    source: CatalogSource,
}

impl MealStore {
    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Load the catalog, substituting defaults when the file is absent,
    /// corrupt, or unreadable.
    pub fn load(path: impl Into<PathBuf>, policy: CategoryPolicy) -> Self {
        let path = path.into();
        let (catalog, source) = match read_catalog(&path) {
            Ok(Some(catalog)) => (catalog, CatalogSource::File),
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no catalog file, using defaults");
                (MealCatalog::with_defaults(), CatalogSource::Missing)
            }
            Err(e @ MenuError::Parse(_)) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "catalog corrupt, using defaults"
                );
                (MealCatalog::with_defaults(), CatalogSource::Corrupt)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "catalog unreadable, using defaults"
                );
                (MealCatalog::with_defaults(), CatalogSource::Unreadable)
            }
        };
        Self::from_parts(path, policy, catalog, source)
    }

    /// Like [`MealStore::load`], but a corrupt file is an error instead of
    /// being replaced by defaults. A missing file still yields defaults.
    pub fn load_strict(path: impl Into<PathBuf>, policy: CategoryPolicy) -> Result<Self> {
        let path = path.into();
        let (catalog, source) = match read_catalog(&path)? {
            Some(catalog) => (catalog, CatalogSource::File),
            None => (MealCatalog::with_defaults(), CatalogSource::Missing),
        };
        Ok(Self::from_parts(path, policy, catalog, source))
    }

    /// Wrap an already-built catalog. Nothing is read or written.
    pub fn with_catalog(
        path: impl Into<PathBuf>,
        policy: CategoryPolicy,
        catalog: MealCatalog,
    ) -> Self {
        Self::from_parts(path.into(), policy, catalog, CatalogSource::File)
    }

    fn from_parts(
        path: PathBuf,
        policy: CategoryPolicy,
        mut catalog: MealCatalog,
        source: CatalogSource,
    ) -> Self {
        for name in policy.required() {
            catalog.ensure_category(name);
        }
        Self {
            path,
            policy,
            catalog,
            source,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> &CategoryPolicy {
        &self.policy
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Accept `category` if the policy allows it. Under the open policy a
    /// key already in the catalog is accepted even when it is not a slug.
    pub fn check_category(&self, category: &str) -> Result<()> {
        if matches!(self.policy, CategoryPolicy::Open) && self.catalog.has_category(category) {
            return Ok(());
        }
        self.policy.check(category)
    }

    /// Options of `category` in display order.
    pub fn list(&self, category: &str) -> Result<&[String]> {
        self.check_category(category)?;
        Ok(self.catalog.options(category))
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Rewrite the backing file with the full catalog.
    ///
    /// A file that failed to parse at load time is moved to `<file>.corrupt`
    /// first, so its contents survive the overwrite. A path that could not be
    /// read at all is never touched.
    pub fn save(&mut self) -> Result<()> {
        if self.source == CatalogSource::Unreadable {
            return Err(MenuError::Storage(std::io::Error::other(format!(
                "{} could not be read when loading; not overwriting it",
                self.path.display()
            ))));
        }
        if self.source == CatalogSource::Corrupt && self.path.exists() {
            let backup = io::preserve_corrupt(&self.path)?;
            tracing::warn!(backup = %backup.display(), "kept unreadable catalog file");
        }
        let data = self.catalog.to_json_pretty()?;
        io::atomic_write(&self.path, data.as_bytes())?;
        self.source = CatalogSource::File;
        tracing::debug!(path = %self.path.display(), "catalog saved");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn add_option(&mut self, category: &str, option: &str) -> Result<()> {
        self.check_category(category)?;
        self.catalog.add(category, option)?;
        self.save()
    }

    pub fn remove_option(&mut self, category: &str, option: &str) -> Result<()> {
        self.check_category(category)?;
        self.catalog.remove(category, option)?;
        self.save()
    }
}

fn read_catalog(path: &Path) -> Result<Option<MealCatalog>> {
    let Some(data) = io::read_optional(path)? else {
        return Ok(None);
    };
    MealCatalog::from_slice(&data).map(Some)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
