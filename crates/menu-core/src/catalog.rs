//! The meal catalog: category name → ordered list of options.
//!
//! Serialized as a bare JSON object, e.g.
//! `{"breakfast": ["Pancakes"], "lunch": [], "dinner": ["Soup"]}`.
//! Categories keep document order and new ones are appended, so a save never
//! reshuffles the file. Options are never trimmed or case-folded; within a
//! category they are unique by exact string match.

use crate::category::{BREAKFAST, DINNER, LUNCH};
use crate::error::{MenuError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealCatalog {
    categories: Vec<(String, Vec<String>)>,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog used when nothing has been persisted yet.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert_category(BREAKFAST, ["Pancakes", "Omelette", "Oatmeal"]);
        catalog.insert_category(LUNCH, ["Caesar Salad", "Turkey Sandwich", "Tomato Soup"]);
        catalog.insert_category(
            DINNER,
            ["Spaghetti Bolognese", "Grilled Salmon", "Chicken Stir-Fry"],
        );
        catalog
    }

    fn list(&self, category: &str) -> Option<&Vec<String>> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, list)| list)
    }

    fn list_mut(&mut self, category: &str) -> Option<&mut Vec<String>> {
        self.categories
            .iter_mut()
            .find(|(name, _)| name == category)
            .map(|(_, list)| list)
    }

    /// The list for `category`, appended as empty if it was absent.
    fn list_or_insert(&mut self, category: &str) -> &mut Vec<String> {
        let pos = match self.categories.iter().position(|(name, _)| name == category) {
            Some(pos) => pos,
            None => {
                self.categories.push((category.to_string(), Vec::new()));
                self.categories.len() - 1
            }
        };
        &mut self.categories[pos].1
    }

    /// Replace a whole category in place (or append it). Repeated options are
    /// dropped, keeping the first.
    pub fn insert_category<I, S>(&mut self, category: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.list_or_insert(category);
        list.clear();
        for option in options {
            let option = option.into();
            if !list.contains(&option) {
                list.push(option);
            }
        }
    }

    /// Make sure `category` exists, as an empty list if it was absent.
    pub fn ensure_category(&mut self, category: &str) {
        self.list_or_insert(category);
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.list(category).is_some()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    /// Options for `category`; a missing category reads as empty.
    pub fn options(&self, category: &str) -> &[String] {
        self.list(category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, category: &str, option: &str) -> bool {
        self.options(category).iter().any(|o| o == option)
    }

    /// Append `option` to `category`, creating the category if needed.
    pub fn add(&mut self, category: &str, option: &str) -> Result<()> {
        if option.trim().is_empty() {
            return Err(MenuError::EmptyOption);
        }
        if self.contains(category, option) {
            return Err(MenuError::DuplicateOption {
                category: category.to_string(),
                option: option.to_string(),
            });
        }
        self.list_or_insert(category).push(option.to_string());
        Ok(())
    }

    /// Remove the first match of `option` from `category`.
    pub fn remove(&mut self, category: &str, option: &str) -> Result<()> {
        let not_found = || MenuError::OptionNotFound {
            category: category.to_string(),
            option: option.to_string(),
        };
        let list = self.list_mut(category).ok_or_else(not_found)?;
        let pos = list.iter().position(|o| o == option).ok_or_else(not_found)?;
        list.remove(pos);
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a catalog document. Duplicates inside a category collapse to one.
    pub fn from_json(data: &str) -> Result<Self> {
        Self::from_slice(data.as_bytes())
    }

    /// Like [`MealCatalog::from_json`]; bytes that are not UTF-8 are a parse error.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

// ---------------------------------------------------------------------------
// Serde: a JSON object whose key order is the category order
// ---------------------------------------------------------------------------

impl Serialize for MealCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, options) in &self.categories {
            map.serialize_entry(name, options)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = MealCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping category names to lists of strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<MealCatalog, A::Error> {
        let mut catalog = MealCatalog::new();
        while let Some((name, options)) = access.next_entry::<String, Vec<String>>()? {
            catalog.insert_category(&name, options);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for MealCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
