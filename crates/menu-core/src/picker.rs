//! Random meal suggestions.
//!
//! Draws are independent and uniform; nothing is remembered between calls,
//! so the same option may come up twice in a row. Callers pass the RNG in,
//! which keeps tests deterministic with a seeded `StdRng`.

use crate::catalog::MealCatalog;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const NO_OPTIONS_TEXT: &str = "No options available";

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Pick(String),
    /// The category has nothing to choose from.
    Empty,
}

impl Suggestion {
    pub fn option(&self) -> Option<&str> {
        match self {
            Suggestion::Pick(s) => Some(s),
            Suggestion::Empty => None,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Pick(s) => f.write_str(s),
            Suggestion::Empty => f.write_str(NO_OPTIONS_TEXT),
        }
    }
}

/// Serializes as the picked option, or `null` when empty.
impl Serialize for Suggestion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.option().serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Picking
// ---------------------------------------------------------------------------

pub fn suggest<R: Rng + ?Sized>(catalog: &MealCatalog, category: &str, rng: &mut R) -> Suggestion {
    match catalog.options(category).choose(rng) {
        Some(option) => Suggestion::Pick(option.clone()),
        None => Suggestion::Empty,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPick {
    pub category: String,
    pub option: Suggestion,
}

/// One suggestion per category for a given day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyMenu {
    pub date: NaiveDate,
    pub picks: Vec<CategoryPick>,
}

pub fn daily_menu<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    categories: &[String],
    date: NaiveDate,
    rng: &mut R,
) -> DailyMenu {
    let picks = categories
        .iter()
        .map(|category| CategoryPick {
            category: category.clone(),
            option: suggest(catalog, category, rng),
        })
        .collect();
    DailyMenu { date, picks }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
