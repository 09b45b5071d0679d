use crate::error::{MenuError, Result};
use crate::paths::validate_category_name;

pub const BREAKFAST: &str = "breakfast";
pub const LUNCH: &str = "lunch";
pub const DINNER: &str = "dinner";

pub fn default_categories() -> Vec<String> {
    vec![BREAKFAST.to_string(), LUNCH.to_string(), DINNER.to_string()]
}

/// Which category names a store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// Only these names; every one of them always exists in a loaded catalog.
    Fixed(Vec<String>),
    /// Any well-formed name; adding to an unknown category creates it.
    Open,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        CategoryPolicy::Fixed(default_categories())
    }
}

impl CategoryPolicy {
    pub fn check(&self, category: &str) -> Result<()> {
        match self {
            CategoryPolicy::Fixed(names) => {
                if names.iter().any(|n| n == category) {
                    Ok(())
                } else {
                    Err(MenuError::InvalidCategory(category.to_string()))
                }
            }
            CategoryPolicy::Open => validate_category_name(category),
        }
    }

    /// Names a loaded catalog must contain, possibly as empty lists.
    pub fn required(&self) -> &[String] {
        match self {
            CategoryPolicy::Fixed(names) => names,
            CategoryPolicy::Open => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_policy_rejects_unknown() {
        let policy = CategoryPolicy::default();
        assert!(policy.check("lunch").is_ok());
        assert!(matches!(
            policy.check("brunch"),
            Err(MenuError::InvalidCategory(c)) if c == "brunch"
        ));
    }

    #[test]
    fn open_policy_accepts_any_slug() {
        let policy = CategoryPolicy::Open;
        assert!(policy.check("brunch").is_ok());
        assert!(policy.check("late-snack").is_ok());
        assert!(policy.check("Not Valid").is_err());
        assert!(policy.required().is_empty());
    }

    #[test]
    fn default_policy_requires_three_meals() {
        assert_eq!(
            CategoryPolicy::default().required(),
            ["breakfast", "lunch", "dinner"]
        );
    }
}
