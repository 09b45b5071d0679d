use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("option must not be blank")]
    EmptyOption,

    #[error("'{option}' is already on the {category} list")]
    DuplicateOption { category: String, option: String },

    #[error("'{option}' is not on the {category} list")]
    OptionNotFound { category: String, option: String },

    #[error("catalog file is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl MenuError {
    /// True for caller-input rejections that leave the catalog untouched.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            MenuError::InvalidCategory(_)
                | MenuError::EmptyOption
                | MenuError::DuplicateOption { .. }
                | MenuError::OptionNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_declined() {
        assert!(MenuError::EmptyOption.is_declined());
        assert!(MenuError::InvalidCategory("brunch".into()).is_declined());
        assert!(MenuError::DuplicateOption {
            category: "lunch".into(),
            option: "Salad".into(),
        }
        .is_declined());
    }

    #[test]
    fn storage_errors_are_not_declined() {
        let err = MenuError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert!(!err.is_declined());
        assert!(err.to_string().starts_with("storage error"));
    }

    #[test]
    fn duplicate_message_names_option_and_category() {
        let err = MenuError::DuplicateOption {
            category: "lunch".into(),
            option: "Salad".into(),
        };
        assert_eq!(err.to_string(), "'Salad' is already on the lunch list");
    }
}
