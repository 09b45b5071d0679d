pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod picker;
pub mod store;

pub use catalog::MealCatalog;
pub use error::{MenuError, Result};
pub use picker::Suggestion;
pub use store::MealStore;
