pub mod catalog;
pub mod suggest;
