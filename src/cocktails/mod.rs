pub mod catalog;
pub mod selector;

pub use selector::*;
