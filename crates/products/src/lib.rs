//! Product catalog records: products and their categories.

pub mod category;
pub mod product;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput};
