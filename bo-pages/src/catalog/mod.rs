//! Catalog pages

pub mod product_form;
pub mod products;

pub use product_form::ProductFormPage;
pub use products::ProductsPage;
