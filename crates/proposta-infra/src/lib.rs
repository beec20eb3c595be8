//! Infrastructure layer - catalog loaders and embedded catalogs

pub mod catalog_loader;

pub use catalog_loader::{builtin_catalog, builtin_catalog_names, load_catalog_from_file, load_catalog_from_str};
