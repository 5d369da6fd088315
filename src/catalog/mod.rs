pub mod client;
pub mod types;

pub use client::{Catalog, CatalogError, HttpCatalog};
pub use types::{ImageLinks, Volume, VolumeInfo, VolumeList};
