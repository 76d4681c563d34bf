pub mod memory;
pub mod sample;
pub mod traits;

pub use memory::StaticCatalog;
pub use traits::CatalogSource;
