pub mod sample;
pub mod traits;

pub use sample::SampleCatalog;
pub use traits::ListingSource;
