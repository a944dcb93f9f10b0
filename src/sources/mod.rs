pub mod http;
pub mod memory;
pub mod traits;

pub use http::HttpListingSource;
pub use memory::{MemoryFavoriteStore, MemoryListingStore};
pub use traits::{FavoriteStore, ListingSource};
