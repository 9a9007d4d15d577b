pub mod icon_cache;

pub use icon_cache::{CacheStats, IconCache};
