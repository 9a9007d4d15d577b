//! Query features built on top of the asset index.

pub mod format;
pub mod listing;
pub mod retrieval;
pub mod search;

pub use format::{format_list_text, format_search_text};
pub use listing::list_all;
pub use retrieval::retrieve;
pub use search::{score_match, search};
