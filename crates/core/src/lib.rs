pub mod asset;
pub mod cache;
pub mod engine;
pub mod features;
pub mod logging;
pub mod markup;
pub mod naming;

pub use engine::IconEngine;
pub use heroscope_api::{IconError, Result};
