pub mod icon;
pub mod style;

pub use icon::*;
pub use style::*;
