pub mod animation;
pub mod error;
pub mod git;
pub mod reel;

pub use animation::*;
pub use error::{Error, Result};
pub use reel::*;
