pub mod duration;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod ranking;
pub mod session;
pub mod youtube;

pub use error::{Error, Result};
pub use model::VideoSummary;
