pub mod brief;
pub mod case_study;
pub mod error;
pub mod generator;
pub mod identity;
pub mod matcher;
pub mod pitch;
pub mod store;
pub mod types;

pub use error::{PitchForgeError, Result};
