pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::FileConfig;

pub use crate::adapters::{LogNotifier, NullNotifier};
pub use crate::core::{engine::BumpEngine, synchronizer::Synchronizer};
pub use crate::domain::model::{Authority, BumpOutcome, Version};
pub use crate::utils::error::{BumpError, Result};
