pub mod chart;
pub mod engine;
pub mod pom;
pub mod synchronizer;
pub mod version;

pub use crate::domain::model::{BumpOutcome, BumpPlan, Version, VersionSource};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RefreshNotifier};
pub use crate::utils::error::Result;
