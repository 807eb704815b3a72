use crate::domain::model::{Authority, BumpOutcome, BumpPlan, VersionSource};
use crate::utils::error::Result;
use std::path::Path;

/// Read side of the configuration, regardless of where it came from.
pub trait ConfigProvider {
    fn project_root(&self) -> &str;
    fn pom_path(&self) -> &str;
    fn chart_path(&self) -> &str;
    fn authority(&self) -> Authority;
    fn dry_run(&self) -> bool;
}

/// Hand-off for files rewritten on disk. The original host marked files
/// dirty and triggered an editor refresh; embedders plug in whatever their
/// host needs, the CLI just logs.
pub trait RefreshNotifier {
    fn notify_changed(&self, path: &Path);
}

pub trait Pipeline {
    /// Locate the descriptors and resolve the current version. `None` means
    /// the authoritative descriptor is absent and there is nothing to do.
    fn extract(&self) -> Result<Option<VersionSource>>;
    fn transform(&self, source: VersionSource) -> Result<BumpPlan>;
    fn load(&self, plan: BumpPlan) -> Result<BumpOutcome>;
}
