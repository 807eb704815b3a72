use crate::core::{chart, pom};
use crate::domain::model::{
    Authority, BumpOutcome, BumpPlan, ChartSource, PomSource, Version, VersionOrigin,
    VersionSource,
};
use crate::domain::ports::{ConfigProvider, Pipeline, RefreshNotifier};
use crate::utils::error::{BumpError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the two project descriptors on the same version: reads the
/// current version from the authoritative one, increments it, and writes
/// the result back into both.
pub struct Synchronizer<C: ConfigProvider, N: RefreshNotifier> {
    config: C,
    notifier: N,
}

impl<C: ConfigProvider, N: RefreshNotifier> Synchronizer<C, N> {
    pub fn new(config: C, notifier: N) -> Self {
        Self { config, notifier }
    }

    fn pom_path(&self) -> PathBuf {
        Path::new(self.config.project_root()).join(self.config.pom_path())
    }

    fn chart_path(&self) -> PathBuf {
        Path::new(self.config.project_root()).join(self.config.chart_path())
    }

    fn read_pom(&self) -> Result<Option<PomSource>> {
        let path = self.pom_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let (slot, current) = pom::resolve_version(&content, &path)?;
        tracing::debug!("Resolved {} to version {} ({:?})", path.display(), current, slot);

        Ok(Some(PomSource {
            path,
            content,
            slot,
            current,
        }))
    }

    fn read_chart(&self) -> Result<Option<ChartSource>> {
        let path = self.chart_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(ChartSource { path, content }))
    }

    /// Write the primary descriptor at the new version. Returns whether the
    /// file changed (or would change, on a dry run).
    fn apply_pom(&self, source: Option<&PomSource>, next: &str) -> Result<bool> {
        let Some(pom_source) = source else {
            tracing::info!("{} does not exist, skipped", self.pom_path().display());
            return Ok(false);
        };

        let updated = pom::with_version(
            &pom_source.content,
            &pom_source.slot,
            next,
            &pom_source.path,
        )?;
        if updated == pom_source.content {
            tracing::debug!("{} already at {}", pom_source.path.display(), next);
            return Ok(false);
        }

        if self.config.dry_run() {
            tracing::info!("Dry run: would rewrite {}", pom_source.path.display());
        } else {
            fs::write(&pom_source.path, updated)?;
            self.notifier.notify_changed(&pom_source.path);
        }
        Ok(true)
    }

    /// Write the secondary descriptor at the new version. Same change
    /// semantics as [`Self::apply_pom`].
    fn apply_chart(&self, source: Option<&ChartSource>, next: &str) -> Result<bool> {
        let Some(chart_source) = source else {
            tracing::info!(
                "{} not found, skipped version sync",
                self.chart_path().display()
            );
            return Ok(false);
        };

        let updated = chart::with_version(&chart_source.content, next);
        if updated == chart_source.content {
            tracing::debug!("{} already at {}", chart_source.path.display(), next);
            return Ok(false);
        }

        if self.config.dry_run() {
            tracing::info!("Dry run: would rewrite {}", chart_source.path.display());
        } else {
            fs::write(&chart_source.path, updated)?;
            self.notifier.notify_changed(&chart_source.path);
        }
        Ok(true)
    }
}

impl<C: ConfigProvider, N: RefreshNotifier> Pipeline for Synchronizer<C, N> {
    fn extract(&self) -> Result<Option<VersionSource>> {
        // A broken pom aborts the whole run in either direction, before
        // anything has been written.
        let pom_source = self.read_pom()?;
        let chart_source = self.read_chart()?;

        match self.config.authority() {
            Authority::Primary => {
                let Some(pom_source) = pom_source else {
                    tracing::info!("{} does not exist, nothing to bump", self.pom_path().display());
                    return Ok(None);
                };

                Ok(Some(VersionSource {
                    current: pom_source.current.clone(),
                    origin: VersionOrigin::Primary,
                    pom: Some(pom_source),
                    chart: chart_source,
                }))
            }
            Authority::Secondary => {
                let Some(chart_source) = chart_source else {
                    tracing::info!("{} does not exist, nothing to bump", self.chart_path().display());
                    return Ok(None);
                };

                let current = chart::current_version(&chart_source.content).ok_or_else(|| {
                    BumpError::MissingVersionLine {
                        path: chart_source.path.display().to_string(),
                    }
                })?;

                Ok(Some(VersionSource {
                    current,
                    origin: VersionOrigin::Secondary,
                    pom: pom_source,
                    chart: Some(chart_source),
                }))
            }
        }
    }

    fn transform(&self, source: VersionSource) -> Result<BumpPlan> {
        let previous: Version = source.current.parse()?;
        let next = previous.bumped();
        tracing::debug!("Increment {} -> {}", previous, next);

        Ok(BumpPlan {
            previous,
            next,
            source,
        })
    }

    fn load(&self, plan: BumpPlan) -> Result<BumpOutcome> {
        let next = plan.next.to_string();

        // The authoritative descriptor is written first, so a failure
        // mid-way never leaves the follower ahead of the source of truth.
        let (primary_updated, secondary_updated) = match plan.source.origin {
            VersionOrigin::Primary => {
                let primary = self.apply_pom(plan.source.pom.as_ref(), &next)?;
                let secondary = self.apply_chart(plan.source.chart.as_ref(), &next)?;
                (primary, secondary)
            }
            VersionOrigin::Secondary => {
                let secondary = self.apply_chart(plan.source.chart.as_ref(), &next)?;
                let primary = self.apply_pom(plan.source.pom.as_ref(), &next)?;
                (primary, secondary)
            }
        };

        Ok(BumpOutcome {
            previous: plan.previous.to_string(),
            next,
            primary_updated,
            secondary_updated,
            dry_run: self.config.dry_run(),
        })
    }
}
