pub mod file_config;

pub use file_config::FileConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::model::Authority;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bumpsync")]
#[command(about = "Bump the project version in pom.xml and helm/Chart.yaml together")]
pub struct CliConfig {
    /// Project root holding the descriptors
    #[arg(long, default_value = ".")]
    pub project_root: String,

    /// Maven descriptor, relative to the project root
    #[arg(long, default_value = "pom.xml")]
    pub pom_path: String,

    /// Helm chart descriptor, relative to the project root
    #[arg(long, default_value = "helm/Chart.yaml")]
    pub chart_path: String,

    /// Which descriptor holds the authoritative current version
    #[arg(long, value_enum, default_value = "primary")]
    pub authority: Authority,

    /// Compute and report the bump without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Read settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn project_root(&self) -> &str {
        &self.project_root
    }

    fn pom_path(&self) -> &str {
        &self.pom_path
    }

    fn chart_path(&self) -> &str {
        &self.chart_path
    }

    fn authority(&self) -> Authority {
        self.authority
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project-root", &self.project_root)?;
        validation::validate_relative_path("pom-path", &self.pom_path)?;
        validation::validate_relative_path("chart-path", &self.chart_path)?;
        Ok(())
    }
}
