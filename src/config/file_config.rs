use crate::domain::model::Authority;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BumpError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings loaded from a TOML file, the alternative to CLI flags for
/// scripted or repeated use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub project: ProjectConfig,
    pub descriptors: Option<DescriptorConfig>,
    pub sync: Option<SyncConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorConfig {
    pub pom: Option<String>,
    pub chart: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub authority: Option<Authority>,
    pub dry_run: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BumpError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| BumpError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR}` references with environment values. Unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn pom_path(&self) -> &str {
        self.descriptors
            .as_ref()
            .and_then(|d| d.pom.as_deref())
            .unwrap_or("pom.xml")
    }

    pub fn chart_path(&self) -> &str {
        self.descriptors
            .as_ref()
            .and_then(|d| d.chart.as_deref())
            .unwrap_or("helm/Chart.yaml")
    }

    pub fn authority(&self) -> Authority {
        self.sync
            .as_ref()
            .and_then(|s| s.authority)
            .unwrap_or_default()
    }

    pub fn dry_run(&self) -> bool {
        self.sync.as_ref().and_then(|s| s.dry_run).unwrap_or(false)
    }
}

impl ConfigProvider for FileConfig {
    fn project_root(&self) -> &str {
        &self.project.root
    }

    fn pom_path(&self) -> &str {
        self.pom_path()
    }

    fn chart_path(&self) -> &str {
        self.chart_path()
    }

    fn authority(&self) -> Authority {
        self.authority()
    }

    fn dry_run(&self) -> bool {
        self.dry_run()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project.root", &self.project.root)?;
        validation::validate_relative_path("descriptors.pom", self.pom_path())?;
        validation::validate_relative_path("descriptors.chart", self.chart_path())?;
        Ok(())
    }
}
