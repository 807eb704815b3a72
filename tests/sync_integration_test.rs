use bumpsync::{Authority, BumpEngine, BumpError, CliConfig, NullNotifier, Synchronizer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.example</groupId>
    <artifactId>demo</artifactId>
    <version>1.0.0</version>
    <properties>
        <java.version>17</java.version>
    </properties>
</project>
"#;

const CHART: &str = "apiVersion: v2\n\
name: demo\n\
description: A demo chart\n\
version: 1.0.0\n\
appVersion: 1.0.0\n";

fn write_project(root: &Path, pom: Option<&str>, chart: Option<&str>) {
    if let Some(pom) = pom {
        fs::write(root.join("pom.xml"), pom).unwrap();
    }
    if let Some(chart) = chart {
        fs::create_dir_all(root.join("helm")).unwrap();
        fs::write(root.join("helm/Chart.yaml"), chart).unwrap();
    }
}

fn config_for(root: &Path) -> CliConfig {
    CliConfig {
        project_root: root.to_str().unwrap().to_string(),
        pom_path: "pom.xml".to_string(),
        chart_path: "helm/Chart.yaml".to_string(),
        authority: Authority::Primary,
        dry_run: false,
        json: false,
        verbose: false,
        config: None,
    }
}

#[test]
fn bumps_both_descriptors_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), Some(POM), Some(CHART));

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let outcome = engine.run().unwrap().unwrap();

    assert_eq!(outcome.previous, "1.0.0");
    assert_eq!(outcome.next, "1.0.1");
    assert!(outcome.primary_updated);
    assert!(outcome.secondary_updated);

    let pom = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert_eq!(
        pom,
        POM.replace("<version>1.0.0</version>", "<version>1.0.1</version>")
    );

    // Chart lines keep their order; unrelated lines are untouched.
    let chart = fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap();
    assert_eq!(
        chart,
        "apiVersion: v2\n\
name: demo\n\
description: A demo chart\n\
version: 1.0.1\n\
appVersion: 1.0.1\n"
    );
}

#[test]
fn missing_chart_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), Some(POM), None);

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let outcome = engine.run().unwrap().unwrap();

    assert_eq!(outcome.next, "1.0.1");
    assert!(outcome.primary_updated);
    assert!(!outcome.secondary_updated);

    let pom = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert!(pom.contains("<version>1.0.1</version>"));
}

#[test]
fn missing_pom_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), None, Some(CHART));

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let outcome = engine.run().unwrap();

    assert!(outcome.is_none());

    // The chart must not have been touched.
    let chart = fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap();
    assert_eq!(chart, CHART);
}

#[test]
fn malformed_pom_aborts_without_touching_the_chart() {
    let temp_dir = TempDir::new().unwrap();
    let broken = "<project><version>1.0.0</project>";
    write_project(temp_dir.path(), Some(broken), Some(CHART));

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let err = engine.run().unwrap_err();
    assert!(matches!(err, BumpError::XmlError(_)));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap(),
        broken
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap(),
        CHART
    );
}

#[test]
fn invalid_version_aborts_without_touching_any_file() {
    let temp_dir = TempDir::new().unwrap();
    let pom = POM.replace("1.0.0", "1.0.0-SNAPSHOT");
    write_project(temp_dir.path(), Some(&pom), Some(CHART));

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let err = engine.run().unwrap_err();
    assert!(matches!(err, BumpError::InvalidVersionFormat { .. }));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap(),
        pom
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap(),
        CHART
    );
}

#[test]
fn missing_version_node_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let pom = "<project><artifactId>demo</artifactId></project>";
    write_project(temp_dir.path(), Some(pom), Some(CHART));

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let err = engine.run().unwrap_err();
    assert!(matches!(err, BumpError::MissingVersionNode { .. }));
}

#[test]
fn dry_run_reports_but_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), Some(POM), Some(CHART));

    let mut config = config_for(temp_dir.path());
    config.dry_run = true;

    let engine = BumpEngine::new(Synchronizer::new(config, NullNotifier));
    let outcome = engine.run().unwrap().unwrap();

    assert!(outcome.dry_run);
    assert_eq!(outcome.next, "1.0.1");
    assert!(outcome.primary_updated);
    assert!(outcome.secondary_updated);

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap(),
        POM
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap(),
        CHART
    );
}

#[test]
fn rollover_applies_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let pom = POM.replace("1.0.0", "1.2.100");
    write_project(temp_dir.path(), Some(&pom), None);

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let outcome = engine.run().unwrap().unwrap();

    assert_eq!(outcome.previous, "1.2.100");
    assert_eq!(outcome.next, "1.3.0");
}
