use bumpsync::{Authority, BumpEngine, BumpError, CliConfig, NullNotifier, Synchronizer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INDIRECT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <artifactId>demo</artifactId>
    <version>${app.version}</version>
    <properties>
        <app.version>3.4.5</app.version>
        <java.version>17</java.version>
    </properties>
</project>
"#;

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
fn property_indirection_updates_the_property_node() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pom.xml"), INDIRECT_POM).unwrap();
    fs::create_dir_all(temp_dir.path().join("helm")).unwrap();
    fs::write(
        temp_dir.path().join("helm/Chart.yaml"),
        "version: 3.4.5\nappVersion: 3.4.5\n",
    )
    .unwrap();

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let outcome = engine.run().unwrap().unwrap();

    assert_eq!(outcome.previous, "3.4.5");
    assert_eq!(outcome.next, "3.4.6");

    let pom = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    // The indirection token stays; only the property value changes.
    assert!(pom.contains("<version>${app.version}</version>"));
    assert!(pom.contains("<app.version>3.4.6</app.version>"));
    assert!(pom.contains("<java.version>17</java.version>"));

    let chart = fs::read_to_string(temp_dir.path().join("helm/Chart.yaml")).unwrap();
    assert_eq!(chart, "version: 3.4.6\nappVersion: 3.4.6\n");
}

#[test]
fn unresolvable_indirection_aborts_without_writes() {
    let temp_dir = TempDir::new().unwrap();
    let pom = r#"<project>
    <version>${app.version}</version>
    <properties>
        <java.version>17</java.version>
    </properties>
</project>
"#;
    fs::write(temp_dir.path().join("pom.xml"), pom).unwrap();

    let engine = BumpEngine::new(Synchronizer::new(config_for(temp_dir.path()), NullNotifier));
    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        BumpError::UnresolvedProperty { ref name, .. } if name == "app.version"
    ));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap(),
        pom
    );
}
