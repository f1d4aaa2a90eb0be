use super::helpers::{stderr, stdout, TestProject};

#[test]
fn test_with_preconfigured_project() {
    let project = TestProject::compliant();

    // Relocate the reports and point at them from Cargo.toml
    project.write(
        "Cargo.toml",
        r#"[workspace]
members = []

[workspace.metadata.legal-audit]
cargo_about = "out/legal/about.json"
go_licenses = "out/legal/go.csv"
strict = true
"#,
    );
    project.write("out/legal/about.json", r#"{"crates": [{"license": "MIT"}]}"#);
    project.write(
        "out/legal/go.csv",
        "golang.org/x/sys/unix,https://cs.opensource.google/go/x/sys/+/v0.15.0:LICENSE,BSD-3-Clause\n",
    );
    project.remove("target/legal/cargo-about.json");
    project.remove("target/legal/go-licenses.csv");

    let output = project.run_auditor(&["all"]);
    if !output.status.success() {
        eprintln!("STDOUT: {}", stdout(&output));
        eprintln!("STDERR: {}", stderr(&output));
    }
    assert!(output.status.success());

    let show = project.run_auditor(&["config", "--show"]);
    assert!(show.status.success());
    let resolved: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(resolved["cargo_about"], "out/legal/about.json");
    assert_eq!(resolved["license_map"], "docs/legal/license-files.toml");
    assert_eq!(resolved["strict"], true);
}

#[test]
fn test_invalid_configuration() {
    let project = TestProject::new();
    project.write("Cargo.toml", "[package.metadata.legal-audit]\nstrict = \"sometimes\"\n");

    let validate = project.run_auditor(&["config", "--validate"]);
    assert_eq!(validate.status.code(), Some(1));
    assert!(stderr(&validate).contains("Configuration validation failed"));

    let licenses = project.run_auditor(&["licenses"]);
    assert_eq!(licenses.status.code(), Some(1));
    assert!(stderr(&licenses).contains("[package.metadata.legal-audit]"));
}
