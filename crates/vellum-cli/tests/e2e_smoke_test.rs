use std::fs;

use tempfile::tempdir;

use vellum_cli::{Args, run};

/// The files one full run is expected to produce, in confirmation order.
const EXPECTED_FILES: [&str; 3] = [
    "architecture_diagram.dot",
    "upload_flow_diagram.dot",
    "search_flow_diagram.dot",
];

fn args_for(output_dir: &std::path::Path) -> Args {
    Args {
        output_dir: Some(output_dir.to_string_lossy().to_string()),
        format: Some("dot".to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_renders_catalog() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args_for(temp_dir.path())).expect("Rendering the catalog failed");

    for file_name in EXPECTED_FILES {
        let path = temp_dir.path().join(file_name);
        assert!(path.is_file(), "missing output file {file_name}");

        let contents = fs::read_to_string(&path).expect("Output file is not readable");
        assert!(
            contents.contains("digraph"),
            "{file_name} does not contain a DOT graph"
        );
    }
}

#[test]
fn e2e_smoke_test_creates_missing_output_directory() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let nested = temp_dir.path().join("diagrams").join("generated");

    run(&args_for(&nested)).expect("Rendering into a fresh directory failed");

    for file_name in EXPECTED_FILES {
        assert!(nested.join(file_name).is_file(), "missing {file_name}");
    }
}

#[test]
fn e2e_smoke_test_rejects_unknown_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut args = args_for(temp_dir.path());
    args.format = Some("jpeg".to_string());

    let err = run(&args).expect_err("Unknown format should be rejected");
    assert!(err.to_string().contains("invalid output format"));
}

#[test]
fn e2e_smoke_test_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut args = args_for(temp_dir.path());
    args.config = Some(
        temp_dir
            .path()
            .join("no_such_config.toml")
            .to_string_lossy()
            .to_string(),
    );

    let err = run(&args).expect_err("Missing explicit config should be rejected");
    assert!(err.to_string().contains("Missing configuration file"));
}

#[test]
fn e2e_smoke_test_config_file_styles_the_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
        [style]
        fontsize = 12.0
        background_color = "lightyellow"
        "#,
    )
    .expect("Failed to write config file");

    let mut args = args_for(temp_dir.path());
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Rendering with a config file failed");

    let contents = fs::read_to_string(temp_dir.path().join("architecture_diagram.dot"))
        .expect("Output file is not readable");
    assert!(contents.contains("lightyellow"), "configured background missing");
    assert!(contents.contains("12"), "configured font size missing");
}
