use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use svelte_scoped_preprocess::args::{Cli, Commands};

#[test]
fn test_cli_parse_preflights_defaults() {
    let cli = Cli::parse_from(["svelte-scoped-preprocess", "preflights"]);

    assert!(!cli.verbose);
    match cli.command {
        Commands::Preflights(args) => {
            assert!(!args.safelist);
            assert!(!args.no_preflights);
            assert!(args.validate().is_ok());
        }
        Commands::Scan(_) => panic!("Unexpected Scan command"),
    }
}

#[test]
fn test_cli_parse_preflights_with_flags() {
    let cli = Cli::parse_from([
        "svelte-scoped-preprocess",
        "--verbose",
        "preflights",
        "-c",
        "uno.config.yaml",
        "--safelist",
        "--no-preflights",
    ]);

    assert!(cli.verbose);
    match cli.command {
        Commands::Preflights(args) => {
            assert_eq!(args.config, Some(PathBuf::from("uno.config.yaml")));
            assert!(args.safelist);
            assert!(args.no_preflights);
            assert!(args.validate().is_ok());
        }
        Commands::Scan(_) => panic!("Unexpected Scan command"),
    }
}

#[test]
fn test_preflights_validation_rejects_empty_request() {
    let cli = Cli::parse_from(["svelte-scoped-preprocess", "preflights", "--no-preflights"]);
    match cli.command {
        Commands::Preflights(args) => {
            let err = args.validate().unwrap_err();
            assert!(err.contains("--safelist"));
        }
        Commands::Scan(_) => panic!("Unexpected Scan command"),
    }
}

#[test]
fn test_cli_parse_scan() {
    let cli = Cli::parse_from([
        "svelte-scoped-preprocess",
        "scan",
        "Button.css",
        "--preflights",
        "--apply-variable",
        "--uno",
        "--apply-variable",
        "--at-apply",
    ]);

    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.file, Some(PathBuf::from("Button.css")));
            assert!(args.preflights);
            assert!(!args.safelist);
            assert_eq!(args.apply_variables, vec!["--uno", "--at-apply"]);
        }
        Commands::Preflights(_) => panic!("Unexpected Preflights command"),
    }
}

#[test]
fn test_cli_scan_conflicting_apply_flags() {
    let result = Cli::try_parse_from([
        "svelte-scoped-preprocess",
        "scan",
        "--no-apply-variables",
        "--apply-variable",
        "--uno",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_scan_reports_apply_usage_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_svelte-scoped-preprocess"))
        .arg("scan")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b".btn { --at-apply: px-4 py-2; }")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["hasApply"], true);
    assert_eq!(report["hasThemeFn"], false);
    assert_eq!(report["changeNeeded"], true);
    assert_eq!(report["applyVariables"], serde_json::json!(["--at-apply"]));
}

#[test]
fn test_scan_plain_file_needs_no_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.css");
    std::fs::write(&path, "div { color: red; }").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_svelte-scoped-preprocess"))
        .arg("scan")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changeNeeded"], false);
}

#[test]
fn test_preflights_with_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("uno.config.yaml"), "presets: [unknown-preset]\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_svelte-scoped-preprocess"))
        .arg("preflights")
        .current_dir(dir.path())
        .env_remove("UNO_CONFIG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown-preset"), "stderr: {}", stderr);
}
