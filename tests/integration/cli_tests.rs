use clap::Parser;
use dupsweep::cli::Cli;
use dupsweep::error::ExitCode;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_run_app_success() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.wav")).unwrap();
    File::create(dir.path().join("a 2.wav")).unwrap();

    let cli = Cli::try_parse_from(["dupsweep", dir.path().to_str().unwrap()]).unwrap();
    let result = dupsweep::run_app(cli).unwrap();

    assert_eq!(result, ExitCode::Success);
    assert!(!dir.path().join("a 2.wav").exists());
}

#[test]
fn test_run_app_nothing_to_do_is_success() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("only.wav")).unwrap();

    let cli = Cli::try_parse_from(["dupsweep", dir.path().to_str().unwrap()]).unwrap();
    assert_eq!(dupsweep::run_app(cli).unwrap(), ExitCode::Success);
}

#[test]
fn test_run_app_with_strict_and_follow_symlinks() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.wav")).unwrap();
    File::create(dir.path().join("a 2.wav")).unwrap();

    let cli = Cli::try_parse_from([
        "dupsweep",
        "--strict",
        "--follow-symlinks",
        dir.path().to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(dupsweep::run_app(cli).unwrap(), ExitCode::Success);
    assert!(dir.path().join("a.wav").exists());
}
