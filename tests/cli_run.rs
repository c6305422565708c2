use std::path::PathBuf;

use clap::Parser;
use runsheet::cli::{CliArgs, OutputFormat};
use runsheet::config::load_and_validate;
use runsheet::run;
use runsheet::sheet::plan_sheets;

fn demo_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/Runsheet.toml")
}

#[test]
fn cli_defaults() {
    let args = CliArgs::try_parse_from(["runsheet"]).unwrap();
    assert_eq!(args.config, PathBuf::from("Runsheet.toml"));
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.sheet.is_none());
    assert!(!args.dry_run);
}

#[test]
fn cli_parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "runsheet",
        "--config",
        "sheets.toml",
        "--sheet",
        "ops",
        "--format",
        "text",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config, PathBuf::from("sheets.toml"));
    assert_eq!(args.sheet.as_deref(), Some("ops"));
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.log_level.is_some());
    assert!(args.dry_run);
}

#[tokio::test]
async fn demo_sheets_plan_as_documented() {
    let cfg = load_and_validate(demo_config()).unwrap();
    let planned = plan_sheets(cfg.into_sheets()).await;

    let broken = &planned[0];
    assert_eq!(broken.sheet.id, "broken");
    assert!(broken.error().is_some());

    let release = planned[1].schedule().expect("release sheet plans");
    assert_eq!(release.start_of("freeze"), Some(0));
    assert_eq!(release.start_of("build"), Some(2));
    assert_eq!(release.start_of("changelog"), Some(2));
    assert_eq!(release.start_of("announce"), Some(4));
}

#[tokio::test]
async fn unknown_sheet_selection_fails_the_run() {
    let config = demo_config();
    let args = CliArgs::try_parse_from([
        "runsheet",
        "--config",
        config.to_str().unwrap(),
        "--sheet",
        "does-not-exist",
    ])
    .unwrap();

    let err = run(args).await.unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[tokio::test]
async fn dry_run_succeeds_without_scheduling() {
    let config = demo_config();
    let args = CliArgs::try_parse_from([
        "runsheet",
        "--config",
        config.to_str().unwrap(),
        "--dry-run",
    ])
    .unwrap();

    run(args).await.unwrap();
}
