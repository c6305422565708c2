use runsheet::cli::LogLevel;
use runsheet::logging::resolve_level;
use runsheet::types::TaskStatus;

#[test]
fn task_status_parses_case_insensitively() {
    assert_eq!(" Ongoing ".parse::<TaskStatus>(), Ok(TaskStatus::Ongoing));
    assert_eq!("DONE".parse::<TaskStatus>(), Ok(TaskStatus::Done));
    assert!("paused".parse::<TaskStatus>().is_err());
    assert_eq!(TaskStatus::default(), TaskStatus::Idle);
    assert_eq!(TaskStatus::Idle.to_string(), "idle");
}

#[test]
fn cli_level_beats_env_value() {
    assert_eq!(
        resolve_level(Some(LogLevel::Trace), Some("error")),
        tracing::Level::TRACE
    );
}

#[test]
fn env_value_is_used_when_no_flag() {
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("bogus")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
