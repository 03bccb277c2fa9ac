use super::parsers::{parse_bool_env, parse_duration};
use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use std::time::Duration;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["volley", "-u", "http://localhost:8025/"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (
            args.url.as_deref() == Some("http://localhost:8025/"),
            "Unexpected url",
        ),
        (args.concurrency.get() == 200, "Unexpected concurrency"),
        (args.cycles.get() == 30, "Unexpected cycles"),
        (
            args.request_timeout.is_none(),
            "Expected request_timeout to be None",
        ),
        (
            args.connect_timeout.is_none(),
            "Expected connect_timeout to be None",
        ),
        (args.output.is_none(), "Expected output to be None"),
        (
            matches!(args.output_format, OutputFormat::Text),
            "Expected OutputFormat::Text",
        ),
        (!args.per_cycle, "Expected per_cycle to be false"),
        (!args.no_progress, "Expected no_progress to be false"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
        (!args.verbose, "Expected verbose to be false"),
        (args.config.is_none(), "Expected config to be None"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_run_shape() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "--url",
        "https://example.com/api",
        "-c",
        "16",
        "-n",
        "4",
        "--timeout",
        "750ms",
        "--connect-timeout",
        "2s",
        "--output",
        "report.json",
        "--output-format",
        "json",
        "--per-cycle",
        "--no-progress",
    ])?;

    if args.concurrency.get() != 16 {
        return Err(AppError::validation("Unexpected concurrency"));
    }
    if args.cycles.get() != 4 {
        return Err(AppError::validation("Unexpected cycles"));
    }
    if args.request_timeout != Some(Duration::from_millis(750)) {
        return Err(AppError::validation("Unexpected request_timeout"));
    }
    if args.connect_timeout != Some(Duration::from_secs(2)) {
        return Err(AppError::validation("Unexpected connect_timeout"));
    }
    if args.output.as_deref() != Some("report.json") {
        return Err(AppError::validation("Unexpected output"));
    }
    if !matches!(args.output_format, OutputFormat::Json) {
        return Err(AppError::validation("Expected OutputFormat::Json"));
    }
    if !args.per_cycle || !args.no_progress {
        return Err(AppError::validation("Expected per_cycle and no_progress"));
    }
    Ok(())
}

#[test]
fn parse_args_requests_per_cycle_alias() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "-u",
        "http://localhost",
        "--requests-per-cycle",
        "12",
    ])?;
    if args.concurrency.get() != 12 {
        return Err(AppError::validation("Alias should set concurrency"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_concurrency() -> AppResult<()> {
    if parse_test_args(["volley", "-u", "http://localhost", "-c", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero concurrency to fail"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_and_negative_cycles() -> AppResult<()> {
    if parse_test_args(["volley", "-u", "http://localhost", "-n", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero cycles to fail"));
    }
    if parse_test_args(["volley", "-u", "http://localhost", "-n", "-3"]).is_ok() {
        return Err(AppError::validation("Expected negative cycles to fail"));
    }
    if parse_test_args(["volley", "-u", "http://localhost", "-n", "many"]).is_ok() {
        return Err(AppError::validation("Expected non-numeric cycles to fail"));
    }
    Ok(())
}

#[test]
fn positive_types_round_trip_values() -> AppResult<()> {
    let width = PositiveUsize::try_from(5)?;
    if usize::from(width) != 5 {
        return Err(AppError::validation("Unexpected PositiveUsize value"));
    }
    let cycles: PositiveU64 = " 7 ".parse()?;
    if cycles.get() != 7 {
        return Err(AppError::validation("Unexpected PositiveU64 value"));
    }
    match PositiveU64::try_from(0) {
        Err(ValidationError::ValueTooSmall { min: 1 }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Zero must be rejected")),
    }
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_bad_input() -> AppResult<()> {
    let bad = ["", "ms", "0s", "10d", "-1s"];
    for input in bad {
        if parse_duration(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected '{}' to be rejected",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_bool_env_variants() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected {} to be true", value)));
        }
    }
    for value in ["0", "false", "No", "off"] {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected {} to be false", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected maybe to be rejected"));
    }
    Ok(())
}

#[test]
fn validate_target_url_accepts_http_and_https() -> AppResult<()> {
    let url = validate_target_url(" http://localhost:8025/ ")?;
    if url.host_str() != Some("localhost") || url.port() != Some(8025) {
        return Err(AppError::validation("Unexpected parsed URL"));
    }
    validate_target_url("https://example.com/health?full=1")?;
    Ok(())
}

#[test]
fn validate_target_url_rejects_bad_targets() -> AppResult<()> {
    if !matches!(validate_target_url("   "), Err(ValidationError::UrlEmpty)) {
        return Err(AppError::validation("Expected UrlEmpty"));
    }
    if !matches!(
        validate_target_url("not a url"),
        Err(ValidationError::InvalidUrl { .. })
    ) {
        return Err(AppError::validation("Expected InvalidUrl"));
    }
    if !matches!(
        validate_target_url("ftp://example.com/file"),
        Err(ValidationError::UnsupportedScheme { .. })
    ) {
        return Err(AppError::validation("Expected UnsupportedScheme"));
    }
    if validate_target_url("http://").is_ok() {
        return Err(AppError::validation("Expected a host-less URL to fail"));
    }
    Ok(())
}
