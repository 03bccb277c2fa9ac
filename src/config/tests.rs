use super::{apply_config, load_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{OutputFormat, VolleyArgs};
use crate::error::{AppError, AppResult, ConfigError};

fn args_from(argv: &[&str]) -> AppResult<(VolleyArgs, clap::ArgMatches)> {
    let matches = VolleyArgs::command().try_get_matches_from(argv)?;
    let args = VolleyArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("volley.toml");
    let content = r#"
url = "http://localhost:8025/"
requests_per_cycle = 50
cycles = 4
timeout = "750ms"
connect_timeout = 2
output_format = "json"
per_cycle = true
"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.url.as_deref() != Some("http://localhost:8025/") {
        return Err(AppError::config("Unexpected url"));
    }
    if config.concurrency != Some(50) {
        return Err(AppError::config("requests_per_cycle should fill concurrency"));
    }
    if config.cycles != Some(4) {
        return Err(AppError::config("Unexpected cycles"));
    }
    let timeout = match config.timeout.as_ref() {
        Some(value) => value.to_duration("timeout")?,
        None => return Err(AppError::config("Expected timeout")),
    };
    if timeout != Duration::from_millis(750) {
        return Err(AppError::config(format!("Unexpected timeout: {:?}", timeout)));
    }
    let connect = match config.connect_timeout.as_ref() {
        Some(value) => value.to_duration("connect_timeout")?,
        None => return Err(AppError::config("Expected connect_timeout")),
    };
    if connect != Duration::from_secs(2) {
        return Err(AppError::config("Bare integers are seconds"));
    }
    if !matches!(config.output_format, Some(OutputFormat::Json)) {
        return Err(AppError::config("Unexpected output_format"));
    }
    if config.per_cycle != Some(true) {
        return Err(AppError::config("Unexpected per_cycle"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("volley.json");
    let content = r#"{
  "url": "https://example.com/",
  "concurrency": 8,
  "cycles": 2,
  "output": "run.json",
  "no_progress": true
}"#;
    std::fs::write(&path, content)?;

    let config = load_config(path.to_str())?;
    let config = match config {
        Some(config) => config,
        None => return Err(AppError::config("Expected a config")),
    };
    if config.concurrency != Some(8) || config.cycles != Some(2) {
        return Err(AppError::config("Unexpected run shape"));
    }
    if config.output.as_deref() != Some("run.json") || config.no_progress != Some(true) {
        return Err(AppError::config("Unexpected output settings"));
    }
    Ok(())
}

#[test]
fn unknown_fields_and_extensions_are_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    let typo = dir.path().join("volley.toml");
    std::fs::write(&typo, "concurency = 4\n")?;
    if load_config_file(&typo).is_ok() {
        return Err(AppError::config("Unknown keys must be rejected"));
    }

    let yaml = dir.path().join("volley.yaml");
    std::fs::write(&yaml, "cycles: 3\n")?;
    match load_config_file(&yaml) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => {}
        Err(err) => return Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => return Err(AppError::config("Expected yaml to be rejected")),
    }

    let bare = dir.path().join("volley");
    std::fs::write(&bare, "cycles = 3\n")?;
    if !matches!(
        load_config_file(&bare),
        Err(AppError::Config(ConfigError::MissingExtension))
    ) {
        return Err(AppError::config("Expected MissingExtension"));
    }
    Ok(())
}

#[test]
fn missing_config_file_reports_path() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("absent.toml");
    match load_config(path.to_str()) {
        Err(AppError::Config(ConfigError::ReadConfig { path: reported, .. })) if reported == path => {
            Ok(())
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected a read failure")),
    }
}

#[test]
fn apply_config_fills_unset_values() -> AppResult<()> {
    let config = ConfigFile {
        url: Some("http://localhost:8025/".to_owned()),
        concurrency: Some(64),
        cycles: Some(3),
        output: Some("out.json".to_owned()),
        output_format: Some(OutputFormat::Json),
        per_cycle: Some(true),
        no_progress: Some(true),
        verbose: Some(true),
        ..ConfigFile::default()
    };
    let (mut args, matches) = args_from(&["volley"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://localhost:8025/") {
        return Err(AppError::config("Unexpected url"));
    }
    if args.concurrency.get() != 64 || args.cycles.get() != 3 {
        return Err(AppError::config("Unexpected run shape"));
    }
    if args.output.as_deref() != Some("out.json")
        || !matches!(args.output_format, OutputFormat::Json)
    {
        return Err(AppError::config("Unexpected output settings"));
    }
    if !args.per_cycle || !args.no_progress || !args.verbose {
        return Err(AppError::config("Flags should come from config"));
    }
    Ok(())
}

#[test]
fn cli_values_override_config() -> AppResult<()> {
    let config = ConfigFile {
        url: Some("http://config.invalid/".to_owned()),
        concurrency: Some(64),
        cycles: Some(3),
        ..ConfigFile::default()
    };
    let (mut args, matches) = args_from(&["volley", "-u", "http://cli.invalid/", "-n", "9"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://cli.invalid/") {
        return Err(AppError::config("CLI url should win"));
    }
    if args.cycles.get() != 9 {
        return Err(AppError::config("CLI cycles should win"));
    }
    if args.concurrency.get() != 64 {
        return Err(AppError::config("Config concurrency should apply"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_values() -> AppResult<()> {
    let (mut args, matches) = args_from(&["volley"])?;
    let zero_cycles = ConfigFile {
        cycles: Some(0),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &zero_cycles) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. }))
            if field == "cycles" => {}
        Err(err) => return Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => return Err(AppError::config("Zero cycles must be rejected")),
    }

    let zero_width = ConfigFile {
        concurrency: Some(0),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &zero_width).is_ok() {
        return Err(AppError::config("Zero concurrency must be rejected"));
    }
    Ok(())
}
