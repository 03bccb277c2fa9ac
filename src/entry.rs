use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use url::Url;

use crate::app::run_local;
use crate::args::{DEFAULT_CONFIG_FILES, VolleyArgs, validate_target_url};
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    merge_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let target_url = resolve_target_url(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(run_local(&args, &target_url))?;
    Ok(())
}

fn parse_args() -> AppResult<Option<(VolleyArgs, ArgMatches)>> {
    let mut cmd = VolleyArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = VolleyArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn merge_config(args: &mut VolleyArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn resolve_target_url(args: &VolleyArgs) -> AppResult<Url> {
    let Some(raw) = args.url.as_deref() else {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };
    validate_target_url(raw).map_err(|err| {
        tracing::error!("Invalid target URL '{}': {}", raw, err);
        AppError::validation(err)
    })
}
