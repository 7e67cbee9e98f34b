mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(cli.verbose, std::env::var(LOG_LEVEL_ENV_VAR).ok());

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.report(),
        None => match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )).report(),
        },
    }
}

/// Install the stderr subscriber. `--verbose` wins over `LOG_LEVEL`; an
/// unrecognized `LOG_LEVEL` falls back to the default and is warned about
/// once logging is up.
fn setup_logger(verbose: bool, env_level: Option<String>) {
    let env_level = env_level.as_deref().map(str::trim);
    let (log_level, rejected_env_level) =
        match (verbose, env_level) {
            (true, _) => (tracing::Level::DEBUG, None),
            (false, None) => (DEFAULT_LOG_LEVEL, None),
            (false, Some(value)) => match parse_log_level(value) {
                Some(level) => (level, None),
                None => (DEFAULT_LOG_LEVEL, Some(value)),
            },
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = rejected_env_level {
        log::warn!(
            "Ignoring invalid `{LOG_LEVEL_ENV_VAR}` value `{value}`; logging \
            at `{log_level}` instead."
        );
    }
}

/// Accepts the `tracing` level names in any case, plus `verbose` as an
/// alias of `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn log_level_names() {
        assert_eq!(parse_log_level("trace"), Some(tracing::Level::TRACE));
        assert_eq!(parse_log_level("DEBUG"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("Warn"), Some(tracing::Level::WARN));
        assert_eq!(parse_log_level("verbose"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("loud"), None);
    }
}
