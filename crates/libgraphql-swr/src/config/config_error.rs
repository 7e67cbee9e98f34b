use crate::ReadContentError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    ConfigFileRead(#[from] ReadContentError),

    #[error("Invalid glob pattern `{pattern}` in `{option}`: {err}")]
    InvalidPattern {
        option: &'static str,
        pattern: String,
        err: globset::Error,
    },

    #[error(
        "`{option}` must only contain TypeScript identifier characters \
        (`A-Z`, `a-z`, `0-9`, `_`, `$`), found `{value}`"
    )]
    InvalidTypeAffix {
        option: &'static str,
        value: String,
    },

    #[error("Malformed configuration: {0}")]
    MalformedConfig(#[from] serde_yaml::Error),
}
