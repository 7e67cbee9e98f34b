mod config_error;
mod pattern_setting;
mod raw_swr_config;
mod swr_config;
mod swr_config_builder;

pub use config_error::ConfigError;
pub use pattern_setting::PatternSetting;
pub use raw_swr_config::RawSwrConfig;
pub use swr_config::SwrConfig;
pub use swr_config_builder::SwrConfigBuilder;
