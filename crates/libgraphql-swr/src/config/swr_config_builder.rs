use crate::config::ConfigError;
use crate::config::PatternSetting;
use crate::config::RawSwrConfig;
use crate::config::SwrConfig;

/// Chained construction of a [`SwrConfig`]. Validation happens in
/// [`SwrConfigBuilder::build()`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwrConfigBuilder {
    raw: RawSwrConfig,
}
impl SwrConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn autogen_key(mut self, value: bool) -> Self {
        self.raw.autogen_key = value;
        self
    }

    pub fn exclude_queries(mut self, patterns: impl Into<PatternSetting>) -> Self {
        self.raw.exclude_queries = Some(patterns.into());
        self
    }

    pub fn infinite_queries(mut self, patterns: impl Into<PatternSetting>) -> Self {
        self.raw.infinite_queries = Some(patterns.into());
        self
    }

    pub fn raw_response(mut self, value: bool) -> Self {
        self.raw.raw_response = value;
        self
    }

    pub fn types_prefix(mut self, value: impl Into<String>) -> Self {
        self.raw.types_prefix = value.into();
        self
    }

    pub fn types_suffix(mut self, value: impl Into<String>) -> Self {
        self.raw.types_suffix = value.into();
        self
    }

    pub fn use_type_imports(mut self, value: bool) -> Self {
        self.raw.use_type_imports = value;
        self
    }

    pub fn build(self) -> Result<SwrConfig, ConfigError> {
        SwrConfig::from_raw(self.raw)
    }
}
