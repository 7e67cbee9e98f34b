use crate::config::ConfigError;
use crate::config::PatternSetting;
use crate::config::RawSwrConfig;
use crate::config::SwrConfigBuilder;
use crate::file_reader;
use crate::PatternSet;
use std::path::Path;

type Result<T> = std::result::Result<T, ConfigError>;

/// The validated, immutable configuration for one generation run.
///
/// Every decision the emitter makes is a pure predicate over this value, so
/// two runs over the same operations and the same [`SwrConfig`] produce the
/// same output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwrConfig {
    autogen_key: bool,
    exclude_queries: PatternSet,
    infinite_queries: PatternSet,
    raw_response: bool,
    types_prefix: String,
    types_suffix: String,
    use_type_imports: bool,
}
impl SwrConfig {
    pub fn builder() -> SwrConfigBuilder {
        SwrConfigBuilder::new()
    }

    /// Validate a [`RawSwrConfig`].
    pub fn from_raw(raw: RawSwrConfig) -> Result<Self> {
        validate_type_affix("typesPrefix", &raw.types_prefix)?;
        validate_type_affix("typesSuffix", &raw.types_suffix)?;

        Ok(Self {
            autogen_key: raw.autogen_key,
            exclude_queries: compile_patterns("excludeQueries", raw.exclude_queries)?,
            infinite_queries: compile_patterns("infiniteQueries", raw.infinite_queries)?,
            raw_response: raw.raw_response,
            types_prefix: raw.types_prefix,
            types_suffix: raw.types_suffix,
            use_type_imports: raw.use_type_imports,
        })
    }

    /// Parse and validate a YAML option block.
    pub fn from_yaml_str(content: impl AsRef<str>) -> Result<Self> {
        let content = content.as_ref();
        let raw: RawSwrConfig =
            if content.trim().is_empty() {
                RawSwrConfig::default()
            } else {
                serde_yaml::from_str(content)?
            };
        Self::from_raw(raw)
    }

    /// Parse and validate the YAML option block stored at `file_path`.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let content = file_reader::read_content(file_path)?;
        Self::from_yaml_str(content)
    }

    pub fn autogen_key(&self) -> bool {
        self.autogen_key
    }

    /// Whether any exclusion patterns are configured.
    pub fn exclusion_enabled(&self) -> bool {
        !self.exclude_queries.is_empty()
    }

    /// Whether the query named `name` is excluded from hook emission.
    pub fn excludes_query(&self, name: &str) -> bool {
        self.exclude_queries.is_match(name)
    }

    pub fn exclude_queries(&self) -> &PatternSet {
        &self.exclude_queries
    }

    /// Whether paginated hooks are enabled at all, i.e. whether any
    /// `infiniteQueries` patterns are configured.
    pub fn infinite_enabled(&self) -> bool {
        !self.infinite_queries.is_empty()
    }

    pub fn infinite_queries(&self) -> &PatternSet {
        &self.infinite_queries
    }

    /// Whether the query named `name` additionally gets a paginated hook.
    pub fn wants_infinite(&self, name: &str) -> bool {
        self.infinite_queries.is_match(name)
    }

    pub fn raw_response(&self) -> bool {
        self.raw_response
    }

    pub fn types_prefix(&self) -> &str {
        self.types_prefix.as_str()
    }

    pub fn types_suffix(&self) -> &str {
        self.types_suffix.as_str()
    }

    pub fn use_type_imports(&self) -> bool {
        self.use_type_imports
    }

    /// Wrap a synthesized type name in the configured prefix and suffix.
    pub fn affixed_type_name(&self, base: &str) -> String {
        format!("{}{base}{}", self.types_prefix, self.types_suffix)
    }
}

fn compile_patterns(
    option: &'static str,
    setting: Option<PatternSetting>,
) -> Result<PatternSet> {
    let Some(setting) = setting else {
        return Ok(PatternSet::empty());
    };
    PatternSet::new(setting.into_patterns())
        .map_err(|e| ConfigError::InvalidPattern {
            option,
            pattern: e.pattern,
            err: e.err,
        })
}

fn validate_type_affix(option: &'static str, value: &str) -> Result<()> {
    let is_identifier_part = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
    if value.chars().all(is_identifier_part) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTypeAffix {
            option,
            value: value.to_string(),
        })
    }
}
