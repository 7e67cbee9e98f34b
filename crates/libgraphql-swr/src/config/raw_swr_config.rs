use crate::config::PatternSetting;

/// The plugin's option block exactly as it appears in a configuration file.
///
/// Keys are camelCase. The option names used by the original JavaScript
/// plugin (`useSWRInfinite`, `autogenSWRKey`, `rawRequest`) are accepted as
/// aliases. Unrecognized keys are ignored. Validate into a
/// [`SwrConfig`](crate::config::SwrConfig) before emitting.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSwrConfig {
    /// Queries whose names match any of these patterns get no hooks.
    pub exclude_queries: Option<PatternSetting>,

    /// Queries whose names match any of these patterns additionally get a
    /// paginated `use<Name>Infinite` hook.
    #[serde(alias = "useSWRInfinite")]
    pub infinite_queries: Option<PatternSetting>,

    /// Derive cache keys from the operation name and variables instead of
    /// taking them from the caller.
    #[serde(alias = "autogenSWRKey")]
    pub autogen_key: bool,

    /// The wrapped accessors return the raw response envelope (status,
    /// headers, errors) instead of the bare result.
    #[serde(alias = "rawRequest")]
    pub raw_response: bool,

    pub types_prefix: String,

    pub types_suffix: String,

    /// Emit `import type` for imports that are only used as types.
    pub use_type_imports: bool,
}
