use crate::config::SwrConfig;
use crate::operation::Operation;

/// The settings that shape the hooks of one operation, resolved from a
/// [`SwrConfig`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HookEmitConfig {
    pub autogen_key: bool,
    /// Also emit the paginated variant.
    pub infinite: bool,
    pub raw_response: bool,
    pub types_prefix: String,
    pub types_suffix: String,
}
impl HookEmitConfig {
    pub fn for_operation(config: &SwrConfig, operation: &Operation) -> Self {
        Self {
            autogen_key: config.autogen_key(),
            infinite: config.infinite_enabled() && config.wants_infinite(operation.name()),
            raw_response: config.raw_response(),
            types_prefix: config.types_prefix().to_string(),
            types_suffix: config.types_suffix().to_string(),
        }
    }

    pub(super) fn affixed_type_name(&self, base: &str) -> String {
        format!("{}{base}{}", self.types_prefix, self.types_suffix)
    }
}
