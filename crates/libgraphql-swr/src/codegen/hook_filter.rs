use crate::config::SwrConfig;
use crate::operation::Operation;
use crate::operation::OperationKind;

/// The operations that get hooks, in their original order: queries whose
/// names match none of the `excludeQueries` patterns.
pub fn eligible_operations<'a>(
    operations: &'a [Operation],
    config: &SwrConfig,
) -> Vec<&'a Operation> {
    operations.iter()
        .filter(|operation| operation.kind() == OperationKind::Query)
        .filter(|operation| {
            if !config.exclusion_enabled() {
                return true;
            }
            let excluded = config.excludes_query(operation.name());
            if excluded {
                log::debug!("Excluding query `{}`.", operation.name());
            }
            !excluded
        })
        .collect()
}
