use crate::codegen::HookVariant;
use crate::to_pascal_case;

const HOOK_PREFIX: &str = "use";
const INFINITE_SUFFIX: &str = "Infinite";

/// The identifier of the hook generated for `operation_name`:
/// `getUser` -> `useGetUser` / `useGetUserInfinite`.
pub fn hook_name(operation_name: &str, variant: HookVariant) -> String {
    let pascal_name = to_pascal_case(operation_name);
    match variant {
        HookVariant::Standard => format!("{HOOK_PREFIX}{pascal_name}"),
        HookVariant::Infinite => format!("{HOOK_PREFIX}{pascal_name}{INFINITE_SUFFIX}"),
    }
}
