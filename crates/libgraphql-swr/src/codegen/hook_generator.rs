use crate::codegen::hook_name;
use crate::codegen::GeneratedHook;
use crate::codegen::HookEmitConfig;
use crate::codegen::HookParam;
use crate::codegen::HookVariant;
use crate::operation::Operation;
use crate::to_pascal_case;

/// Names and types shared by both hook variants of one operation.
struct HookTypes<'a> {
    operation_name: &'a str,
    pascal_name: String,
    response_type: String,
    variables_optional: bool,
    variables_type: &'a str,
}
impl<'a> HookTypes<'a> {
    fn new(operation: &'a Operation, config: &HookEmitConfig) -> Self {
        let response_type =
            if config.raw_response {
                format!("SWRRawResponse<{}>", operation.result_type_name())
            } else {
                operation.result_type_name().to_string()
            };

        Self {
            operation_name: operation.name(),
            pascal_name: to_pascal_case(operation.name()),
            response_type,
            variables_optional: operation.has_omittable_variables(),
            variables_type: operation.variables_type_name(),
        }
    }

    fn variables_param(&self) -> HookParam {
        HookParam::new("variables", self.variables_type, self.variables_optional)
    }

    /// Passing `null` for these pauses the standard hook's fetch: the
    /// generated key is falsy until variables are supplied.
    fn nullable_variables_param(&self) -> HookParam {
        HookParam::new(
            "variables",
            format!("{} | null", self.variables_type),
            self.variables_optional,
        )
    }

    /// The derived cache key: the PascalCase operation name followed by the
    /// variable values sorted by variable name.
    fn generated_key(&self) -> String {
        format!("genKey<{}>('{}', variables)", self.variables_type, self.pascal_name)
    }
}

/// Generate the hooks of one eligible operation: always the standard hook,
/// followed by the paginated hook when `config.infinite` is set.
pub fn generate_hooks(
    operation: &Operation,
    config: &HookEmitConfig,
) -> Vec<GeneratedHook> {
    let types = HookTypes::new(operation, config);
    let mut hooks = vec![standard_hook(&types, config)];
    if config.infinite {
        hooks.push(infinite_hook(&types, config));
    }
    hooks
}

fn standard_hook(types: &HookTypes<'_>, config: &HookEmitConfig) -> GeneratedHook {
    let mut params = vec![];
    if !config.autogen_key {
        params.push(HookParam::required("key", "SWRKeyInterface"));
    }
    params.push(types.nullable_variables_param());
    params.push(HookParam::optional(
        "config",
        format!("SWRConfigInterface<{}, ClientError>", types.response_type),
    ));

    let key =
        if config.autogen_key {
            format!("variables && {}", types.generated_key())
        } else {
            "key".to_string()
        };

    GeneratedHook {
        body: vec![format!(
            "  return useSWR<{response_type}, ClientError>({key}, () => sdk.{name}(variables!), config);",
            response_type = types.response_type,
            key = key,
            name = types.operation_name,
        )],
        name: hook_name(types.operation_name, HookVariant::Standard),
        operation_name: types.operation_name.to_string(),
        params,
        variant: HookVariant::Standard,
    }
}

fn infinite_hook(types: &HookTypes<'_>, config: &HookEmitConfig) -> GeneratedHook {
    let response_type = types.response_type.as_str();
    let variables_type = types.variables_type;

    let mut params = vec![];
    if !config.autogen_key {
        params.push(HookParam::required("id", "string"));
    }
    params.push(HookParam::required(
        "getKey",
        format!(
            "{}<{response_type}, {variables_type}>",
            config.affixed_type_name("SWRInfiniteKeyLoader"),
        ),
    ));
    params.push(types.variables_param());
    params.push(HookParam::optional(
        "config",
        format!("SWRInfiniteConfiguration<{response_type}, ClientError>"),
    ));

    let id =
        if config.autogen_key {
            types.generated_key()
        } else {
            "id".to_string()
        };

    GeneratedHook {
        body: vec![
            format!("  return useSWRInfinite<{response_type}, ClientError>("),
            format!(
                "    utilsForInfinite.generateGetKey<{response_type}, {variables_type}>({id}, getKey),",
            ),
            format!(
                "    utilsForInfinite.generateFetcher<{response_type}, {variables_type}>(sdk.{}, variables),",
                types.operation_name,
            ),
            "    config);".to_string(),
        ],
        name: hook_name(types.operation_name, HookVariant::Infinite),
        operation_name: types.operation_name.to_string(),
        params,
        variant: HookVariant::Infinite,
    }
}
