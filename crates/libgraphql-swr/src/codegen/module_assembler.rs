use crate::codegen::GeneratedHook;
use crate::config::SwrConfig;

/// Indentation of hooks inside the bundle returned by `getSdkWithHooks()`.
const HOOK_INDENT_LEVELS: usize = 2;

/// Sequence previously generated hooks with the shared boilerplate into the
/// module body.
///
/// Fragments appear in a fixed order; the optional ones are gated as noted:
///
///  1. the `SWRRawResponse` envelope type (`rawResponse`)
///  2. the `SWRInfiniteKeyLoader` type (paginated hooks enabled)
///  3. the opening of `getSdkWithHooks()`
///  4. the `utilsForInfinite` helpers (paginated hooks enabled)
///  5. the `genKey` helper (`autogenKey`)
///  6. the returned bundle of `sdk` accessors and hooks, closing the function
///  7. the exported `SdkWithHooks` type alias
pub fn assemble_module(hooks: &[GeneratedHook], config: &SwrConfig) -> String {
    let mut fragments = vec![];
    if config.raw_response() {
        fragments.push(raw_response_type());
    }
    if config.infinite_enabled() {
        fragments.push(infinite_key_loader_type(config));
    }
    fragments.push(factory_opening());
    if config.infinite_enabled() {
        fragments.push(infinite_utils(config));
    }
    if config.autogen_key() {
        fragments.push(gen_key_helper());
    }
    fragments.push(factory_return(hooks));
    fragments.push(sdk_type_alias(config));
    fragments.join("\n")
}

pub(crate) fn raw_response_type() -> String {
    concat!(
        "type SWRRawResponse<Data = any> = { data?: Data | undefined; ",
        "extensions?: any; headers: Headers; status: number; ",
        "errors?: GraphQLError[] | undefined; };",
    ).to_string()
}

pub(crate) fn infinite_key_loader_type(config: &SwrConfig) -> String {
    format!(
        concat!(
            "export type {key_loader}<Data = unknown, Variables = unknown> = (\n",
            "  index: number,\n",
            "  previousPageData: Data | null\n",
            ") => [keyof Variables, Variables[keyof Variables] | null] | null;",
        ),
        key_loader = config.affixed_type_name("SWRInfiniteKeyLoader"),
    )
}

pub(crate) fn factory_opening() -> String {
    concat!(
        "export function getSdkWithHooks(client: GraphQLClient, ",
        "withWrapper: SdkFunctionWrapper = defaultWrapper) {\n",
        "  const sdk = getSdk(client, withWrapper);",
    ).to_string()
}

pub(crate) fn infinite_utils(config: &SwrConfig) -> String {
    format!(
        concat!(
            "  const utilsForInfinite = {{\n",
            "    generateGetKey: <Data = unknown, Variables = unknown>(\n",
            "      id: string,\n",
            "      getKey: {key_loader}<Data, Variables>\n",
            "    ) => (pageIndex: number, previousData: Data | null) => {{\n",
            "      const key = getKey(pageIndex, previousData)\n",
            "      return key ? [id, ...key] : null\n",
            "    }},\n",
            "    generateFetcher: <Query = unknown, Variables = unknown>",
            "(query: (variables: Variables) => Promise<Query>, variables?: Variables) => (\n",
            "        id: string,\n",
            "        fieldName: keyof Variables,\n",
            "        fieldValue: Variables[typeof fieldName]\n",
            "      ) => query({{ ...variables, [fieldName]: fieldValue }} as Variables)\n",
            "  }}",
        ),
        key_loader = config.affixed_type_name("SWRInfiniteKeyLoader"),
    )
}

pub(crate) fn gen_key_helper() -> String {
    concat!(
        "  const genKey = <V extends Record<string, unknown> = Record<string, unknown>>",
        "(name: string, object: V = {} as V): SWRKeyInterface => ",
        "[name, ...Object.keys(object).sort().map(key => object[key])];",
    ).to_string()
}

pub(crate) fn factory_return(hooks: &[GeneratedHook]) -> String {
    let mut lines = vec![
        "  return {".to_string(),
        "    ...sdk,".to_string(),
    ];
    if !hooks.is_empty() {
        lines.push(
            hooks.iter()
                .map(|hook| indent_multiline(&hook.source(), HOOK_INDENT_LEVELS))
                .collect::<Vec<_>>()
                .join(",\n"),
        );
    }
    lines.push("  };".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}

pub(crate) fn sdk_type_alias(config: &SwrConfig) -> String {
    format!(
        "export type {} = ReturnType<typeof getSdkWithHooks>;",
        config.affixed_type_name("SdkWithHooks"),
    )
}

/// Indent every non-empty line of `source` by `levels` two-space steps.
pub(crate) fn indent_multiline(source: &str, levels: usize) -> String {
    let indent = "  ".repeat(levels);
    source.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
