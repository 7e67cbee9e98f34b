use crate::codegen::assemble_module;
use crate::codegen::generate_hooks;
use crate::codegen::module_assembler::factory_return;
use crate::codegen::module_assembler::indent_multiline;
use crate::codegen::module_assembler::infinite_key_loader_type;
use crate::codegen::module_assembler::sdk_type_alias;
use crate::codegen::tests::test_utils::get_user;
use crate::codegen::HookEmitConfig;
use crate::config::SwrConfig;

#[test]
fn minimal_module() {
    let module = assemble_module(&[], &SwrConfig::default());
    assert_eq!(
        module,
        concat!(
            "export function getSdkWithHooks(client: GraphQLClient, ",
            "withWrapper: SdkFunctionWrapper = defaultWrapper) {\n",
            "  const sdk = getSdk(client, withWrapper);\n",
            "  return {\n",
            "    ...sdk,\n",
            "  };\n",
            "}\n",
            "export type SdkWithHooks = ReturnType<typeof getSdkWithHooks>;",
        ),
    );
}

#[test]
fn hooks_are_indented_two_levels_and_comma_separated() {
    let hooks = generate_hooks(&get_user(), &HookEmitConfig {
        infinite: true,
        ..HookEmitConfig::default()
    });
    let fragment = factory_return(&hooks);
    let lines: Vec<&str> = fragment.lines().collect();

    assert_eq!(lines[0], "  return {");
    assert_eq!(lines[1], "    ...sdk,");
    assert!(lines[2].starts_with("    useGetUser(key: SWRKeyInterface, "));
    assert_eq!(lines[3], "      return useSWR<GetUserQuery, ClientError>(key, () => sdk.getUser(variables!), config);");
    assert_eq!(lines[4], "    },");
    assert!(lines[5].starts_with("    useGetUserInfinite(id: string, "));
    assert_eq!(lines[lines.len() - 3], "    }");
    assert_eq!(lines[lines.len() - 2], "  };");
    assert_eq!(lines[lines.len() - 1], "}");
}

#[test]
fn indent_multiline_skips_empty_lines() {
    assert_eq!(indent_multiline("a\n\n  b", 2), "    a\n\n      b");
    assert_eq!(indent_multiline("a", 1), "  a");
}

#[test]
fn raw_response_type_appears_once_iff_enabled() {
    let hooks: Vec<_> =
        [get_user(), get_user()].iter()
            .flat_map(|op| generate_hooks(op, &HookEmitConfig {
                raw_response: true,
                ..HookEmitConfig::default()
            }))
            .collect();

    let enabled = SwrConfig::builder().raw_response(true).build().unwrap();
    let module = assemble_module(&hooks, &enabled);
    assert_eq!(module.matches("type SWRRawResponse<Data = any>").count(), 1);
    assert!(module.starts_with("type SWRRawResponse<Data = any> = { data?: Data | undefined;"));

    let disabled = assemble_module(&hooks, &SwrConfig::default());
    assert!(!disabled.contains("type SWRRawResponse"));
}

#[test]
fn infinite_fragments_are_gated_on_configured_patterns() {
    let config = SwrConfig::builder().infinite_queries("list*").build().unwrap();
    let module = assemble_module(&[], &config);
    assert!(module.starts_with("export type SWRInfiniteKeyLoader<Data = unknown, Variables = unknown> = ("));
    assert!(module.contains("  const utilsForInfinite = {\n"));
    assert!(module.contains("      getKey: SWRInfiniteKeyLoader<Data, Variables>\n"));

    let module = assemble_module(&[], &SwrConfig::default());
    assert!(!module.contains("SWRInfiniteKeyLoader"));
    assert!(!module.contains("utilsForInfinite"));
}

#[test]
fn gen_key_helper_is_gated_on_autogen_key() {
    let config = SwrConfig::builder().autogen_key(true).build().unwrap();
    let module = assemble_module(&[], &config);
    assert!(module.contains(concat!(
        "  const genKey = <V extends Record<string, unknown> = Record<string, unknown>>",
        "(name: string, object: V = {} as V): SWRKeyInterface => ",
        "[name, ...Object.keys(object).sort().map(key => object[key])];",
    )));

    assert!(!assemble_module(&[], &SwrConfig::default()).contains("genKey"));
}

#[test]
fn fragments_appear_in_fixed_order() {
    let config =
        SwrConfig::builder()
            .raw_response(true)
            .infinite_queries("list*")
            .autogen_key(true)
            .build()
            .unwrap();
    let module = assemble_module(&[], &config);

    let positions: Vec<usize> = [
        "type SWRRawResponse",
        "export type SWRInfiniteKeyLoader",
        "export function getSdkWithHooks",
        "const utilsForInfinite",
        "const genKey",
        "  return {",
        "export type SdkWithHooks",
    ].iter()
        .map(|needle| module.find(needle).unwrap())
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn synthesized_type_names_are_affixed() {
    let config =
        SwrConfig::builder()
            .types_prefix("Api")
            .types_suffix("_T")
            .infinite_queries("*")
            .build()
            .unwrap();
    assert_eq!(
        sdk_type_alias(&config),
        "export type ApiSdkWithHooks_T = ReturnType<typeof getSdkWithHooks>;",
    );
    assert!(infinite_key_loader_type(&config).starts_with("export type ApiSWRInfiniteKeyLoader_T<"));
}
