use crate::codegen::generate_hooks;
use crate::codegen::hook_name;
use crate::codegen::tests::test_utils::get_user;
use crate::codegen::tests::test_utils::list_items;
use crate::codegen::HookEmitConfig;
use crate::codegen::HookParam;
use crate::codegen::HookVariant;
use crate::config::SwrConfig;
use crate::operation::Operation;

fn param_names(params: &[HookParam]) -> Vec<&str> {
    params.iter().map(|param| param.name.as_str()).collect()
}

#[test]
fn hook_names() {
    assert_eq!(hook_name("getUser", HookVariant::Standard), "useGetUser");
    assert_eq!(hook_name("listItems", HookVariant::Infinite), "useListItemsInfinite");
    assert_eq!(hook_name("get_user_by_ID", HookVariant::Standard), "useGetUserById");
}

#[test]
fn standard_hook_with_caller_supplied_key() {
    let hooks = generate_hooks(&get_user(), &HookEmitConfig::default());
    assert_eq!(hooks.len(), 1);

    let hook = &hooks[0];
    assert_eq!(hook.name(), "useGetUser");
    assert_eq!(hook.operation_name(), "getUser");
    assert_eq!(hook.variant(), HookVariant::Standard);
    assert_eq!(param_names(hook.params()), vec!["key", "variables", "config"]);
    assert_eq!(
        hook.source(),
        concat!(
            "useGetUser(key: SWRKeyInterface, variables: GetUserQueryVariables | null, ",
            "config?: SWRConfigInterface<GetUserQuery, ClientError>) {\n",
            "  return useSWR<GetUserQuery, ClientError>(key, () => sdk.getUser(variables!), config);\n",
            "}",
        ),
    );
}

#[test]
fn standard_hook_with_generated_key() {
    let config = HookEmitConfig {
        autogen_key: true,
        ..HookEmitConfig::default()
    };
    let hooks = generate_hooks(&get_user(), &config);

    let hook = &hooks[0];
    assert!(hook.param("key").is_none());
    assert_eq!(param_names(hook.params()), vec!["variables", "config"]);
    assert_eq!(
        hook.source(),
        concat!(
            "useGetUser(variables: GetUserQueryVariables | null, ",
            "config?: SWRConfigInterface<GetUserQuery, ClientError>) {\n",
            "  return useSWR<GetUserQuery, ClientError>(",
            "variables && genKey<GetUserQueryVariables>('GetUser', variables), ",
            "() => sdk.getUser(variables!), config);\n",
            "}",
        ),
    );
}

#[test]
fn variables_optionality() {
    let config = HookEmitConfig::default();

    let required = generate_hooks(&get_user(), &config);
    assert_eq!(
        required[0].param("variables"),
        Some(&HookParam::required("variables", "GetUserQueryVariables | null")),
    );

    let defaulted_or_nullable = generate_hooks(&list_items(), &config);
    assert_eq!(
        defaulted_or_nullable[0].param("variables"),
        Some(&HookParam::optional("variables", "ListItemsQueryVariables | null")),
    );

    let no_variables = generate_hooks(&Operation::query("me"), &config);
    let variables = no_variables[0].param("variables").unwrap();
    assert!(variables.optional);
    assert_eq!(variables.to_string(), "variables?: MeQueryVariables | null");
}

#[test]
fn only_standard_hook_accepts_null_variables() {
    let config = HookEmitConfig {
        autogen_key: true,
        infinite: true,
        ..HookEmitConfig::default()
    };
    let hooks = generate_hooks(&get_user(), &config);

    let standard = &hooks[0];
    assert_eq!(
        standard.param("variables").unwrap().to_string(),
        "variables: GetUserQueryVariables | null",
    );
    assert!(standard.body()[0].contains("variables && genKey<GetUserQueryVariables>"));
    assert!(standard.body()[0].ends_with("() => sdk.getUser(variables!), config);"));

    let infinite = &hooks[1];
    assert_eq!(
        infinite.param("variables").unwrap().to_string(),
        "variables: GetUserQueryVariables",
    );
    assert!(infinite.body().iter().all(|line| !line.contains("variables!")));
}

#[test]
fn raw_response_wraps_result_type() {
    let config = HookEmitConfig {
        raw_response: true,
        infinite: true,
        ..HookEmitConfig::default()
    };
    let hooks = generate_hooks(&get_user(), &config);

    assert_eq!(
        hooks[0].param("config").unwrap().type_ref,
        "SWRConfigInterface<SWRRawResponse<GetUserQuery>, ClientError>",
    );
    assert_eq!(
        hooks[0].body()[0],
        concat!(
            "  return useSWR<SWRRawResponse<GetUserQuery>, ClientError>",
            "(key, () => sdk.getUser(variables!), config);",
        ),
    );
    assert_eq!(
        hooks[1].param("getKey").unwrap().type_ref,
        "SWRInfiniteKeyLoader<SWRRawResponse<GetUserQuery>, GetUserQueryVariables>",
    );
}

#[test]
fn infinite_hook_with_caller_supplied_id() {
    let config = HookEmitConfig {
        infinite: true,
        ..HookEmitConfig::default()
    };
    let hooks = generate_hooks(&list_items(), &config);
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0].name(), "useListItems");
    assert_eq!(hooks[1].name(), "useListItemsInfinite");
    assert_eq!(hooks[1].variant(), HookVariant::Infinite);

    assert_eq!(
        hooks[1].source(),
        concat!(
            "useListItemsInfinite(id: string, ",
            "getKey: SWRInfiniteKeyLoader<ListItemsQuery, ListItemsQueryVariables>, ",
            "variables?: ListItemsQueryVariables, ",
            "config?: SWRInfiniteConfiguration<ListItemsQuery, ClientError>) {\n",
            "  return useSWRInfinite<ListItemsQuery, ClientError>(\n",
            "    utilsForInfinite.generateGetKey<ListItemsQuery, ListItemsQueryVariables>(id, getKey),\n",
            "    utilsForInfinite.generateFetcher<ListItemsQuery, ListItemsQueryVariables>(sdk.listItems, variables),\n",
            "    config);\n",
            "}",
        ),
    );
}

#[test]
fn infinite_hook_with_generated_key_and_affixes() {
    let config = HookEmitConfig {
        autogen_key: true,
        infinite: true,
        types_prefix: "Api".to_string(),
        types_suffix: "Type".to_string(),
        ..HookEmitConfig::default()
    };
    let hooks = generate_hooks(&list_items(), &config);
    let infinite = &hooks[1];

    assert_eq!(param_names(infinite.params()), vec!["getKey", "variables", "config"]);
    assert_eq!(
        infinite.param("getKey").unwrap().type_ref,
        "ApiSWRInfiniteKeyLoaderType<ListItemsQuery, ListItemsQueryVariables>",
    );
    assert_eq!(
        infinite.body()[1],
        concat!(
            "    utilsForInfinite.generateGetKey<ListItemsQuery, ListItemsQueryVariables>",
            "(genKey<ListItemsQueryVariables>('ListItems', variables), getKey),",
        ),
    );
}

#[test]
fn emit_config_resolves_infinite_per_operation() {
    let config =
        SwrConfig::builder()
            .infinite_queries(["list*"])
            .autogen_key(true)
            .build()
            .unwrap();

    let list = HookEmitConfig::for_operation(&config, &list_items());
    assert!(list.infinite);
    assert!(list.autogen_key);

    let get = HookEmitConfig::for_operation(&config, &get_user());
    assert!(!get.infinite);

    let hooks: Vec<String> =
        generate_hooks(&get_user(), &get)
            .iter()
            .map(|hook| hook.name().to_string())
            .collect();
    assert_eq!(hooks, vec!["useGetUser"]);
}
