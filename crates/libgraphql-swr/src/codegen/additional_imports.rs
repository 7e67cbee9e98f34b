use crate::config::SwrConfig;

/// The import lines required by the module emitted under `config`, in a
/// stable order.
pub fn additional_imports(config: &SwrConfig) -> Vec<String> {
    let type_import = if config.use_type_imports() { "import type" } else { "import" };
    let mut imports = vec![
        format!("{type_import} {{ ClientError }} from 'graphql-request/dist/types';"),
    ];

    if config.use_type_imports() {
        imports.push(
            "import type { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';"
                .to_string(),
        );
        if config.infinite_enabled() {
            imports.push(
                "import type { SWRInfiniteConfiguration } from 'swr/infinite';".to_string(),
            );
        }
        imports.push("import useSWR from 'swr';".to_string());
        if config.infinite_enabled() {
            imports.push("import useSWRInfinite from 'swr/infinite';".to_string());
        }
    } else {
        imports.push(
            "import useSWR, { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';"
                .to_string(),
        );
        if config.infinite_enabled() {
            imports.push(
                "import useSWRInfinite, { SWRInfiniteConfiguration } from 'swr/infinite';"
                    .to_string(),
            );
        }
    }

    imports
}
