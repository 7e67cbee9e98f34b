use crate::codegen::additional_imports;
use crate::config::SwrConfig;

#[test]
fn value_imports() {
    assert_eq!(additional_imports(&SwrConfig::default()), vec![
        "import { ClientError } from 'graphql-request/dist/types';",
        "import useSWR, { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';",
    ]);
}

#[test]
fn value_imports_with_infinite() {
    let config = SwrConfig::builder().infinite_queries("list*").build().unwrap();
    assert_eq!(additional_imports(&config), vec![
        "import { ClientError } from 'graphql-request/dist/types';",
        "import useSWR, { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';",
        "import useSWRInfinite, { SWRInfiniteConfiguration } from 'swr/infinite';",
    ]);
}

#[test]
fn type_imports() {
    let config = SwrConfig::builder().use_type_imports(true).build().unwrap();
    assert_eq!(additional_imports(&config), vec![
        "import type { ClientError } from 'graphql-request/dist/types';",
        "import type { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';",
        "import useSWR from 'swr';",
    ]);
}

#[test]
fn type_imports_with_infinite() {
    let config =
        SwrConfig::builder()
            .use_type_imports(true)
            .infinite_queries(["list*"])
            .build()
            .unwrap();
    assert_eq!(additional_imports(&config), vec![
        "import type { ClientError } from 'graphql-request/dist/types';",
        "import type { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';",
        "import type { SWRInfiniteConfiguration } from 'swr/infinite';",
        "import useSWR from 'swr';",
        "import useSWRInfinite from 'swr/infinite';",
    ]);
}
