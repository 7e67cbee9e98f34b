//! Generates [SWR](https://swr.vercel.app/) data-fetching hooks for the query
//! operations of a set of GraphQL documents.
//!
//! Operations are recorded one at a time into a
//! [`HookEmitter`](crate::codegen::HookEmitter), which defers all emission until
//! [`HookEmitter::emit()`](crate::codegen::HookEmitter::emit) is called. At that
//! point the recorded queries are filtered against the resolved
//! [`SwrConfig`](crate::config::SwrConfig) and a TypeScript module body is
//! produced that wraps the `getSdk()` accessor bundle generated by
//! `typescript-graphql-request` with one `use<Name>` hook per query (and an
//! optional `use<Name>Infinite` paginated variant).

mod casing;
pub mod codegen;
pub mod config;
mod file_reader;
pub mod operation;
mod pattern_set;

pub use casing::to_pascal_case;
pub use file_reader::ReadContentError;
pub use pattern_set::PatternSet;
pub use pattern_set::PatternSetBuildError;
