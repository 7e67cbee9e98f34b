//! Turns recorded operations into the hook-augmented `getSdkWithHooks()`
//! module body.
//!
//! The pipeline runs once per [`HookEmitter::emit()`] call:
//! [`eligible_operations()`] filters the recorded operations,
//! [`generate_hooks()`] produces a [`GeneratedHook`] per hook, and
//! [`assemble_module()`] sequences those hooks with the shared boilerplate.

mod additional_imports;
mod emit_error;
mod emitted_module;
mod generated_hook;
mod hook_emit_config;
mod hook_emitter;
mod hook_filter;
mod hook_generator;
mod hook_name;
mod module_assembler;

pub use additional_imports::additional_imports;
pub use emit_error::EmitError;
pub use emitted_module::EmittedModule;
pub use generated_hook::GeneratedHook;
pub use generated_hook::HookParam;
pub use generated_hook::HookVariant;
pub use hook_emit_config::HookEmitConfig;
pub use hook_emitter::HookEmitter;
pub use hook_filter::eligible_operations;
pub use hook_generator::generate_hooks;
pub use hook_name::hook_name;
pub use module_assembler::assemble_module;

#[cfg(test)]
mod tests;
