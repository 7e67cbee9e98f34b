use crate::codegen::additional_imports;
use crate::codegen::assemble_module;
use crate::codegen::eligible_operations;
use crate::codegen::generate_hooks;
use crate::codegen::EmitError;
use crate::codegen::EmittedModule;
use crate::codegen::GeneratedHook;
use crate::codegen::HookEmitConfig;
use crate::config::SwrConfig;
use crate::operation::Operation;
use crate::operation::OperationCollector;
use std::collections::HashMap;

/// Collects operations during a generation run and emits the hook module
/// once the run is finalized.
///
/// ```
/// use libgraphql_swr::codegen::HookEmitter;
/// use libgraphql_swr::config::SwrConfig;
/// use libgraphql_swr::operation::Operation;
///
/// let config = SwrConfig::builder().autogen_key(true).build().unwrap();
/// let mut emitter = HookEmitter::new(config);
/// emitter.record(Operation::query("getUser"));
///
/// let module = emitter.emit().unwrap();
/// assert!(module.content().contains("useGetUser(variables?: GetUserQueryVariables | null"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HookEmitter {
    collector: OperationCollector,
    config: SwrConfig,
}
impl HookEmitter {
    pub fn new(config: SwrConfig) -> Self {
        Self::with_collector(config, OperationCollector::new())
    }

    /// A [`HookEmitter`] that starts from the operations already recorded in
    /// `collector`.
    pub fn with_collector(config: SwrConfig, collector: OperationCollector) -> Self {
        Self {
            collector,
            config,
        }
    }

    pub fn collector(&self) -> &OperationCollector {
        &self.collector
    }

    pub fn config(&self) -> &SwrConfig {
        &self.config
    }

    /// Record an operation. Filtering is deferred to [`HookEmitter::emit()`].
    pub fn record(&mut self, operation: Operation) {
        self.collector.record(operation);
    }

    /// Filter the recorded operations and generate their hooks, in recorded
    /// order.
    ///
    /// Fails if two hooks would share an identifier.
    pub fn generate_hooks(&self) -> Result<Vec<GeneratedHook>, EmitError> {
        let eligible = eligible_operations(self.collector.operations(), &self.config);
        log::debug!(
            "Generating hooks for {} of {} recorded operations.",
            eligible.len(),
            self.collector.len(),
        );

        let mut hooks = vec![];
        let mut hook_owners = HashMap::<String, String>::new();
        for operation in eligible {
            let emit_config = HookEmitConfig::for_operation(&self.config, operation);
            for hook in generate_hooks(operation, &emit_config) {
                if let Some(first_operation) = hook_owners.get(hook.name()) {
                    return Err(EmitError::HookNameCollision {
                        first_operation: first_operation.to_owned(),
                        hook_name: hook.name,
                        second_operation: hook.operation_name,
                    });
                }
                log::trace!("Generated `{}` for `{}`.", hook.name(), hook.operation_name());
                hook_owners.insert(hook.name.to_owned(), hook.operation_name.to_owned());
                hooks.push(hook);
            }
        }
        Ok(hooks)
    }

    /// Produce the module body and the imports it requires.
    ///
    /// Emission does not consume or alter the recorded operations; calling
    /// this repeatedly yields identical output.
    pub fn emit(&self) -> Result<EmittedModule, EmitError> {
        let hooks = self.generate_hooks()?;
        Ok(EmittedModule {
            additional_imports: additional_imports(&self.config),
            content: assemble_module(&hooks, &self.config),
            hook_names: hooks.into_iter().map(|hook| hook.name).collect(),
        })
    }
}
