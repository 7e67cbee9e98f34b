#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_collector;
mod operation_kind;
mod operation_loader;
mod type_annotation;
mod variable;

pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_builder::OperationBuildError;
pub use operation_collector::OperationCollector;
pub use operation_kind::OperationKind;
pub use operation_loader::OperationLoadError;
pub use operation_loader::OperationLoader;
pub use type_annotation::TypeAnnotation;
pub use variable::Variable;

#[cfg(test)]
mod tests;
