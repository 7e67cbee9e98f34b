use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Variable;
use indexmap::IndexMap;

/// A named GraphQL operation as handed over by the upstream document parser
/// and type generator.
///
/// `result_type_name` and `variables_type_name` are opaque references to the
/// TypeScript types generated for this operation's result and variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) result_type_name: String,
    pub(super) variables: IndexMap<String, Variable>,
    pub(super) variables_type_name: String,
}
impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder(kind: OperationKind, name: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(kind, name)
    }

    /// Shorthand for a [`Query`](OperationKind::Query) with no variables and
    /// the default generated type names.
    pub fn query(name: impl Into<String>) -> Self {
        OperationBuilder::new(OperationKind::Query, name).build()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn result_type_name(&self) -> &str {
        self.result_type_name.as_str()
    }

    /// The [`Variable`]s declared by this operation, in declaration order.
    pub fn variables(&self) -> impl ExactSizeIterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables_type_name(&self) -> &str {
        self.variables_type_name.as_str()
    }

    /// Whether callers may omit the variables argument entirely: true when no
    /// variables are declared, or when every declared variable is nullable or
    /// has a default value.
    pub fn has_omittable_variables(&self) -> bool {
        self.variables.values().all(Variable::is_omittable)
    }
}
