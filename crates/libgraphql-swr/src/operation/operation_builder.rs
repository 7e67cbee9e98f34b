use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Variable;
use crate::to_pascal_case;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// Builds an [`Operation`] one variable at a time.
///
/// When the result or variables type names are not given, they default to the
/// names `typescript-operations` generates without prefix or suffix:
/// `GetUserQuery` and `GetUserQueryVariables` for a query named `getUser`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    kind: OperationKind,
    name: String,
    result_type_name: Option<String>,
    variables: IndexMap<String, Variable>,
    variables_type_name: Option<String>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            result_type_name: None,
            variables: IndexMap::new(),
            variables_type_name: None,
        }
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(OperationBuildError::DuplicateVariableName {
                operation_name: self.name,
                variable_name: variable.name,
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    pub fn result_type_name(mut self, name: impl Into<String>) -> Self {
        self.result_type_name = Some(name.into());
        self
    }

    pub fn variables_type_name(mut self, name: impl Into<String>) -> Self {
        self.variables_type_name = Some(name.into());
        self
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Operation {
        let base_type_name = format!("{}{}", to_pascal_case(&self.name), self.kind);
        Operation {
            kind: self.kind,
            result_type_name: self.result_type_name.unwrap_or_else(
                || base_type_name.to_owned(),
            ),
            variables_type_name: self.variables_type_name.unwrap_or_else(
                || format!("{base_type_name}Variables"),
            ),
            name: self.name,
            variables: self.variables,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OperationBuildError {
    #[error(
        "The `{operation_name}` operation declares the `${variable_name}` \
        variable more than once"
    )]
    DuplicateVariableName {
        operation_name: String,
        variable_name: String,
    },
}
