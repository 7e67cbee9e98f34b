use crate::config::SwrConfig;
use crate::file_reader;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::TypeAnnotation;
use crate::operation::Variable;
use crate::to_pascal_case;
use crate::ReadContentError;
use graphql_parser::query;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Vec<OperationLoadError>>;

struct AstOperationDetails<'a, 'ast> {
    kind: OperationKind,
    name: Option<&'ast String>,
    position: graphql_parser::Pos,
    variables: &'ast [query::VariableDefinition<'a, String>],
}

/// Produces [`Operation`]s from GraphQL
/// [executable documents](https://spec.graphql.org/October2021/#ExecutableDocument).
///
/// Fragment definitions are skipped. Result and variables type names follow
/// the `typescript-operations` convention (`GetUserQuery`,
/// `GetUserQueryVariables`) with the configured prefix and suffix applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationLoader {
    types_prefix: String,
    types_suffix: String,
}
impl OperationLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// An [`OperationLoader`] that names generated types with the prefix and
    /// suffix of `config`.
    pub fn from_config(config: &SwrConfig) -> Self {
        Self {
            types_prefix: config.types_prefix().to_string(),
            types_suffix: config.types_suffix().to_string(),
        }
    }

    pub fn types_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.types_prefix = prefix.into();
        self
    }

    pub fn types_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.types_suffix = suffix.into();
        self
    }

    /// Load every operation defined in the document at `file_path`.
    pub fn load_file(&self, file_path: impl AsRef<Path>) -> Result<Vec<Operation>> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|e| vec![e.into()])?;
        self.load_str(content, Some(file_path))
    }

    /// Load every operation defined in `content`, in document order.
    ///
    /// All problems found in the document are reported together.
    pub fn load_str(
        &self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Vec<Operation>> {
        let ast_doc = query::parse_query::<String>(content.as_ref())
            .map_err(|err| vec![OperationLoadError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                err,
            }])?;

        let mut errors = vec![];
        let mut operations = vec![];
        for def in &ast_doc.definitions {
            let op_def = match def {
                query::Definition::Operation(op_def) => op_def,
                query::Definition::Fragment(frag) => {
                    log::trace!("Skipping fragment `{}`.", frag.name);
                    continue
                },
            };

            match self.load_operation(op_def, file_path) {
                Ok(operation) => operations.push(operation),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "Loaded {} operations from {}.",
            operations.len(),
            file_path.map_or_else(
                || "<string>".to_string(),
                |p| format!("{p:?}"),
            ),
        );
        Ok(operations)
    }

    fn load_operation(
        &self,
        op_def: &query::OperationDefinition<'_, String>,
        file_path: Option<&Path>,
    ) -> std::result::Result<Operation, OperationLoadError> {
        let details = match op_def {
            query::OperationDefinition::SelectionSet(selection_set) => {
                return Err(OperationLoadError::AnonymousOperation {
                    file_path: file_path.map(Path::to_path_buf),
                    line: selection_set.span.0.line,
                    column: selection_set.span.0.column,
                });
            },

            query::OperationDefinition::Query(q) => AstOperationDetails {
                kind: OperationKind::Query,
                name: q.name.as_ref(),
                position: q.position,
                variables: &q.variable_definitions,
            },

            query::OperationDefinition::Mutation(m) => AstOperationDetails {
                kind: OperationKind::Mutation,
                name: m.name.as_ref(),
                position: m.position,
                variables: &m.variable_definitions,
            },

            query::OperationDefinition::Subscription(s) => AstOperationDetails {
                kind: OperationKind::Subscription,
                name: s.name.as_ref(),
                position: s.position,
                variables: &s.variable_definitions,
            },
        };

        let Some(name) = details.name else {
            return Err(OperationLoadError::AnonymousOperation {
                file_path: file_path.map(Path::to_path_buf),
                line: details.position.line,
                column: details.position.column,
            });
        };

        let base_type_name = format!("{}{}", to_pascal_case(name), details.kind);
        let mut builder =
            OperationBuilder::new(details.kind, name.as_str())
                .result_type_name(self.affixed(&base_type_name))
                .variables_type_name(self.affixed(&format!("{base_type_name}Variables")));

        for var_def in details.variables {
            let mut variable = Variable::new(
                var_def.name.as_str(),
                TypeAnnotation::from_ast_type(&var_def.var_type),
            );
            if let Some(default_value) = &var_def.default_value {
                variable = variable.with_default_value(default_value.to_string());
            }
            builder = builder.add_variable(variable)?;
        }

        Ok(builder.build())
    }

    fn affixed(&self, type_name: &str) -> String {
        format!("{}{type_name}{}", self.types_prefix, self.types_suffix)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OperationLoadError {
    #[error(
        "Anonymous operation at {line}:{column} in {file_path:?}: hooks can \
        only be generated for named operations"
    )]
    AnonymousOperation {
        file_path: Option<PathBuf>,
        line: usize,
        column: usize,
    },

    #[error("Failed to read GraphQL document: {0}")]
    FileReadError(#[from] ReadContentError),

    #[error(transparent)]
    OperationBuildError(#[from] OperationBuildError),

    #[error("Failed to parse GraphQL document {file_path:?}: {err}")]
    ParseError {
        file_path: Option<PathBuf>,
        err: query::ParseError,
    },
}
