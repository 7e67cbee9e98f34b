use graphql_parser::query;

/// The declared type of an operation [`Variable`](crate::operation::Variable),
/// preserving list structure and the nullability of each level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable,
        }
    }

    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named {
            name: name.into(),
            nullable,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null) at
    /// its outermost level.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    /// Recursively unwrap list levels and return the inner-most type name.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &query::Type<'_, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &query::Type<'_, String>,
        nullable: bool,
    ) -> Self {
        match ast_type {
            query::Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            query::Type::NamedType(name) =>
                Self::named(name.as_str(), nullable),

            query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
