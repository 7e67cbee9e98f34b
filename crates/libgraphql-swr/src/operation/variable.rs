use crate::operation::TypeAnnotation;

/// A variable declared by an operation, e.g. `$id: ID! = "1"`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable {
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            name: name.into(),
            type_annotation,
        }
    }

    /// Attach a default value, given as its GraphQL source text.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// The default value as GraphQL source text, if one was declared.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// A caller may omit this variable when its type is nullable or it carries
    /// a default value.
    pub fn is_omittable(&self) -> bool {
        self.type_annotation.nullable() || self.default_value.is_some()
    }
}
