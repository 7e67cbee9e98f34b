/// Which of the two hook shapes a [`GeneratedHook`] has.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HookVariant {
    /// `use<Name>`, a single `useSWR` fetch.
    Standard,
    /// `use<Name>Infinite`, an incrementally paginated `useSWRInfinite` fetch.
    Infinite,
}

/// One parameter of a generated hook's signature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookParam {
    pub name: String,
    pub optional: bool,
    pub type_ref: String,
}
impl HookParam {
    pub fn new(
        name: impl Into<String>,
        type_ref: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            optional,
            type_ref: type_ref.into(),
        }
    }

    pub fn required(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self::new(name, type_ref, false)
    }

    pub fn optional(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self::new(name, type_ref, true)
    }
}
impl std::fmt::Display for HookParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}: {}",
            self.name,
            if self.optional { "?" } else { "" },
            self.type_ref,
        )
    }
}

/// A hook generated for one operation, kept structured until the module is
/// assembled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedHook {
    pub(super) body: Vec<String>,
    pub(super) name: String,
    pub(super) operation_name: String,
    pub(super) params: Vec<HookParam>,
    pub(super) variant: HookVariant,
}
impl GeneratedHook {
    /// Lines of the method body, indented relative to the signature.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn param(&self, name: &str) -> Option<&HookParam> {
        self.params.iter().find(|param| param.name == name)
    }

    pub fn params(&self) -> &[HookParam] {
        &self.params
    }

    pub fn variant(&self) -> HookVariant {
        self.variant
    }

    /// The method as it appears inside the returned bundle literal, before
    /// indentation.
    pub fn source(&self) -> String {
        let params =
            self.params.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
        format!("{}({params}) {{\n{}\n}}", self.name, self.body.join("\n"))
    }
}
