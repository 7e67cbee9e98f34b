/// The output of one [`HookEmitter::emit()`](crate::codegen::HookEmitter::emit)
/// run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmittedModule {
    pub(super) additional_imports: Vec<String>,
    pub(super) content: String,
    pub(super) hook_names: Vec<String>,
}
impl EmittedModule {
    /// Import lines the module body depends on, to be merged into the
    /// imports of the final file.
    pub fn additional_imports(&self) -> &[String] {
        &self.additional_imports
    }

    /// The module body.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Names of the hooks in the returned bundle, in emission order.
    pub fn hook_names(&self) -> &[String] {
        &self.hook_names
    }

    /// The imports, a blank line, then the body, ending with a newline.
    pub fn render(&self) -> String {
        let mut output = self.additional_imports.join("\n");
        if !output.is_empty() {
            output.push_str("\n\n");
        }
        output.push_str(&self.content);
        output.push('\n');
        output
    }
}
