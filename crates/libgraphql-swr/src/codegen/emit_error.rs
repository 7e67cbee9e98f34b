#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EmitError {
    /// Two hooks would share an identifier in the returned bundle, so the
    /// later one would silently replace the earlier one. This happens for
    /// operation names that only differ in casing or separators (`get_user`
    /// and `getUser`), for duplicated operation names, and when a query named
    /// `fooInfinite` meets the paginated hook of a query named `foo`.
    #[error(
        "Operations `{first_operation}` and `{second_operation}` both \
        generate a hook named `{hook_name}`"
    )]
    HookNameCollision {
        first_operation: String,
        hook_name: String,
        second_operation: String,
    },
}
