use crate::operation::TypeAnnotation;

#[test]
fn display_matches_graphql_syntax() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("ID", false), false);
    assert_eq!(annot.to_string(), "[ID!]!");
    assert_eq!(TypeAnnotation::named("String", true).to_string(), "String");
}

#[test]
fn nullability_is_outermost_level() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("ID", false), true);
    assert!(annot.nullable());
    assert_eq!(annot.innermost_type_name(), "ID");
}

#[test]
fn from_ast_type_preserves_structure() {
    let doc = graphql_parser::query::parse_query::<String>(
        "query q($ids: [[ID!]]!) { a }",
    ).unwrap();
    let graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::Query(query),
    ) = &doc.definitions[0] else {
        panic!("Expected a query definition");
    };

    let annot = TypeAnnotation::from_ast_type(&query.variable_definitions[0].var_type);
    assert_eq!(
        annot,
        TypeAnnotation::list(
            TypeAnnotation::list(TypeAnnotation::named("ID", false), true),
            false,
        ),
    );
    assert_eq!(annot.to_string(), "[[ID!]]!");
}
