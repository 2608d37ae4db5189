use super::*;
use shapeset::OperationKind;

#[test]
fn query_pairs_name_input_and_selection() {
    let t = role_and_organization();
    let resolver = Resolver::new(&t);
    let op = resolver
        .to_query("organization", Some("OrganizationWhereUniqueInput"), "Organization", Level::Full)
        .unwrap();
    assert_eq!(op.kind(), OperationKind::Query);
    assert_eq!(op.operation_name(), "organization");
    assert_eq!(op.input_type(), Some("OrganizationWhereUniqueInput"));
    assert_eq!(op.root_type(), Some("Organization"));
    assert_eq!(op.level(), Some(Level::Full));
    assert_eq!(
        op.selection(),
        Some(&resolver.resolve("Organization", Level::Full).unwrap())
    );
}

#[test]
fn search_offers_every_level_for_the_same_operation() {
    let t = role_and_organization();
    let resolver = Resolver::new(&t);
    let ops = resolver
        .to_search("organizations", "OrganizationFilter", "Organization")
        .unwrap();
    for op in &ops {
        assert_eq!(op.operation_name(), "organizations");
        assert_eq!(op.input_type(), Some("OrganizationFilter"));
    }
    let list = ops.level(Level::List).unwrap();
    assert!(list.selection().unwrap().contains("memberCount"));
    let names: Vec<String> = ops
        .into_iter()
        .map(|op| op.level().unwrap().to_string())
        .collect();
    assert_eq!(names, ["list", "nav", "full"]);
}

#[test]
fn mutation_with_and_without_payload() {
    let t = role_and_organization();
    let resolver = Resolver::new(&t);

    let create = resolver
        .to_mutation("createRole", Some("RoleCreateInput"), Some(("Role", Level::Full)))
        .unwrap();
    assert_eq!(create.kind(), OperationKind::Mutation);
    assert!(create.selection().unwrap().contains("permissions"));

    let sign_out = resolver.to_mutation("signOut", None, None).unwrap();
    assert_eq!(
        serde_json::to_value(&sign_out).unwrap(),
        serde_json::json!({
            "kind": "mutation",
            "operationName": "signOut",
            "inputType": null,
            "rootType": null,
            "level": null,
            "selection": null
        })
    );
}

#[test]
fn builders_surface_resolution_errors() {
    let t = table([EntityDefinition::new("Loop")
        .full(FieldMap::new().reference("me", Reference::full("Loop")))]);
    let resolver = Resolver::new(&t);
    assert!(resolver.to_query("loop", None, "Loop", Level::Full).is_err());
    assert!(resolver.to_search("loops", "LoopFilter", "Loop").is_err());
    // Levels that never reach the cycle still build.
    assert!(resolver.to_query("loop", None, "Loop", Level::Nav).is_ok());
}
