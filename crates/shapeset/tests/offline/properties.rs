use super::*;
use shapeset::{ResolverOptions, ShapeError};

// ── Merge precedence ────────────────────────────────────────────────────────

#[test]
fn level_entry_wins_over_common_entry() {
    let t = table([
        EntityDefinition::new("User").common(FieldMap::new().scalars(["id", "username"])),
        EntityDefinition::new("Api")
            .common(FieldMap::new().scalars(["id", "owner"]))
            .full(FieldMap::new().reference("owner", Reference::nav("User"))),
    ]);
    let resolver = Resolver::new(&t);

    let full = resolver.resolve("Api", Level::Full).unwrap();
    assert_eq!(full.child("owner"), Some(&leaves(&["id", "username"])));

    let list = resolver.resolve("Api", Level::List).unwrap();
    assert_eq!(list.get("owner"), Some(&Selection::Leaf));
}

#[test]
fn overriding_field_keeps_common_position() {
    let t = table([EntityDefinition::new("Api")
        .common(FieldMap::new().scalars(["id", "name", "slug"]))
        .full(FieldMap::new().scalar("summary").inline("name", FieldMap::new().scalar("en")))]);
    let full = Resolver::new(&t).resolve("Api", Level::Full).unwrap();
    assert_eq!(full.names().collect::<Vec<_>>(), ["id", "name", "slug", "summary"]);
    assert_eq!(full.at("name.en"), Some(&Selection::Leaf));
}

// ── Level fallback ──────────────────────────────────────────────────────────

#[test]
fn undefined_level_falls_back_to_common() {
    let t = table([
        EntityDefinition::new("User").common(FieldMap::new().scalar("id")),
        EntityDefinition::new("Category")
            .common(
                FieldMap::new()
                    .scalars(["id", "name"])
                    .reference("curator", Reference::nav("User")),
            )
            .full(FieldMap::new().scalar("description")),
    ]);
    let resolver = Resolver::new(&t);
    let nav = resolver.resolve("Category", Level::Nav).unwrap();
    let list = resolver.resolve("Category", Level::List).unwrap();
    assert_eq!(nav, list);
    assert_eq!(nav.names().collect::<Vec<_>>(), ["id", "name", "curator"]);
}

#[test]
fn entity_without_groups_resolves_to_empty_node() {
    let t = table([EntityDefinition::new("Marker")]);
    let resolver = Resolver::new(&t);
    for level in Level::ALL {
        assert!(resolver.resolve("Marker", level).unwrap().is_empty());
    }
}

// ── Omit ────────────────────────────────────────────────────────────────────

#[test]
fn omitted_field_absent_whether_or_not_level_defines_it() {
    let t = role_and_organization();
    let resolver = Resolver::new(&t);

    let with_roles = resolver
        .resolve_omitting("Organization", Level::List, ["roles"])
        .unwrap();
    assert!(!with_roles.contains("roles"));
    assert!(with_roles.contains("memberCount"));

    let role = resolver.resolve("Role", Level::Full).unwrap();
    assert!(!role.child("organization").unwrap().contains("roles"));
}

#[test]
fn omit_of_unknown_field_is_ignored() {
    let t = role_and_organization();
    let resolver = Resolver::new(&t);
    let plain = resolver.resolve("Role", Level::Full).unwrap();
    let omitted = resolver
        .resolve_omitting("Role", Level::Full, ["doesNotExist"])
        .unwrap();
    assert_eq!(plain, omitted);
}

#[test]
fn omit_applies_to_top_level_only() {
    let t = role_and_organization();
    let org = Resolver::new(&t)
        .resolve_omitting("Organization", Level::Full, ["website"])
        .unwrap();
    assert!(!org.contains("website"));
    assert!(org.child("roles").unwrap().contains("name"));
}

// ── Fragment sharing ────────────────────────────────────────────────────────

#[test]
fn fields_sharing_a_fragment_resolve_identically() {
    let t = table([
        EntityDefinition::new("User").common(FieldMap::new().scalars(["id", "username"])),
        EntityDefinition::new("Organization").common(FieldMap::new().scalars(["id", "slug"])),
        EntityDefinition::new("Transfer").full(
            FieldMap::new()
                .union("from", UnionSpec::new().shared("User", 0).shared("Organization", 1))
                .union("to", UnionSpec::new().shared("User", 0).shared("Organization", 1))
                .fragment("initiatedBy", 0)
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        ),
    ]);
    let transfer = Resolver::new(&t).resolve("Transfer", Level::Full).unwrap();
    assert_eq!(transfer.variants("from"), transfer.variants("to"));
    assert_eq!(
        transfer.child("initiatedBy"),
        transfer.variants("from").map(|v| &v["User"])
    );
}

#[test]
fn dangling_fragment_reports_entity_and_path() {
    let t = table([EntityDefinition::new("Note").list(
        FieldMap::new()
            .scalar("id")
            .union("subject", UnionSpec::new().shared("Api", 3)),
    )]);
    let err = Resolver::new(&t).resolve("Note", Level::List).unwrap_err();
    assert_eq!(
        err,
        ShapeError::DanglingFragmentReference {
            entity: "Note".to_string(),
            path: vec!["list".to_string(), "subject".to_string(), "Api".to_string()],
            index: 3,
        }
    );
}

#[test]
fn fragment_defined_in_common_is_not_visible_to_level() {
    let t = table([
        EntityDefinition::new("User").common(FieldMap::new().scalar("id")),
        EntityDefinition::new("Api")
            .common(FieldMap::new().scalar("id").define(0, Reference::nav("User")))
            .full(FieldMap::new().fragment("owner", 0)),
    ]);
    let err = Resolver::new(&t).resolve("Api", Level::Full).unwrap_err();
    assert!(matches!(
        err,
        ShapeError::DanglingFragmentReference { index: 0, .. }
    ));
}

// ── Union completeness ──────────────────────────────────────────────────────

#[test]
fn union_output_has_exactly_the_declared_types() {
    let t = table([
        EntityDefinition::new("User").common(FieldMap::new().scalar("id")),
        EntityDefinition::new("Bot"),
    ]);
    let owner = FieldMap::new().define(0, Reference::nav("User"));
    let union = UnionSpec::new()
        .shared("User", 0)
        .member("Bot", Reference::nav("Bot"))
        .shared("Admin", 0);
    let variants = Resolver::new(&t).resolve_union("Api", &union, &owner).unwrap();
    assert_eq!(variants.keys().collect::<Vec<_>>(), ["User", "Bot", "Admin"]);
    // Empty branches are kept, not dropped.
    assert!(variants["Bot"].is_empty());
}

// ── Idempotence ─────────────────────────────────────────────────────────────

#[test]
fn resolving_twice_is_structurally_identical() {
    let t = role_and_organization();
    let memo = Resolver::new(&t);
    let fresh = Resolver::with_options(
        &t,
        ResolverOptions {
            memoize: false,
            ..ResolverOptions::default()
        },
    );
    for entity in ["Role", "Organization"] {
        for level in Level::ALL {
            let first = memo.resolve(entity, level).unwrap();
            let second = memo.resolve(entity, level).unwrap();
            assert_eq!(first, second);
            assert_eq!(first, fresh.resolve(entity, level).unwrap());
            assert_eq!(first, fresh.resolve(entity, level).unwrap());
        }
    }
}

// ── Cycles ──────────────────────────────────────────────────────────────────

#[test]
fn unbroken_mutual_cycle_is_reported() {
    let t = table([
        EntityDefinition::new("Role")
            .common(FieldMap::new().scalar("id"))
            .full(FieldMap::new().reference("organization", Reference::full("Organization"))),
        EntityDefinition::new("Organization")
            .common(FieldMap::new().scalar("id"))
            .full(FieldMap::new().reference("roles", Reference::full("Role"))),
    ]);
    let err = Resolver::new(&t).resolve("Role", Level::Full).unwrap_err();
    assert_eq!(
        err,
        ShapeError::UnterminatedCycle {
            path: vec![
                "Role/full".to_string(),
                "Organization/full".to_string(),
                "Role/full".to_string(),
            ]
        }
    );
}

#[test]
fn same_entity_at_different_keys_is_not_a_cycle() {
    // Category/full → parent: Category/full minus parent.
    let t = table([EntityDefinition::new("Category")
        .common(FieldMap::new().scalar("id"))
        .full(
            FieldMap::new()
                .scalar("name")
                .reference("parent", Reference::full("Category").omit(["parent"])),
        )]);
    let node = Resolver::new(&t).resolve("Category", Level::Full).unwrap();
    assert_eq!(node.at("parent.name"), Some(&Selection::Leaf));
    assert_eq!(node.at("parent.parent"), None);
}

#[test]
fn ad_hoc_definition_may_reference_its_table_namesake() {
    let t = table([EntityDefinition::new("Api").full(FieldMap::new().scalar("id"))]);
    let adhoc = EntityDefinition::new("Api")
        .full(FieldMap::new().reference("base", Reference::full("Api")));
    let node = Resolver::new(&t)
        .resolve_definition(&adhoc, Level::Full, &[])
        .unwrap();
    let mut expected = SelectionNode::new();
    expected.insert("base", Selection::Object(leaves(&["id"])));
    assert_eq!(node, expected);
}

#[test]
fn ad_hoc_definition_still_sees_cycles_inside_the_table() {
    let t = table([EntityDefinition::new("Api")
        .full(FieldMap::new().reference("base", Reference::full("Api")))]);
    let adhoc = EntityDefinition::new("Api")
        .full(FieldMap::new().reference("base", Reference::full("Api")));
    let err = Resolver::new(&t)
        .resolve_definition(&adhoc, Level::Full, &[])
        .unwrap_err();
    assert_eq!(
        err,
        ShapeError::UnterminatedCycle {
            path: vec!["Api/full".to_string(), "Api/full".to_string()]
        }
    );
}
