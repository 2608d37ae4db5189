use super::*;

// ── Tag: a single level, no common group ────────────────────────────────────

#[test]
fn tag_list_is_empty_but_present() {
    let t = table([EntityDefinition::new("Tag").full(FieldMap::new().scalars(["id", "tag"]))]);
    let resolver = Resolver::new(&t);
    let list = resolver.resolve("Tag", Level::List).unwrap();
    assert!(list.is_empty());
    assert_eq!(serde_json::to_value(&list).unwrap(), serde_json::json!({}));
}

#[test]
fn tag_full_selects_both_scalars() {
    let t = table([EntityDefinition::new("Tag").full(FieldMap::new().scalars(["id", "tag"]))]);
    let full = Resolver::new(&t).resolve("Tag", Level::Full).unwrap();
    assert_eq!(full, leaves(&["id", "tag"]));
}

// ── Role ↔ Organization: a real cycle broken by omit sets ──────────────────

#[test]
fn role_full_terminates_without_organization_roles() {
    let t = role_and_organization();
    let role = Resolver::new(&t).resolve("Role", Level::Full).unwrap();
    let organization = role.child("organization").expect("organization selected");
    assert!(organization.contains("slug"));
    assert!(organization.contains("name"));
    assert!(!organization.contains("roles"));
    assert_eq!(role.at("organization.roles"), None);
}

#[test]
fn organization_full_terminates_without_nested_roles() {
    let t = role_and_organization();
    let org = Resolver::new(&t).resolve("Organization", Level::Full).unwrap();
    let roles = org.child("roles").expect("roles selected");
    assert!(roles.contains("permissions"));
    assert!(!roles.contains("organization"));
    assert_eq!(org.at("roles.organization.roles"), None);
}

#[test]
fn organization_nav_terminates_through_role_full() {
    // Organization/nav → roles: Role/full minus organization.
    let t = role_and_organization();
    let org = Resolver::new(&t).resolve("Organization", Level::Nav).unwrap();
    assert_eq!(
        serde_json::to_value(&org).unwrap(),
        serde_json::json!({
            "id": true,
            "slug": true,
            "name": true,
            "roles": { "id": true, "name": true, "permissions": true }
        })
    );
}

// ── Union through a shared fragment table ──────────────────────────────────

fn subject_table() -> DefinitionTable {
    table([
        EntityDefinition::new("Api")
            .common(FieldMap::new().scalars(["id", "slug"]))
            .list(FieldMap::new().scalar("summary")),
        EntityDefinition::new("Note")
            .common(FieldMap::new().scalars(["id", "title"]))
            .list(FieldMap::new().scalar("excerpt")),
        EntityDefinition::new("Comment").full(
            FieldMap::new()
                .scalar("id")
                .union("subject", UnionSpec::new().shared("Api", 0).shared("Note", 1))
                .define(0, Reference::list("Api"))
                .define(1, Reference::list("Note")),
        ),
    ])
}

#[test]
fn union_resolves_each_branch_through_its_fragment() {
    let t = subject_table();
    let resolver = Resolver::new(&t);
    let comment = resolver.resolve("Comment", Level::Full).unwrap();
    let subject = comment.variants("subject").expect("subject is a union");

    assert_eq!(subject.len(), 2);
    assert_eq!(subject["Api"], resolver.resolve("Api", Level::List).unwrap());
    assert_eq!(subject["Note"], resolver.resolve("Note", Level::List).unwrap());
    assert_eq!(
        serde_json::to_value(&comment).unwrap(),
        serde_json::json!({
            "id": true,
            "subject": {
                "... on Api": { "id": true, "slug": true, "summary": true },
                "... on Note": { "id": true, "title": true, "excerpt": true }
            }
        })
    );
}
