use super::*;
use shapeset::entities;

#[test]
fn builtin_table_validates() {
    let errors = entities::builtin().unwrap().validate();
    assert!(errors.is_empty(), "validation errors: {errors:?}");
}

#[test]
fn every_builtin_entity_resolves_at_every_level() {
    let table = entities::builtin().unwrap();
    let report = Resolver::new(table).check_all();
    let failures: Vec<String> = report
        .failures()
        .map(|(entry, err)| format!("{}/{}: {}", entry.entity, entry.level, err))
        .collect();
    assert!(failures.is_empty(), "failures: {failures:#?}");
    assert_eq!(report.entries.len(), table.len() * 3);
}

#[test]
fn builtin_role_and_organization_break_their_cycle() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let role = resolver.resolve("Role", Level::Full).unwrap();
    assert!(role.child("organization").is_some());
    assert_eq!(role.at("organization.roles"), None);

    let org = resolver.resolve("Organization", Level::Full).unwrap();
    assert!(org.child("roles").is_some());
    assert_eq!(org.at("roles.organization"), None);
}

#[test]
fn builtin_comment_subject_matches_referenced_lists() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let comment = resolver.resolve("Comment", Level::Full).unwrap();
    let subject = comment.variants("subject").unwrap();
    assert_eq!(
        subject.keys().collect::<Vec<_>>(),
        ["Api", "Note", "ApiVersion"]
    );
    assert_eq!(subject["Api"], resolver.resolve("Api", Level::List).unwrap());
    assert_eq!(subject["Note"], resolver.resolve("Note", Level::List).unwrap());
}

#[test]
fn builtin_transfer_sides_share_a_shape() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    for level in [Level::List, Level::Full] {
        let transfer = resolver.resolve("Transfer", level).unwrap();
        assert_eq!(transfer.variants("from"), transfer.variants("to"));
    }
}

#[test]
fn builtin_tag_has_only_a_full_level() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    assert!(resolver.resolve("Tag", Level::List).unwrap().is_empty());
    assert_eq!(
        resolver.resolve("Tag", Level::Full).unwrap(),
        leaves(&["id", "tag"])
    );
}

#[test]
fn builtin_session_uses_its_wire_type() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let op = resolver
        .to_mutation("signIn", Some("SignInInput"), Some(("Session", Level::Full)))
        .unwrap();
    assert_eq!(op.root_type(), Some("AuthPayload"));
    assert!(op.selection().unwrap().at("user.settings.theme").is_some());
}

#[test]
fn builtin_sign_out_payload_is_the_same_at_every_level() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    for level in Level::ALL {
        assert_eq!(
            resolver.resolve("SignOutPayload", level).unwrap(),
            leaves(&["success"])
        );
    }
}

#[test]
fn builtin_key_rotation_is_empty_outside_full() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    assert!(resolver.resolve("KeyRotation", Level::List).unwrap().is_empty());
    assert!(resolver.resolve("KeyRotation", Level::Nav).unwrap().is_empty());
    let full = resolver.resolve("KeyRotation", Level::Full).unwrap();
    assert!(full.at("current.owner").is_some());
}

#[test]
fn builtin_search_hit_node_covers_every_searchable_type() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let hit = resolver.resolve("SearchHit", Level::Full).unwrap();
    let node = hit.variants("node").unwrap();
    assert_eq!(
        node.keys().collect::<Vec<_>>(),
        ["Api", "Collection", "User", "Organization"]
    );
    assert_eq!(node["User"], resolver.resolve("User", Level::List).unwrap());
    assert_eq!(hit.at("highlight.snippet"), Some(&Selection::Leaf));
}

#[test]
fn builtin_incident_updates_do_not_point_back() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let incident = resolver.resolve("Incident", Level::Full).unwrap();
    assert!(incident.at("updates.author.username").is_some());
    assert_eq!(incident.at("updates.incident"), None);
}

#[test]
fn builtin_payload_wraps_entity_only_in_full() {
    let resolver = Resolver::new(entities::builtin().unwrap());
    let list = resolver.resolve("CommentPayload", Level::List).unwrap();
    assert_eq!(list, leaves(&["success", "lastSyncId"]));
    let full = resolver.resolve("CommentPayload", Level::Full).unwrap();
    assert_eq!(
        full.child("comment"),
        Some(&resolver.resolve("Comment", Level::Full).unwrap())
    );
}
