//! Mutation payloads: the wrappers writes hand back.
//!
//! Most carry a `success` flag in `common` and the touched entity in `full`,
//! so a caller can ask for just the flag with `list` or `nav`.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![
        sign_out_payload(),
        delete_payload(),
        api_payload(),
        note_payload(),
        comment_payload(),
        reaction_payload(),
        subscription_payload(),
        webhook_payload(),
        archive_payload(),
    ]
}

fn sign_out_payload() -> EntityDefinition {
    EntityDefinition::new("SignOutPayload").common(FieldMap::new().scalar("success"))
}

fn delete_payload() -> EntityDefinition {
    EntityDefinition::new("DeletePayload")
        .common(FieldMap::new().scalars(["success", "entityId", "lastSyncId"]))
}

fn api_payload() -> EntityDefinition {
    EntityDefinition::new("ApiPayload")
        .common(FieldMap::new().scalars(["success", "lastSyncId"]))
        .nav(FieldMap::new().reference("api", Reference::nav("Api")))
        .full(FieldMap::new().reference("api", Reference::full("Api")))
}

fn note_payload() -> EntityDefinition {
    EntityDefinition::new("NotePayload")
        .common(FieldMap::new().scalars(["success", "lastSyncId"]))
        .full(FieldMap::new().reference("note", Reference::full("Note")))
}

fn comment_payload() -> EntityDefinition {
    EntityDefinition::new("CommentPayload")
        .common(FieldMap::new().scalars(["success", "lastSyncId"]))
        .full(FieldMap::new().reference("comment", Reference::full("Comment")))
}

fn reaction_payload() -> EntityDefinition {
    EntityDefinition::new("ReactionPayload")
        .common(FieldMap::new().scalar("success"))
        .full(FieldMap::new().reference("reaction", Reference::full("Reaction")))
}

fn subscription_payload() -> EntityDefinition {
    EntityDefinition::new("SubscriptionPayload")
        .common(FieldMap::new().scalars(["success", "lastSyncId"]))
        .full(
            FieldMap::new()
                .reference("subscription", Reference::full("Subscription"))
                .reference("invoice", Reference::list("Invoice")),
        )
}

fn webhook_payload() -> EntityDefinition {
    EntityDefinition::new("WebhookPayload")
        .common(FieldMap::new().scalar("success"))
        .full(FieldMap::new().reference("webhook", Reference::full("Webhook")))
}

/// Archiving works on several entity kinds; the payload says which one.
fn archive_payload() -> EntityDefinition {
    let archived = || {
        UnionSpec::new()
            .shared("Api", 0)
            .shared("Note", 1)
            .shared("Collection", 2)
    };
    EntityDefinition::new("ArchivePayload")
        .common(FieldMap::new().scalars(["success", "lastSyncId"]))
        .list(
            FieldMap::new()
                .union("entity", archived())
                .define(0, Reference::nav("Api"))
                .define(1, Reference::nav("Note"))
                .define(2, Reference::nav("Collection")),
        )
        .full(
            FieldMap::new()
                .union("entity", archived())
                .define(0, Reference::list("Api"))
                .define(1, Reference::list("Note"))
                .define(2, Reference::list("Collection")),
        )
}
