//! Notifications, audit trail, and outgoing webhooks.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![notification(), audit_event(), webhook(), webhook_delivery()]
}

fn notification() -> EntityDefinition {
    EntityDefinition::new("Notification")
        .common(FieldMap::new().scalars(["id", "kind", "read", "createdAt"]))
        .list(FieldMap::new().scalar("summary"))
        .full(
            FieldMap::new()
                .scalar("summary")
                .reference("actor", Reference::nav("User"))
                .union(
                    "target",
                    UnionSpec::new()
                        .member("Comment", Reference::nav("Comment"))
                        .member("Note", Reference::nav("Note"))
                        .member("Transfer", Reference::list("Transfer"))
                        .member("Invitation", Reference::list("Invitation")),
                ),
        )
}

fn audit_event() -> EntityDefinition {
    EntityDefinition::new("AuditEvent")
        .common(FieldMap::new().scalars(["id", "action", "occurredAt"]))
        .list(FieldMap::new().reference("actor", Reference::nav("User")))
        .full(
            FieldMap::new()
                .scalars(["ipAddress", "metadata"])
                .reference("actor", Reference::nav("User"))
                .reference("organization", Reference::nav("Organization"))
                .union(
                    "target",
                    UnionSpec::new()
                        .member("Api", Reference::nav("Api"))
                        .member("Role", Reference::nav("Role"))
                        .member("ApiKey", Reference::list("ApiKey")),
                ),
        )
}

fn webhook() -> EntityDefinition {
    EntityDefinition::new("Webhook")
        .common(FieldMap::new().scalars(["id", "url", "active"]))
        .list(FieldMap::new().scalar("events"))
        .full(
            FieldMap::new()
                .scalars(["events", "secretPreview", "createdAt"])
                .fragment("lastDelivery", 0)
                .reference(
                    "deliveries",
                    Reference::list("WebhookDelivery").omit(["webhook"]),
                )
                .union(
                    "owner",
                    UnionSpec::new().shared("User", 1).shared("Organization", 2),
                )
                .define(0, Reference::full("WebhookDelivery").omit(["webhook"]))
                .define(1, Reference::nav("User"))
                .define(2, Reference::nav("Organization")),
        )
}

fn webhook_delivery() -> EntityDefinition {
    EntityDefinition::new("WebhookDelivery")
        .common(FieldMap::new().scalars(["id", "statusCode", "deliveredAt"]))
        .list(FieldMap::new().scalar("durationMs"))
        .full(
            FieldMap::new()
                .scalars(["durationMs", "requestBody", "responseBody"])
                .reference("webhook", Reference::nav("Webhook")),
        )
}
