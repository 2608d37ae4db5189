//! Plans, subscriptions, invoices, and ownership transfers.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![plan(), subscription(), invoice(), transfer()]
}

fn party() -> UnionSpec {
    UnionSpec::new().shared("User", 0).shared("Organization", 1)
}

fn plan() -> EntityDefinition {
    EntityDefinition::new("Plan")
        .common(FieldMap::new().scalars(["id", "name", "priceCents", "currency", "interval"]))
        .full(
            FieldMap::new()
                .scalars(["description", "features"])
                .inline("limits", FieldMap::new().scalars(["requestsPerMonth", "seats"]))
                .reference("api", Reference::nav("Api")),
        )
}

fn subscription() -> EntityDefinition {
    EntityDefinition::new("Subscription")
        .common(FieldMap::new().scalars(["id", "status", "startedAt", "renewsAt"]))
        .list(FieldMap::new().reference("plan", Reference::nav("Plan")))
        .full(
            FieldMap::new()
                .scalar("canceledAt")
                .reference("plan", Reference::full("Plan"))
                .union("subscriber", party())
                .inline(
                    "usage",
                    FieldMap::new().scalars(["requests", "periodStart", "periodEnd"]),
                )
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
}

fn invoice() -> EntityDefinition {
    EntityDefinition::new("Invoice")
        .common(FieldMap::new().scalars(["id", "number", "amountCents", "currency", "status"]))
        .list(FieldMap::new().scalar("issuedAt"))
        .full(
            FieldMap::new()
                .scalars(["issuedAt", "paidAt", "pdfUrl"])
                .inline(
                    "lineItems",
                    FieldMap::new().scalars(["description", "amountCents", "quantity"]),
                )
                .reference("subscription", Reference::list("Subscription")),
        )
}

/// Moving an API between accounts. `from` and `to` share fragments, so
/// both sides always select the same fields.
fn transfer() -> EntityDefinition {
    EntityDefinition::new("Transfer")
        .common(FieldMap::new().scalars(["id", "status", "createdAt"]))
        .list(
            FieldMap::new()
                .reference("api", Reference::nav("Api"))
                .union("from", party())
                .union("to", party())
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
        .full(
            FieldMap::new()
                .scalars(["message", "acceptedAt", "rejectedAt"])
                .reference("api", Reference::list("Api"))
                .union("from", party())
                .union("to", party())
                .reference("initiatedBy", Reference::nav("User"))
                .define(0, Reference::list("User"))
                .define(1, Reference::list("Organization")),
        )
}
