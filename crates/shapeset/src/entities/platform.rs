//! Search, feeds, usage metering, incidents, and teams.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![
        page_info(),
        api_connection(),
        search_hit(),
        feed_item(),
        follow(),
        attachment(),
        usage_record(),
        rate_limit(),
        quota(),
        key_rotation(),
        export(),
        changelog(),
        incident(),
        incident_update(),
        announcement(),
        saved_search(),
        team(),
        team_membership(),
        badge(),
    ]
}

fn page_info() -> EntityDefinition {
    EntityDefinition::new("PageInfo").common(FieldMap::new().scalars([
        "hasNextPage",
        "hasPreviousPage",
        "startCursor",
        "endCursor",
    ]))
}

fn api_connection() -> EntityDefinition {
    EntityDefinition::new("ApiConnection")
        .common(FieldMap::new().reference("pageInfo", Reference::full("PageInfo")))
        .list(FieldMap::new().reference("nodes", Reference::nav("Api")))
        .full(
            FieldMap::new()
                .scalar("totalCount")
                .reference("nodes", Reference::list("Api")),
        )
}

fn search_hit() -> EntityDefinition {
    let node = || {
        UnionSpec::new()
            .shared("Api", 0)
            .shared("Collection", 1)
            .shared("User", 2)
            .shared("Organization", 3)
    };
    EntityDefinition::new("SearchHit")
        .common(FieldMap::new().scalar("score"))
        .list(
            FieldMap::new()
                .union("node", node())
                .define(0, Reference::nav("Api"))
                .define(1, Reference::nav("Collection"))
                .define(2, Reference::nav("User"))
                .define(3, Reference::nav("Organization")),
        )
        .full(
            FieldMap::new()
                .inline("highlight", FieldMap::new().scalars(["field", "snippet"]))
                .union("node", node())
                .define(0, Reference::list("Api"))
                .define(1, Reference::list("Collection"))
                .define(2, Reference::list("User"))
                .define(3, Reference::list("Organization")),
        )
}

fn feed_item() -> EntityDefinition {
    let item = || {
        UnionSpec::new()
            .shared("Note", 0)
            .shared("Comment", 1)
            .shared("Review", 2)
    };
    EntityDefinition::new("FeedItem")
        .common(FieldMap::new().scalars(["id", "occurredAt"]))
        .list(
            FieldMap::new()
                .union("item", item())
                .define(0, Reference::nav("Note"))
                .define(1, Reference::nav("Comment"))
                .define(2, Reference::nav("Review")),
        )
        .full(
            FieldMap::new()
                .reference("actor", Reference::nav("User"))
                .union("item", item())
                .define(0, Reference::list("Note"))
                .define(1, Reference::list("Comment"))
                .define(2, Reference::list("Review")),
        )
}

fn follow() -> EntityDefinition {
    EntityDefinition::new("Follow")
        .common(FieldMap::new().scalars(["id", "createdAt"]))
        .full(
            FieldMap::new()
                .reference("follower", Reference::nav("User"))
                .union(
                    "target",
                    UnionSpec::new()
                        .shared("User", 0)
                        .shared("Organization", 1)
                        .member("Api", Reference::nav("Api")),
                )
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
}

fn attachment() -> EntityDefinition {
    EntityDefinition::new("Attachment")
        .common(FieldMap::new().scalars(["id", "fileName", "contentType", "size"]))
        .full(
            FieldMap::new()
                .scalars(["url", "createdAt"])
                .reference("uploadedBy", Reference::nav("User"))
                .union("parent", UnionSpec::new().shared("Note", 0).shared("Comment", 1))
                .define(0, Reference::nav("Note"))
                .define(1, Reference::nav("Comment")),
        )
}

fn usage_record() -> EntityDefinition {
    EntityDefinition::new("UsageRecord")
        .common(FieldMap::new().scalars(["id", "period", "calls", "errors"]))
        .full(
            FieldMap::new()
                .scalars(["p50Ms", "p99Ms"])
                .reference("api", Reference::nav("Api"))
                .reference("apiKey", Reference::nav("ApiKey")),
        )
}

fn rate_limit() -> EntityDefinition {
    EntityDefinition::new("RateLimit")
        .common(FieldMap::new().scalars(["limit", "remaining", "resetAt"]))
}

fn quota() -> EntityDefinition {
    EntityDefinition::new("Quota")
        .common(FieldMap::new().scalars(["id", "limit", "period"]))
        .full(
            FieldMap::new()
                .scalar("used")
                .reference("plan", Reference::nav("Plan"))
                .reference("rateLimit", Reference::full("RateLimit")),
        )
}

/// Only meaningful in full; `list` and `nav` resolve to nothing.
fn key_rotation() -> EntityDefinition {
    EntityDefinition::new("KeyRotation").full(
        FieldMap::new()
            .scalars(["id", "rotatedAt"])
            .reference("previous", Reference::nav("ApiKey"))
            .reference("current", Reference::full("ApiKey")),
    )
}

fn export() -> EntityDefinition {
    EntityDefinition::new("Export")
        .root_type("DataExport")
        .common(FieldMap::new().scalars(["id", "status", "createdAt"]))
        .full(
            FieldMap::new()
                .scalars(["format", "url", "expiresAt"])
                .reference("requestedBy", Reference::nav("User")),
        )
}

fn changelog() -> EntityDefinition {
    EntityDefinition::new("Changelog")
        .common(FieldMap::new().scalars(["id", "version", "releasedAt"]))
        .full(
            FieldMap::new()
                .scalar("notes")
                .reference("apiVersion", Reference::nav("ApiVersion")),
        )
}

fn incident() -> EntityDefinition {
    EntityDefinition::new("Incident")
        .common(FieldMap::new().scalars(["id", "title", "status", "startedAt"]))
        .list(FieldMap::new().scalar("severity"))
        .full(
            FieldMap::new()
                .scalars(["severity", "resolvedAt"])
                .reference("affected", Reference::nav("Endpoint"))
                .reference("updates", Reference::list("IncidentUpdate").omit(["incident"])),
        )
}

fn incident_update() -> EntityDefinition {
    EntityDefinition::new("IncidentUpdate")
        .common(FieldMap::new().scalars(["id", "body", "createdAt"]))
        .list(FieldMap::new().reference("author", Reference::nav("User")))
        .full(
            FieldMap::new()
                .reference("author", Reference::nav("User"))
                .reference("incident", Reference::list("Incident")),
        )
}

fn announcement() -> EntityDefinition {
    EntityDefinition::new("Announcement")
        .common(FieldMap::new().scalars(["id", "title", "publishedAt"]))
        .full(
            FieldMap::new()
                .scalar("body")
                .reference("author", Reference::nav("User"))
                .reference("organization", Reference::nav("Organization")),
        )
}

fn saved_search() -> EntityDefinition {
    EntityDefinition::new("SavedSearch")
        .common(FieldMap::new().scalars(["id", "name", "query"]))
        .full(
            FieldMap::new()
                .reference("owner", Reference::nav("User"))
                .inline(
                    "filters",
                    FieldMap::new()
                        .scalar("visibility")
                        .reference("category", Reference::nav("Category"))
                        .reference("tags", Reference::full("Tag")),
                ),
        )
}

fn team() -> EntityDefinition {
    EntityDefinition::new("Team")
        .common(FieldMap::new().scalars(["id", "name", "slug"]))
        .list(FieldMap::new().scalar("memberCount"))
        .full(
            FieldMap::new()
                .scalars(["memberCount", "createdAt"])
                .reference("organization", Reference::nav("Organization"))
                .reference("members", Reference::list("User")),
        )
}

fn team_membership() -> EntityDefinition {
    EntityDefinition::new("TeamMembership")
        .common(FieldMap::new().scalars(["id", "joinedAt"]))
        .full(
            FieldMap::new()
                .reference("team", Reference::nav("Team"))
                .reference("user", Reference::nav("User"))
                .reference("role", Reference::nav("Role")),
        )
}

fn badge() -> EntityDefinition {
    EntityDefinition::new("Badge").full(FieldMap::new().scalars(["id", "name", "icon"]))
}
