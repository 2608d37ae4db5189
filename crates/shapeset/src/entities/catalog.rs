//! Published APIs and how they are organized.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![
        api(),
        api_version(),
        endpoint(),
        tag(),
        category(),
        collection(),
        star(),
        review(),
    ]
}

/// `owner: User | Organization`, shared by `list` and `full`.
fn owner_union() -> UnionSpec {
    UnionSpec::new().shared("User", 0).shared("Organization", 1)
}

fn api() -> EntityDefinition {
    EntityDefinition::new("Api")
        .common(FieldMap::new().scalars(["id", "slug", "name", "summary", "visibility"]))
        .list(
            FieldMap::new()
                .scalars(["logoUrl", "starCount", "updatedAt"])
                .reference("tags", Reference::full("Tag"))
                .reference("category", Reference::nav("Category"))
                .union("owner", owner_union())
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
        .full(
            FieldMap::new()
                .scalars([
                    "logoUrl",
                    "description",
                    "website",
                    "termsUrl",
                    "starCount",
                    "createdAt",
                    "updatedAt",
                ])
                .reference("tags", Reference::full("Tag"))
                .reference("category", Reference::full("Category"))
                .union("owner", owner_union())
                .reference("versions", Reference::list("ApiVersion").omit(["api"]))
                .reference("latestVersion", Reference::full("ApiVersion").omit(["api"]))
                .reference("reviews", Reference::list("Review"))
                .inline(
                    "stats",
                    FieldMap::new().scalars(["callsLast30Days", "errorRate", "p95LatencyMs"]),
                )
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
}

fn api_version() -> EntityDefinition {
    EntityDefinition::new("ApiVersion")
        .common(FieldMap::new().scalars(["id", "version", "status", "releasedAt"]))
        .list(FieldMap::new().scalar("changelogSummary"))
        .full(
            FieldMap::new()
                .scalars(["changelog", "specUrl"])
                .reference("api", Reference::nav("Api"))
                .reference("endpoints", Reference::list("Endpoint").omit(["version"])),
        )
}

fn endpoint() -> EntityDefinition {
    EntityDefinition::new("Endpoint")
        .common(FieldMap::new().scalars(["id", "method", "path", "summary"]))
        .list(FieldMap::new().scalar("deprecated"))
        .full(
            FieldMap::new()
                .scalars(["description", "deprecated", "requestSchema", "responseSchema"])
                .inline(
                    "parameters",
                    FieldMap::new().scalars(["name", "location", "required", "schema"]),
                )
                .reference("version", Reference::nav("ApiVersion")),
        )
}

fn tag() -> EntityDefinition {
    EntityDefinition::new("Tag").full(FieldMap::new().scalars(["id", "tag"]))
}

fn category() -> EntityDefinition {
    EntityDefinition::new("Category")
        .common(FieldMap::new().scalars(["id", "slug", "name"]))
        .full(
            FieldMap::new()
                .scalars(["description", "icon"])
                .reference("parent", Reference::nav("Category")),
        )
}

fn collection() -> EntityDefinition {
    EntityDefinition::new("Collection")
        .common(FieldMap::new().scalars(["id", "slug", "name"]))
        .list(
            FieldMap::new()
                .scalars(["description", "apiCount"])
                .union("owner", owner_union())
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
        .full(
            FieldMap::new()
                .scalars(["description", "apiCount", "createdAt"])
                .union("owner", owner_union())
                .reference("apis", Reference::list("Api"))
                .define(0, Reference::nav("User"))
                .define(1, Reference::list("Organization")),
        )
}

fn star() -> EntityDefinition {
    EntityDefinition::new("Star")
        .common(FieldMap::new().scalars(["id", "createdAt"]))
        .full(
            FieldMap::new()
                .reference("user", Reference::nav("User"))
                .reference("api", Reference::nav("Api")),
        )
}

fn review() -> EntityDefinition {
    EntityDefinition::new("Review")
        .common(FieldMap::new().scalars(["id", "rating", "title", "createdAt"]))
        .list(FieldMap::new().reference("author", Reference::nav("User")))
        .full(
            FieldMap::new()
                .scalars(["body", "updatedAt"])
                .reference("author", Reference::list("User"))
                .reference("api", Reference::nav("Api")),
        )
}
