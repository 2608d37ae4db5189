//! Notes, comment threads, and reactions.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![note(), comment(), thread(), reaction(), mention()]
}

fn note() -> EntityDefinition {
    EntityDefinition::new("Note")
        .common(FieldMap::new().scalars(["id", "title", "createdAt"]))
        .list(
            FieldMap::new()
                .scalar("excerpt")
                .reference("author", Reference::nav("User"))
                .union(
                    "subject",
                    UnionSpec::new().shared("Api", 0).shared("ApiVersion", 1),
                )
                .define(0, Reference::nav("Api"))
                .define(1, Reference::nav("ApiVersion")),
        )
        .full(
            FieldMap::new()
                .scalars(["body", "updatedAt", "pinned"])
                .reference("author", Reference::list("User"))
                .union(
                    "subject",
                    UnionSpec::new().shared("Api", 0).shared("ApiVersion", 1),
                )
                .reference("comments", Reference::list("Comment").omit(["subject"]))
                .define(0, Reference::list("Api"))
                .define(1, Reference::nav("ApiVersion")),
        )
}

fn comment() -> EntityDefinition {
    EntityDefinition::new("Comment")
        .common(
            FieldMap::new()
                .scalars(["id", "body", "createdAt"])
                .reference("author", Reference::nav("User")),
        )
        .list(
            FieldMap::new()
                .scalar("replyCount")
                .inline("reactionSummary", FieldMap::new().scalars(["emoji", "count"]))
                .union("subject", UnionSpec::new().shared("Api", 0).shared("Note", 1))
                .define(0, Reference::nav("Api"))
                .define(1, Reference::nav("Note")),
        )
        .full(
            FieldMap::new()
                .scalars(["updatedAt", "editedAt", "replyCount"])
                .union(
                    "subject",
                    UnionSpec::new()
                        .shared("Api", 0)
                        .shared("Note", 1)
                        .shared("ApiVersion", 2),
                )
                .reference("parent", Reference::nav("Comment"))
                .reference("thread", Reference::nav("Thread"))
                .reference("reactions", Reference::list("Reaction").omit(["comment"]))
                .define(0, Reference::list("Api"))
                .define(1, Reference::list("Note"))
                .define(2, Reference::nav("ApiVersion")),
        )
}

fn thread() -> EntityDefinition {
    EntityDefinition::new("Thread")
        .common(FieldMap::new().scalars(["id", "title", "resolved"]))
        .list(FieldMap::new().scalars(["commentCount", "lastActivityAt"]))
        .full(
            FieldMap::new()
                .scalars(["commentCount", "lastActivityAt", "createdAt"])
                .union("subject", UnionSpec::new().shared("Api", 0).shared("Note", 1))
                .reference("comments", Reference::list("Comment").omit(["subject"]))
                .reference("participants", Reference::nav("User"))
                .define(0, Reference::nav("Api"))
                .define(1, Reference::nav("Note")),
        )
}

fn reaction() -> EntityDefinition {
    EntityDefinition::new("Reaction")
        .common(FieldMap::new().scalars(["id", "emoji", "createdAt"]))
        .full(
            FieldMap::new()
                .reference("user", Reference::nav("User"))
                .reference("comment", Reference::nav("Comment")),
        )
}

fn mention() -> EntityDefinition {
    EntityDefinition::new("Mention")
        .common(FieldMap::new().scalars(["id", "createdAt"]))
        .full(
            FieldMap::new()
                .reference("mentioned", Reference::nav("User"))
                .union(
                    "source",
                    UnionSpec::new().shared("Comment", 0).shared("Note", 1),
                )
                .define(0, Reference::nav("Comment"))
                .define(1, Reference::nav("Note")),
        )
}
