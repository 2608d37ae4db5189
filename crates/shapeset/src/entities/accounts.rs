//! Users, organizations, and access.

use crate::{EntityDefinition, FieldMap, Reference, UnionSpec};

pub(super) fn definitions() -> Vec<EntityDefinition> {
    vec![
        user(),
        organization(),
        role(),
        invitation(),
        session(),
        api_key(),
        ai_service_config(),
        ack(),
    ]
}

fn user() -> EntityDefinition {
    EntityDefinition::new("User")
        .common(FieldMap::new().scalars(["id", "username", "displayName", "avatarUrl"]))
        .list(FieldMap::new().scalars(["bio", "createdAt"]))
        .full(
            FieldMap::new()
                .scalars(["bio", "email", "website", "createdAt", "updatedAt"])
                .inline(
                    "settings",
                    FieldMap::new().scalars(["theme", "locale", "emailNotifications"]),
                )
                .reference("roles", Reference::list("Role").omit(["user"])),
        )
}

fn organization() -> EntityDefinition {
    EntityDefinition::new("Organization")
        .common(FieldMap::new().scalars(["id", "slug", "name", "logoUrl"]))
        .list(FieldMap::new().scalars(["description", "memberCount", "verified"]))
        .full(
            FieldMap::new()
                .scalars([
                    "description",
                    "website",
                    "memberCount",
                    "verified",
                    "createdAt",
                ])
                .reference("owner", Reference::nav("User"))
                .reference("roles", Reference::full("Role").omit(["organization"])),
        )
}

fn role() -> EntityDefinition {
    EntityDefinition::new("Role")
        .common(
            FieldMap::new()
                .scalars(["id", "name", "permissions"])
                .reference(
                    "organization",
                    Reference::nav("Organization").omit(["roles"]),
                ),
        )
        .full(
            FieldMap::new()
                .scalar("createdAt")
                .reference("user", Reference::nav("User"))
                .reference("grantedBy", Reference::nav("User")),
        )
}

fn invitation() -> EntityDefinition {
    EntityDefinition::new("Invitation")
        .common(FieldMap::new().scalars(["id", "email", "status", "createdAt"]))
        .list(FieldMap::new().scalar("expiresAt"))
        .full(
            FieldMap::new()
                .scalars(["expiresAt", "acceptedAt"])
                .reference("role", Reference::nav("Role"))
                .reference("invitedBy", Reference::nav("User"))
                .reference("organization", Reference::list("Organization")),
        )
}

/// Payload of the sign-in and sign-up mutations.
fn session() -> EntityDefinition {
    EntityDefinition::new("Session")
        .root_type("AuthPayload")
        .common(FieldMap::new().scalars(["token", "expiresAt"]))
        .full(FieldMap::new().reference("user", Reference::full("User")))
}

fn api_key() -> EntityDefinition {
    EntityDefinition::new("ApiKey")
        .common(FieldMap::new().scalars(["id", "label", "prefix", "createdAt"]))
        .list(FieldMap::new().scalar("lastUsedAt"))
        .full(
            FieldMap::new()
                .scalars(["lastUsedAt", "expiresAt", "scopes"])
                .union(
                    "owner",
                    UnionSpec::new().shared("User", 0).shared("Organization", 1),
                )
                .define(0, Reference::nav("User"))
                .define(1, Reference::nav("Organization")),
        )
}

/// Stored model settings for the assistant features.
fn ai_service_config() -> EntityDefinition {
    EntityDefinition::new("AiServiceConfig")
        .common(FieldMap::new().scalars(["id", "provider", "model"]))
        .full(
            FieldMap::new()
                .scalars(["temperature", "maxTokens", "systemPrompt", "updatedAt"])
                .reference("owner", Reference::nav("User")),
        )
}

/// Generic success payload for mutations with nothing else to return.
fn ack() -> EntityDefinition {
    EntityDefinition::new("Ack")
        .root_type("OperationResult")
        .common(FieldMap::new().scalars(["success", "message"]))
}
