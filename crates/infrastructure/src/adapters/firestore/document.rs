//! Mapping between `UserProfile` and Firestore's typed-value JSON.
//!
//! Stored documents may have been written by other clients, so reading is
//! lenient: a value that no longer passes validation is read as absent.

use carelink_domain::profile::{FieldUpdate, ProfilePatch, UserId, UserProfile, Username};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value as JsonValue, json};

pub const COLLECTION: &str = "users";

// =============================================================================
// Reading
// =============================================================================

fn string_field<'a>(fields: &'a JsonValue, name: &str) -> Option<&'a str> {
    fields.get(name)?.get("stringValue")?.as_str()
}

fn timestamp_field(fields: &JsonValue, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Reads a document resource into a profile for `user_id`.
#[must_use]
pub fn profile_from_document(user_id: UserId, document: &JsonValue) -> UserProfile {
    let Some(fields) = document.get("fields") else {
        return UserProfile::empty(user_id);
    };

    UserProfile {
        username: string_field(fields, "username").and_then(|raw| Username::new(raw).ok()),
        country: string_field(fields, "country").map(ToString::to_string),
        city: string_field(fields, "city").map(ToString::to_string),
        age: string_field(fields, "age").and_then(|raw| raw.parse().ok()),
        interest: string_field(fields, "interest").and_then(|raw| raw.parse().ok()),
        updated_at: timestamp_field(fields, "updatedAt"),
        user_id,
    }
}

/// Document id from a resource name such as
/// `projects/p/databases/(default)/documents/users/abc`.
#[must_use]
pub fn user_id_from_name(name: &str) -> Option<UserId> {
    name.rsplit('/').next().and_then(UserId::new)
}

// =============================================================================
// Writing
// =============================================================================

fn string_value(value: &str) -> JsonValue {
    json!({ "stringValue": value })
}

fn insert_set<T>(
    fields: &mut Map<String, JsonValue>,
    name: &str,
    update: &FieldUpdate<T>,
    render: impl Fn(&T) -> &str,
) {
    if let Some(value) = update.as_set() {
        fields.insert(name.to_string(), string_value(render(value)));
    }
}

/// Document body for a masked `PATCH`.
///
/// Cleared fields are left out of `fields`; since they are still listed in
/// the update mask, Firestore deletes them.
#[must_use]
pub fn patch_document(patch: &ProfilePatch, updated_at: DateTime<Utc>) -> JsonValue {
    let mut fields = Map::new();

    if let Some(username) = patch.username.as_set() {
        fields.insert("username".to_string(), string_value(username.value()));
        fields.insert(
            "usernameLower".to_string(),
            string_value(&username.canonical()),
        );
    }
    insert_set(&mut fields, "country", &patch.country, String::as_str);
    insert_set(&mut fields, "city", &patch.city, String::as_str);
    insert_set(&mut fields, "age", &patch.age, |age| age.as_str());
    insert_set(&mut fields, "interest", &patch.interest, |interest| interest.as_str());
    fields.insert(
        "updatedAt".to_string(),
        json!({ "timestampValue": updated_at.to_rfc3339_opts(SecondsFormat::Millis, true) }),
    );

    json!({ "fields": fields })
}

/// Structured query for the document whose `usernameLower` equals
/// `canonical`.
#[must_use]
pub fn username_query(canonical: &str) -> JsonValue {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": COLLECTION }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "usernameLower" },
                    "op": "EQUAL",
                    "value": string_value(canonical),
                }
            },
            "limit": 1
        }
    })
}

/// Owner of the first matching document in a `:runQuery` reply.
///
/// The reply is an array whose entries carry `document` only when a match
/// exists.
#[must_use]
pub fn first_match(reply: &JsonValue) -> Option<UserId> {
    reply
        .as_array()?
        .iter()
        .filter_map(|entry| entry.get("document")?.get("name")?.as_str())
        .find_map(user_id_from_name)
}

// =============================================================================
// Tests
// =============================================================================
