//! Identifier extraction from responses of unknown shape.
//!
//! The target API has no uniform response envelope: a creation may answer
//! with a JSON object, a one-element array, or an empty body plus a
//! `Location` header. The extractor degrades across those shapes without
//! ever raising — "no identifier found" is a normal outcome that surfaces
//! downstream as a missing dependency, not an error.

use serde_json::{Map, Value};

use crate::client::ApiResponse;

/// Candidate field names, scanned in priority order.
const ID_FIELDS: [&str; 5] = ["id", "teamId", "groupId", "matchId", "tournamentId"];

/// Pull a resource identifier out of a response.
///
/// Ordered, first match wins:
/// 1. body is a JSON object → scan the candidate fields in priority order;
/// 2. body is a non-empty JSON array whose first element is an object →
///    scan that element only;
/// 3. otherwise → last path segment of the `Location` header, trailing
///    slashes stripped;
/// 4. else `None`.
///
/// Pure function: no state, same response in, same answer out.
pub fn extract_id(resp: &ApiResponse) -> Option<String> {
    match resp.json() {
        Some(Value::Object(map)) => {
            if let Some(id) = scan_fields(&map, &ID_FIELDS) {
                return Some(id);
            }
        }
        Some(Value::Array(items)) => {
            if let Some(Value::Object(first)) = items.first() {
                if let Some(id) = scan_fields(first, &ID_FIELDS) {
                    return Some(id);
                }
            }
        }
        _ => {}
    }

    location_segment(resp)
}

/// Identifier of one element of a matches listing: `id`, else `matchId`.
///
/// Narrower than [`extract_id`]'s scan on purpose — a match object can
/// embed team identifiers that must not win over the match's own id.
pub fn match_id_of(item: &Value) -> Option<String> {
    match item {
        Value::Object(map) => scan_fields(map, &["id", "matchId"]),
        _ => None,
    }
}

/// Scan `fields` in order; accept string or integer values, coerced to
/// string. Floats, bools, null, and nested structures are not ids.
fn scan_fields(map: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|key| match map.get(*key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    })
}

/// Final path segment of the `Location` header, if any. An empty segment
/// counts as no value.
fn location_segment(resp: &ApiResponse) -> Option<String> {
    let loc = resp.header("location")?;
    let segment = loc.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resp_with_body(body: Value) -> ApiResponse {
        ApiResponse::new(200, body.to_string())
    }

    fn resp_with_location(location: &str) -> ApiResponse {
        let mut resp = ApiResponse::new(201, "");
        resp.headers
            .insert("Location".to_string(), location.to_string());
        resp
    }

    #[test]
    fn test_object_body_priority_order() {
        // "id" wins over later candidates
        let resp = resp_with_body(json!({"teamId": "second", "id": "first"}));
        assert_eq!(extract_id(&resp), Some("first".to_string()));

        let resp = resp_with_body(json!({"teamId": "abc"}));
        assert_eq!(extract_id(&resp), Some("abc".to_string()));

        let resp = resp_with_body(json!({"tournamentId": 99}));
        assert_eq!(extract_id(&resp), Some("99".to_string()));
    }

    #[test]
    fn test_integer_coerced_to_string() {
        let resp = resp_with_body(json!([{"matchId": 7}]));
        assert_eq!(extract_id(&resp), Some("7".to_string()));
    }

    #[test]
    fn test_array_scans_first_element_only() {
        let resp = resp_with_body(json!([{"name": "no id here"}, {"id": "x"}]));
        assert_eq!(extract_id(&resp), None);

        let resp = resp_with_body(json!([]));
        assert_eq!(extract_id(&resp), None);
    }

    #[test]
    fn test_non_id_value_types_are_skipped() {
        // float, bool, null, nested — none of these are identifiers
        let resp = resp_with_body(json!({
            "id": 1.5,
            "teamId": true,
            "groupId": null,
            "matchId": {"nested": 1},
        }));
        assert_eq!(extract_id(&resp), None);
    }

    #[test]
    fn test_location_header_fallback() {
        let resp = resp_with_location("/teams/42/");
        assert_eq!(extract_id(&resp), Some("42".to_string()));

        let resp = resp_with_location("https://api.example.com/teams/42");
        assert_eq!(extract_id(&resp), Some("42".to_string()));

        // body present but with no matching field still falls through
        let mut resp = resp_with_body(json!({"name": "no id"}));
        resp.headers
            .insert("location".to_string(), "/groups/g9".to_string());
        assert_eq!(extract_id(&resp), Some("g9".to_string()));
    }

    #[test]
    fn test_degenerate_location_yields_none() {
        assert_eq!(extract_id(&resp_with_location("/")), None);
        assert_eq!(extract_id(&resp_with_location("")), None);
    }

    #[test]
    fn test_nothing_matches_returns_none() {
        let resp = ApiResponse::new(204, "");
        assert_eq!(extract_id(&resp), None);

        let resp = ApiResponse::new(200, "plain text, not json");
        assert_eq!(extract_id(&resp), None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let resp = resp_with_body(json!({"id": "stable"}));
        assert_eq!(extract_id(&resp), extract_id(&resp));
    }

    #[test]
    fn test_match_id_of() {
        assert_eq!(match_id_of(&json!({"id": "m1"})), Some("m1".to_string()));
        assert_eq!(match_id_of(&json!({"matchId": 3})), Some("3".to_string()));
        // the match's own id wins over embedded team ids
        assert_eq!(
            match_id_of(&json!({"teamId": "t1", "matchId": "m2"})),
            Some("m2".to_string())
        );
        assert_eq!(match_id_of(&json!({"teamId": "t1"})), None);
        assert_eq!(match_id_of(&json!("not an object")), None);
    }
}
