use super::*;
use serde_json::json;

fn sample_login_body() -> serde_json::Value {
    json!({
        "success": true,
        "user": { "id": 1, "email": "a@b.com", "fullName": "A B", "name": "A", "surname": "B" }
    })
}

// =============================================================
// Login mapping
// =============================================================

#[test]
fn login_body_maps_name_and_surname() {
    let payload = LoginResponse::parse(&sample_login_body()).unwrap();
    assert_eq!(
        payload,
        LoginPayload::Accepted(User {
            id: 1,
            email: "a@b.com".to_owned(),
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            full_name: "A B".to_owned(),
        })
    );
}

#[test]
fn login_body_with_success_false_is_rejected() {
    let payload = LoginResponse::parse(&json!({ "success": false })).unwrap();
    assert_eq!(payload, LoginPayload::Rejected);
}

#[test]
fn login_body_missing_user_field_is_mapping_error() {
    let mut body = sample_login_body();
    body["user"].as_object_mut().unwrap().remove("surname");
    let err = LoginResponse::parse(&body).unwrap_err();
    assert!(err.contains("surname"));
}

#[test]
fn accepted_login_without_user_is_mapping_error() {
    let err = LoginResponse::parse(&json!({ "success": true })).unwrap_err();
    assert!(err.contains("user"));
}

#[test]
fn login_body_with_string_id_is_mapping_error() {
    let mut body = sample_login_body();
    body["user"]["id"] = json!("1");
    assert!(LoginResponse::parse(&body).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_user_serializes_camel_case() {
    let body = serde_json::to_value(NewUser {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        json!({ "email": "a@b.com", "password": "pw", "firstName": "A", "lastName": "B" })
    );
}

#[test]
fn user_patch_omits_unset_fields() {
    let patch = UserPatch { last_name: Some("C".to_owned()), ..UserPatch::default() };
    assert_eq!(serde_json::to_value(patch).unwrap(), json!({ "lastName": "C" }));
}

#[test]
fn crud_user_deserializes_from_camel_case() {
    let user: User = serde_json::from_value(json!({
        "id": 7, "email": "x@y.z", "firstName": "X", "lastName": "Y", "fullName": "X Y"
    }))
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name, "X Y");
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("secret"));
}
