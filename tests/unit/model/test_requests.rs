use assert_json_diff::assert_json_eq;
use serde_json::json;
use warehouse_client::model::requests::LoginRequest;
use warehouse_client::model::responses::LoginResponse;

#[test]
fn login_request_serializes_to_wire_shape() {
    let request = LoginRequest::new("admin", "secret");
    let value = serde_json::to_value(&request).expect("serialize login request");

    assert_json_eq!(value, json!({"username": "admin", "password": "secret"}));
}

#[test]
fn login_response_deserializes_token_field() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"token": "abc123"}"#).expect("deserialize login response");
    assert_eq!(response.token, "abc123");
}

#[test]
fn login_response_without_token_is_an_error() {
    let result = serde_json::from_str::<LoginResponse>(r#"{"message": "ok"}"#);
    assert!(result.is_err());
}
