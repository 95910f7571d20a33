use reqwest::Method;
use serde_json::json;
use warehouse_client::model::http::RequestOptions;

#[test]
fn default_options_are_a_bare_get() {
    let options = RequestOptions::default();
    assert_eq!(options.method, Method::GET);
    assert!(options.headers.is_empty());
    assert!(options.body.is_none());
}

#[test]
fn builder_sets_method_headers_and_body() {
    let options = RequestOptions::new()
        .with_method(Method::POST)
        .with_header("X-Test", "1")
        .with_body(&json!({"name": "pallet"}))
        .expect("serializable body");

    assert_eq!(options.method, Method::POST);
    assert_eq!(
        options.headers,
        vec![("X-Test".to_string(), "1".to_string())]
    );
    assert_eq!(options.body, Some(json!({"name": "pallet"})));
}

#[test]
fn with_body_accepts_any_serializable_value() {
    #[derive(serde::Serialize)]
    struct Item {
        name: String,
        quantity: u32,
    }

    let options = RequestOptions::new()
        .with_body(&Item {
            name: "box".to_string(),
            quantity: 3,
        })
        .expect("serializable body");

    assert_eq!(options.body, Some(json!({"name": "box", "quantity": 3})));
}
