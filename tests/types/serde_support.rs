use nested_rail::{ErrorMap, FieldError, Validation};
use serde_json::json;

#[test]
fn error_map_serializes_as_key_to_messages() {
    let mut errors = ErrorMap::new();
    errors.add("child attribute", "can't be blank");
    errors.add("child attribute", "is too short");
    errors.add("other", "is invalid");

    let value = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        value,
        json!({
            "child attribute": ["can't be blank", "is too short"],
            "other": ["is invalid"],
        })
    );
}

#[test]
fn error_map_keeps_insertion_order_in_json_text() {
    let errors: ErrorMap = [("zeta", "last"), ("alpha", "first")].into_iter().collect();
    let text = serde_json::to_string(&errors).unwrap();
    assert_eq!(text, r#"{"zeta":["last"],"alpha":["first"]}"#);
}

#[test]
fn error_map_parses_back() {
    let errors: ErrorMap =
        serde_json::from_str(r#"{"child[0] attribute":["can't be blank"],"other":["a","b"]}"#).unwrap();

    assert_eq!(errors.get("child[0] attribute"), ["can't be blank"]);
    assert_eq!(errors.get("other"), ["a", "b"]);
}

#[test]
fn field_error_and_validation_serialize() {
    let error = FieldError::new("name", "can't be blank");
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "key": "name", "message": "can't be blank" })
    );

    let outcome: Validation<FieldError, ()> = Validation::invalid(error.clone());
    let text = serde_json::to_string(&outcome).unwrap();
    let back: Validation<FieldError, ()> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn error_map_rejects_keys_without_messages() {
    let parsed = serde_json::from_str::<ErrorMap>(r#"{"child attribute":[]}"#);
    let message = parsed.unwrap_err().to_string();
    assert!(message.contains("at least one message per key"), "{message}");
}

#[test]
fn error_map_round_trip_is_lossless() {
    let mut errors = ErrorMap::new();
    errors.add("child[1] attribute", "can't be blank");
    errors.add("", "is invalid");
    errors.add("child[1] attribute", "can't be blank");

    let back: ErrorMap = serde_json::from_str(&serde_json::to_string(&errors).unwrap()).unwrap();
    assert_eq!(back, errors);
}
