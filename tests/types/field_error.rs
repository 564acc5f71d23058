use nested_rail::FieldError;

#[test]
fn accessors_and_parts() {
    let error = FieldError::new("child attribute", "can't be blank");
    assert_eq!(error.key(), "child attribute");
    assert_eq!(error.message(), "can't be blank");
    assert_eq!(
        error.into_parts(),
        ("child attribute".to_string(), "can't be blank".to_string())
    );
}

#[test]
fn display_omits_empty_key() {
    assert_eq!(FieldError::new("name", "is taken").to_string(), "name is taken");
    assert_eq!(FieldError::new("", "is invalid").to_string(), "is invalid");
}

#[test]
fn usable_as_std_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error>> {
        Err(FieldError::new("name", "can't be blank"))?
    }

    assert_eq!(fails().unwrap_err().to_string(), "name can't be blank");
}
