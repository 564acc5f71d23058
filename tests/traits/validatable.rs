use crate::common::Child;
use nested_rail::{ErrorMap, Validatable};
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn blank_child_reports_every_missing_attribute() {
    let errors = Child::blank().validate();
    assert_eq!(errors.keys().collect::<Vec<_>>(), ["attribute", "attribute2", "attribute3"]);
    assert!(!Child::blank().is_valid());
    assert!(Child::valid().is_valid());
}

#[test]
fn check_carries_self_when_valid() {
    let child = Child::valid();
    let checked = child.check().into_value().unwrap();
    assert!(std::ptr::eq(checked, &child));
}

#[test]
fn check_flattens_errors_when_invalid() {
    let child = Child::with(Some("a"), None, Some("c"));
    let errors = child.check().into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key(), "attribute2");
    assert_eq!(errors[0].message(), "can't be blank");
}

#[test]
fn smart_pointers_delegate() {
    let blank = Child::blank();

    assert_eq!(Box::new(blank.clone()).validate(), blank.validate());
    assert_eq!(Rc::new(blank.clone()).validate(), blank.validate());
    assert_eq!(Arc::new(blank.clone()).validate(), blank.validate());
    assert_eq!((&blank).validate(), blank.validate());
}

#[test]
fn trait_objects_are_validatable() {
    struct AlwaysInvalid;

    impl Validatable for AlwaysInvalid {
        fn validate(&self) -> ErrorMap {
            [("", "is invalid")].into_iter().collect()
        }
    }

    let objects: Vec<Box<dyn Validatable>> = vec![Box::new(Child::valid()), Box::new(AlwaysInvalid)];
    let valid: Vec<bool> = objects.iter().map(|object| object.is_valid()).collect();
    assert_eq!(valid, [true, false]);
}

#[test]
fn boxed_trait_object_checks_through_its_box() {
    let child: Box<dyn Validatable> = Box::new(Child::blank());

    let errors = child.check().into_errors().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].key(), "attribute");

    let shared: Arc<dyn Validatable + Send + Sync> = Arc::new(Child::valid());
    assert!(shared.check().is_valid());
}
