//! Tests for the diagnostic events emitted while nested rules run.

use crate::common::{parent_rules, Child, ChildValue, Parent};
use nested_rail::NestedOptions;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    fields: BTreeMap<String, String>,
}

impl Captured {
    fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

/// Keeps every event with its fields rendered as plain text.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Recorder {
    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }

    fn with_message(&self, message: &str) -> Vec<Captured> {
        self.events().into_iter().filter(|event| event.field("message") == message).collect()
    }
}

struct Fields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for Fields<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = BTreeMap::new();
        event.record(&mut Fields(&mut fields));
        self.events.lock().unwrap().push(Captured { level: *event.metadata().level(), fields });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn record(parent: &Parent, options: NestedOptions) -> Recorder {
    let recorder = Recorder::default();
    let rules = parent_rules(options);
    tracing::subscriber::with_default(recorder.clone(), || rules.validate(parent));
    recorder
}

#[test]
fn each_rule_run_traces_its_attribute() {
    let parent = Parent::new(ChildValue::Many(vec![Child::blank(), Child::valid(), Child::blank()]));
    let recorder = record(&parent, NestedOptions::new().with_prefix("kids"));

    let runs = recorder.with_message("validating nested attribute");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].level, Level::TRACE);
    assert_eq!(runs[0].field("attribute"), "child");
    assert_eq!(runs[0].field("prefix"), "kids");
    assert_eq!(runs[0].field("candidates"), "3");
    assert_eq!(runs[0].field("indexed"), "true");
}

#[test]
fn invalid_children_report_filtered_propagation_count() {
    let parent = Parent::new(ChildValue::Many(vec![
        Child::blank(),
        Child::valid(),
        Child::with(Some("a"), None, None),
    ]));
    let options = NestedOptions::new().only("attribute attribute2");
    let recorder = record(&parent, options.clone());

    let invalid = recorder.with_message("nested child is invalid");
    assert!(invalid.iter().all(|event| event.level == Level::DEBUG));
    assert_eq!(
        invalid.iter().map(|event| event.field("scope")).collect::<Vec<_>>(),
        ["child[0]", "child[2]"]
    );
    assert_eq!(
        invalid.iter().map(|event| event.field("propagated")).collect::<Vec<_>>(),
        ["2", "1"]
    );

    let total: usize = invalid.iter().map(|event| event.field("propagated").parse::<usize>().unwrap()).sum();
    assert_eq!(total, parent_rules(options).validate(&parent).message_count());
}

#[test]
fn fully_filtered_child_reports_zero() {
    let parent = Parent::new(ChildValue::One(Child::blank()));
    let recorder = record(&parent, NestedOptions::new().except("attribute attribute2 attribute3"));

    let invalid = recorder.with_message("nested child is invalid");
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].field("scope"), "child");
    assert_eq!(invalid[0].field("propagated"), "0");
}

#[test]
fn valid_children_emit_no_debug_event() {
    let parent = Parent::new(ChildValue::One(Child::valid()));
    let recorder = record(&parent, NestedOptions::new());

    assert!(recorder.with_message("nested child is invalid").is_empty());
    assert_eq!(recorder.with_message("validating nested attribute").len(), 1);
}
