use nested_rail::{Candidates, ErrorMap, NestedOptions, RuleSet, Validatable};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Child {
    pub attribute: Option<String>,
    pub attribute2: Option<String>,
    pub attribute3: Option<String>,
}

impl Child {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn valid() -> Self {
        Self {
            attribute: Some("a".into()),
            attribute2: Some("b".into()),
            attribute3: Some("c".into()),
        }
    }

    pub fn with(attribute: Option<&str>, attribute2: Option<&str>, attribute3: Option<&str>) -> Self {
        Self {
            attribute: attribute.map(Into::into),
            attribute2: attribute2.map(Into::into),
            attribute3: attribute3.map(Into::into),
        }
    }
}

fn presence(errors: &mut ErrorMap, key: &str, value: &Option<String>) {
    if value.as_deref().map_or(true, str::is_empty) {
        errors.add(key, "can't be blank");
    }
}

impl Validatable for Child {
    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        presence(&mut errors, "attribute", &self.attribute);
        presence(&mut errors, "attribute2", &self.attribute2);
        presence(&mut errors, "attribute3", &self.attribute3);
        errors
    }
}

/// Every shape a nested attribute value can take.
#[derive(Debug, Clone, Default)]
pub enum ChildValue {
    #[default]
    Nil,
    One(Child),
    Many(Vec<Child>),
    Keyed(BTreeMap<String, Child>),
}

impl ChildValue {
    pub fn candidates(&self) -> Candidates<'_, Child> {
        match self {
            Self::Nil => Candidates::None,
            Self::One(child) => Candidates::single(child),
            Self::Many(children) => Candidates::indexed(children),
            Self::Keyed(children) => Candidates::keyed(children),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parent {
    pub child: ChildValue,
}

impl Parent {
    pub fn new(child: ChildValue) -> Self {
        Self { child }
    }
}

pub fn parent_rules(options: NestedOptions) -> RuleSet<Parent> {
    RuleSet::new().nested("child", options, |p: &Parent| p.child.candidates())
}

/// Validates `parent` with a single nested rule on `child` and returns its keys.
pub fn error_keys(parent: &Parent, options: NestedOptions) -> Vec<String> {
    parent_rules(options).validate(parent).keys().map(String::from).collect()
}

pub fn keyed<const N: usize>(entries: [(&str, Child); N]) -> ChildValue {
    ChildValue::Keyed(entries.into_iter().map(|(key, child)| (key.to_string(), child)).collect())
}
