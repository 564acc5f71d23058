use crate::common::{error_keys, keyed, Child, ChildValue, Parent};
use nested_rail::{Candidates, IndexPolicy, IndexToken, NestedOptions};

fn only_attribute(policy: IndexPolicy) -> NestedOptions {
    NestedOptions::new().only("attribute").index_policy(policy)
}

#[test]
fn shape_policy_is_the_default() {
    assert_eq!(NestedOptions::new().policy(), IndexPolicy::Shape);
}

#[test]
fn shape_policy_indexes_single_element_sequences() {
    let parent = Parent::new(ChildValue::Many(vec![Child::blank()]));
    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Shape)), ["child[0] attribute"]);
}

#[test]
fn count_policy_drops_index_for_single_element_sequences() {
    let parent = Parent::new(ChildValue::Many(vec![Child::blank()]));
    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Count)), ["child attribute"]);
}

#[test]
fn count_policy_indexes_longer_sequences() {
    let parent = Parent::new(ChildValue::Many(vec![Child::blank(), Child::blank()]));
    assert_eq!(
        error_keys(&parent, only_attribute(IndexPolicy::Count)),
        ["child[0] attribute", "child[1] attribute"]
    );
}

#[test]
fn keyed_collections_are_always_indexed() {
    let parent = Parent::new(keyed([("only", Child::blank())]));

    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Shape)), ["child[only] attribute"]);
    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Count)), ["child[only] attribute"]);
}

#[test]
fn single_values_are_never_indexed() {
    let parent = Parent::new(ChildValue::One(Child::blank()));

    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Shape)), ["child attribute"]);
    assert_eq!(error_keys(&parent, only_attribute(IndexPolicy::Count)), ["child attribute"]);
}

#[test]
fn includes_index_by_shape_and_policy() {
    let child = Child::valid();
    let pair = [Child::valid(), Child::valid()];

    let none: Candidates<'_, Child> = Candidates::None;
    let single = Candidates::single(&child);
    let one = Candidates::indexed([&child]);
    let two = Candidates::indexed(&pair);
    let map = Candidates::keyed([("k", &child)]);

    for policy in [IndexPolicy::Shape, IndexPolicy::Count] {
        assert!(!none.includes_index(policy));
        assert!(!single.includes_index(policy));
        assert!(two.includes_index(policy));
        assert!(map.includes_index(policy));
    }
    assert!(one.includes_index(IndexPolicy::Shape));
    assert!(!one.includes_index(IndexPolicy::Count));
}

#[test]
fn iteration_yields_index_tokens() {
    let pair = [Child::valid(), Child::blank()];
    let tokens: Vec<_> = Candidates::indexed(&pair).iter().map(|(token, _)| token.map(|t| t.to_string())).collect();
    assert_eq!(tokens, [Some("0".to_string()), Some("1".to_string())]);

    let child = Child::valid();
    let keyed = Candidates::keyed([(7, &child)]);
    let tokens: Vec<_> = keyed.iter().map(|(token, _)| token).collect();
    assert_eq!(tokens, [Some(IndexToken::Key("7"))]);

    let single = Candidates::single(&child);
    assert_eq!(single.iter().map(|(token, _)| token).collect::<Vec<_>>(), [None]);
    assert_eq!(Candidates::<Child>::None.iter().count(), 0);
}

#[test]
fn from_option_classifies_presence() {
    let child = Child::valid();
    assert!(Candidates::from_option(Some(&child)).len() == 1);
    assert!(Candidates::<Child>::from_option(None).is_empty());
}
