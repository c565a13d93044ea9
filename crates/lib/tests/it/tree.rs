//! Tests for the path-addressed tree facade.

use trellis::doc::{Doc, Value};
use trellis::path;
use trellis::tree::{Matcher, Tree};
use trellis::walk::{IterativeWalker, RecursiveWalker, Step};

use super::helpers::sample_doc;

#[test]
fn test_set_creates_intermediate_nodes() {
    let mut tree = Tree::new();
    tree.set(path!("a.b.c"), "deep").unwrap();

    match tree.get(path!("a.b")) {
        Some(Value::Doc(inner)) => {
            assert_eq!(inner.get_as::<&str>("c"), Some("deep"));
        }
        other => panic!("expected a.b to be a composite node, got {other:?}"),
    }
    match tree.get(path!("a")) {
        Some(Value::Doc(_)) => {}
        other => panic!("expected a to be a composite node, got {other:?}"),
    }
}

#[test]
fn test_set_through_scalar_replaces_it() {
    let mut tree = Tree::new();
    tree.set(path!("user.profile"), "scalar").unwrap();
    tree.set(path!("user.profile.name"), "charlie").unwrap();

    assert_eq!(
        tree.get(path!("user.profile.name")),
        Some(&Value::Text("charlie".into()))
    );
    match tree.get(path!("user.profile")) {
        Some(Value::Doc(_)) => {}
        other => panic!("expected user.profile to be composite after overwrite, got {other:?}"),
    }
}

#[test]
fn test_set_returns_previous_value() {
    let mut tree = Tree::new();
    assert_eq!(tree.set(path!("k"), 1).unwrap(), None);
    assert_eq!(tree.set(path!("k"), 2).unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_get_absent_is_none() {
    let tree = Tree::from_root(sample_doc());
    assert_eq!(tree.get(path!("nope")), None);
    assert_eq!(tree.get(path!("foo.nope")), None);
    // Navigating through a leaf is absent, not an error
    assert_eq!(tree.get(path!("hello.deeper")), None);
}

#[test]
fn test_remove_nested_node() {
    let mut tree = Tree::from_root(sample_doc());

    let removed = tree.remove(path!("foo.boo.1"));
    assert_eq!(removed, Some(Value::Text("x".into())));
    assert_eq!(tree.get(path!("foo.boo.1")), None);

    // The parent survives, now empty
    match tree.get(path!("foo.boo")) {
        Some(Value::Doc(inner)) => assert!(inner.is_empty()),
        other => panic!("expected foo.boo to remain, got {other:?}"),
    }

    // Removing an absent path is a no-op
    assert_eq!(tree.remove(path!("foo.boo.1")), None);
}

#[test]
fn test_remove_subtree() {
    let mut tree = Tree::from_root(sample_doc());
    let removed = tree.remove(path!("foo"));
    assert!(matches!(removed, Some(Value::Doc(_))));
    assert_eq!(tree.get(path!("foo.bar")), None);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_query_exact_keys() {
    let tree = Tree::from_root(sample_doc());
    let mut walker = IterativeWalker::new();

    let found = tree.query(
        &[Matcher::Key("foo".into()), Matcher::Key("bar".into())],
        &mut walker,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path.as_str(), "foo.bar");
    assert_eq!(found[0].value, "woohoo");
}

#[test]
fn test_query_wildcard_level() {
    let tree = Tree::from_root(sample_doc());
    let mut walker = IterativeWalker::new();

    // All second-level nodes
    let found = tree.query(&[Matcher::Any, Matcher::Any], &mut walker);
    let paths: Vec<&str> = found.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["foo.bar", "foo.boo", "moo.says"]);
}

#[test]
fn test_query_results_in_preorder() {
    let tree = Tree::from_root(sample_doc());
    let mut walker = IterativeWalker::new();

    let found = tree.query(&[Matcher::Any], &mut walker);
    let paths: Vec<&str> = found.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["hello", "foo", "moo"]);
}

#[test]
fn test_query_value_predicate() {
    let mut tree = Tree::new();
    tree.set(path!("users.alice.role"), "admin").unwrap();
    tree.set(path!("users.bob.role"), "guest").unwrap();
    tree.set(path!("users.carol.role"), "admin").unwrap();

    let mut walker = IterativeWalker::new();
    let found = tree.query(
        &[
            Matcher::Key("users".into()),
            Matcher::Any,
            Matcher::Value(Value::Text("admin".into())),
        ],
        &mut walker,
    );
    let paths: Vec<&str> = found.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["users.alice.role", "users.carol.role"]);
}

#[test]
fn test_query_same_results_with_both_strategies() {
    let tree = Tree::from_root(sample_doc());
    let patterns = [Matcher::Key("foo".into()), Matcher::Any];

    let mut iterative = IterativeWalker::new();
    let mut recursive = RecursiveWalker::new();
    assert_eq!(
        tree.query(&patterns, &mut iterative),
        tree.query(&patterns, &mut recursive)
    );
}

#[test]
fn test_query_no_match() {
    let tree = Tree::from_root(sample_doc());
    let mut walker = RecursiveWalker::new();

    let found = tree.query(&[Matcher::Key("absent".into())], &mut walker);
    assert!(found.is_empty());

    let found = tree.query(&[], &mut walker);
    assert!(found.is_empty());
}

#[test]
fn test_walk_passthrough() {
    let tree = Tree::from_root(sample_doc());
    let mut walker = IterativeWalker::new();

    let mut count = 0;
    let outcome = tree.walk(&mut walker, &mut |_, _, _| {
        count += 1;
        Step::Continue
    });
    assert_eq!(outcome, Step::Continue);
    assert_eq!(count, 7);
}

#[test]
fn test_doc_json_rendering_matches_serde() {
    let doc = Doc::new()
        .with_text("name", "Alice")
        .with_int("age", 30)
        .with_bool("active", true);

    let rendered: serde_json::Value = serde_json::from_str(&doc.to_json_string()).unwrap();
    assert_eq!(rendered["name"], "Alice");
    assert_eq!(rendered["age"], 30);
    assert_eq!(rendered["active"], true);
}
