//! Shared helpers for the integration test suite.

use trellis::doc::Doc;
use trellis::walk::{Step, TreeWalker};

/// The nested structure used throughout the traversal tests:
///
/// ```text
/// {hello: "world", foo: {bar: "woohoo", boo: {"1": "x"}}, moo: {says: "cow"}}
/// ```
pub fn sample_doc() -> Doc {
    Doc::new()
        .with_text("hello", "world")
        .with_doc(
            "foo",
            Doc::new()
                .with_text("bar", "woohoo")
                .with_doc("boo", Doc::new().with_text("1", "x")),
        )
        .with_doc("moo", Doc::new().with_text("says", "cow"))
}

/// A doc nested `depth` levels deep: `d.d.d. ... .d = "bottom"`.
pub fn deep_doc(depth: usize) -> Doc {
    let mut doc = Doc::new().with_text("d", "bottom");
    for _ in 1..depth {
        doc = Doc::new().with_doc("d", doc);
    }
    doc
}

/// Runs a full walk and collects every `(path, key)` pair in visit order.
pub fn collect_visits(walker: &mut dyn TreeWalker, doc: &Doc) -> Vec<(String, String)> {
    let mut visits = Vec::new();
    walker.walk(doc, &mut |path, key, _value| {
        visits.push((path.as_str().to_string(), key.to_string()));
        Step::Continue
    });
    visits
}

/// Runs a walk cancelling at `stop_key` and collects keys in visit order.
pub fn collect_until(walker: &mut dyn TreeWalker, doc: &Doc, stop_key: &str) -> Vec<String> {
    let mut keys = Vec::new();
    walker.walk(doc, &mut |_path, key, _value| {
        keys.push(key.to_string());
        if key == stop_key {
            Step::Stop
        } else {
            Step::Continue
        }
    });
    keys
}
