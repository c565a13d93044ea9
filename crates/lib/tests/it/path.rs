//! Tests for path addressing and the segment codec.

use std::str::FromStr;

use trellis::doc::path::{
    Segment, decode_segments, encode_segments, normalize_segments,
};
use trellis::doc::{Doc, PathBuf, PathError};

#[test]
fn test_segment_normalization_rule() {
    // Primitives stringified; composite/absent values pass through unchanged
    let raw = vec![
        Segment::from("foo"),
        Segment::from(5),
        Segment::from(true),
        Segment::Composite(Doc::new()),
        Segment::Absent,
    ];

    let normalized = normalize_segments(raw);
    assert_eq!(
        normalized,
        vec![
            Segment::Text("foo".into()),
            Segment::Text("5".into()),
            Segment::Text("true".into()),
            Segment::Composite(Doc::new()),
            Segment::Absent,
        ]
    );
}

#[test]
fn test_delimited_round_trip() {
    // parse(to_delimited_string(p)) == p for delimiter-free segments
    let paths = ["foo", "foo.5.true", "a.b.c.d.e", "users.alice.role"];
    for input in paths {
        let path = PathBuf::from_str(input).unwrap();
        let reparsed = PathBuf::from_str(path.as_str()).unwrap();
        assert_eq!(reparsed, path);
        assert_eq!(reparsed.as_str(), input);
    }
}

#[test]
fn test_from_segments_builds_dotted_path() {
    let path = PathBuf::from_segments(vec![
        Segment::from("users"),
        Segment::from(42),
        Segment::from("active"),
    ])
    .unwrap();
    assert_eq!(path.as_str(), "users.42.active");
    assert_eq!(path.len(), 3);
}

#[test]
fn test_from_segments_rejects_opaque_kinds() {
    let err = PathBuf::from_segments(vec![Segment::from("ok"), Segment::Absent]).unwrap_err();
    assert_eq!(err, PathError::UnaddressableSegment { kind: "absent" });

    let err =
        PathBuf::from_segments(vec![Segment::Composite(Doc::new().with_int("x", 1))])
            .unwrap_err();
    assert_eq!(err, PathError::UnaddressableSegment { kind: "composite" });
}

#[test]
fn test_codec_preserves_order_and_count() {
    let raw = vec!["one", "two.with.dots", "three and spaces", "four%"];
    let encoded = encode_segments(&raw);
    assert_eq!(encoded.len(), raw.len());

    let decoded = decode_segments(&encoded).unwrap();
    assert_eq!(decoded, raw);
}

#[test]
fn test_codec_makes_segments_delimiter_safe() {
    let raw = vec!["a.b", "c.d.e"];
    let encoded = encode_segments(&raw);

    // Encoded segments can live inside a dotted path without ambiguity
    let path = PathBuf::new().push(&encoded[0]).push(&encoded[1]);
    assert_eq!(path.len(), 2);

    let components: Vec<String> = path.components().map(String::from).collect();
    let decoded = decode_segments(&components).unwrap();
    assert_eq!(decoded, raw);
}

#[test]
fn test_decode_rejects_malformed_sequences() {
    for bad in ["%", "%2", "%zz", "abc%G1", "tail%a"] {
        let result = decode_segments(&[bad]);
        assert!(
            matches!(result, Err(PathError::DecodingError { .. })),
            "'{bad}' should fail to decode"
        );
    }
}

#[test]
fn test_decode_rejects_non_utf8() {
    let result = decode_segments(&["%FF%FE"]);
    assert!(matches!(result, Err(PathError::DecodingError { .. })));
}

#[test]
fn test_path_error_converts_to_crate_error() {
    let err: trellis::Error = PathError::UnaddressableSegment { kind: "absent" }.into();
    assert_eq!(err.module(), "path");
    assert!(err.is_invalid_argument());

    let err: trellis::Error = PathError::DecodingError {
        segment: "%zz".into(),
        reason: "malformed".into(),
    }
    .into();
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_pathbuf_serde_as_string() {
    let path = PathBuf::from_str("user.profile").unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"user.profile\"");

    let back: PathBuf = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}
