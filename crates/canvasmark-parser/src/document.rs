//! Raw JSON shapes of a canvas document.
//!
//! The top level is decoded first with nodes and edges kept as borrowed raw
//! JSON, so each record can be located in the source and decoded on its own.
//! A bad record then produces a diagnostic pointing at that record while the
//! rest of the document is still checked.

use serde::{Deserialize, Deserializer, de};
use serde_json::{Number, value::RawValue};

/// The top-level canvas object.
#[derive(Debug, Deserialize)]
#[serde(expecting = "a canvas object with `nodes` and `edges` arrays")]
pub(crate) struct RawDocument<'src> {
    #[serde(default, borrow)]
    pub(crate) nodes: Vec<&'src RawValue>,

    #[serde(default, borrow)]
    pub(crate) edges: Vec<&'src RawValue>,
}

/// One entry of `nodes`. Unknown fields (`color`, `url`, ...) are ignored.
#[derive(Debug, Deserialize)]
#[serde(expecting = "a node object")]
pub(crate) struct NodeRecord {
    pub(crate) id: String,

    #[serde(rename = "type")]
    pub(crate) kind: String,

    #[serde(default)]
    pub(crate) label: Option<String>,

    #[serde(default)]
    pub(crate) text: Option<String>,

    #[serde(default)]
    pub(crate) file: Option<String>,

    #[serde(deserialize_with = "coordinate")]
    pub(crate) x: i64,

    #[serde(deserialize_with = "coordinate")]
    pub(crate) y: i64,

    #[serde(deserialize_with = "coordinate")]
    pub(crate) width: i64,

    #[serde(deserialize_with = "coordinate")]
    pub(crate) height: i64,
}

/// Just the `id` of a node record, read back from a node that failed to
/// decode as a whole.
#[derive(Debug, Deserialize)]
pub(crate) struct NodeId {
    pub(crate) id: String,
}

/// One entry of `edges`. Only the endpoints are read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", expecting = "an edge object")]
pub(crate) struct EdgeRecord {
    pub(crate) from_node: String,
    pub(crate) to_node: String,
}

/// Reads a JSON number as an integer coordinate.
///
/// Canvas editors occasionally write fractional positions after a drag;
/// those are truncated toward zero. Values beyond the `i64` range saturate.
fn coordinate<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    number
        .as_f64()
        .map(|value| value.trunc() as i64)
        .ok_or_else(|| de::Error::custom(format!("invalid coordinate `{number}`")))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_node_record_full() {
        let node: NodeRecord = serde_json::from_str(
            r#"{"id":"a1","type":"text","text":"Hi","x":-10,"y":20,"width":250,"height":60,"color":"4"}"#,
        )
        .expect("valid node");

        assert_eq!(node.id, "a1");
        assert_eq!(node.kind, "text");
        assert_eq!(node.text.as_deref(), Some("Hi"));
        assert!(node.label.is_none());
        assert_eq!((node.x, node.y, node.width, node.height), (-10, 20, 250, 60));
    }

    #[test]
    fn test_node_record_truncates_fractions() {
        let node: NodeRecord = serde_json::from_str(
            r#"{"id":"a1","type":"group","x":10.9,"y":-3.7,"width":100.5,"height":1e2}"#,
        )
        .expect("valid node");

        assert_eq!((node.x, node.y, node.width, node.height), (10, -3, 100, 100));
    }

    #[test]
    fn test_node_record_saturates_huge_values() {
        let node: NodeRecord = serde_json::from_str(
            r#"{"id":"a1","type":"group","x":18446744073709551615,"y":0,"width":1,"height":1}"#,
        )
        .expect("valid node");

        assert_eq!(node.x, i64::MAX);
    }

    #[test]
    fn test_node_record_requires_geometry() {
        let result = serde_json::from_str::<NodeRecord>(r#"{"id":"a1","type":"text","x":0,"y":0}"#);

        let err = result.expect_err("width is missing");
        assert!(err.to_string().contains("width"), "{err}");
    }

    #[test]
    fn test_node_id_of_broken_node() {
        let node: NodeId = serde_json::from_str(r#"{"id":"a1","type":"text","x":"left"}"#)
            .expect("id is readable");

        assert_eq!(node.id, "a1");
    }

    #[test]
    fn test_edge_record_ignores_extra_fields() {
        let edge: EdgeRecord = serde_json::from_str(
            r#"{"id":"e1","fromNode":"a","fromSide":"right","toNode":"b","toSide":"left"}"#,
        )
        .expect("valid edge");

        assert_eq!(edge.from_node, "a");
        assert_eq!(edge.to_node, "b");
    }

    #[test]
    fn test_document_defaults_missing_collections() {
        let document: RawDocument<'_> = serde_json::from_str("{}").expect("valid document");

        assert!(document.nodes.is_empty());
        assert!(document.edges.is_empty());
    }

    proptest! {
        #[test]
        fn prop_fractional_coordinates_truncate_toward_zero(value in -1.0e15f64..1.0e15) {
            let source = format!(
                r#"{{"id":"p","type":"text","x":{value:?},"y":0,"width":1,"height":1}}"#
            );
            let node: NodeRecord = serde_json::from_str(&source).expect("valid node");

            prop_assert_eq!(node.x, value.trunc() as i64);
        }

        #[test]
        fn prop_integer_coordinates_are_exact(value in any::<i64>()) {
            let source = format!(
                r#"{{"id":"p","type":"text","x":0,"y":{value},"width":1,"height":1}}"#
            );
            let node: NodeRecord = serde_json::from_str(&source).expect("valid node");

            prop_assert_eq!(node.y, value);
        }
    }
}
