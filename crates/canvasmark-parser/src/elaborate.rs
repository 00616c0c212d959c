//! Turns the raw JSON records of a canvas into the element model.
//!
//! Each node and edge is decoded separately and checked against the others:
//! node ids must be unique, edges must reference existing nodes. All problems
//! of the document are collected before loading fails.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;
use serde_json::{error::Category, value::RawValue};

use canvasmark_core::{
    canvas::Canvas,
    element::{Connection, Element, ElementKind},
    geometry::Rect,
    identifier::Id,
};

use crate::{
    document::{EdgeRecord, NodeId, NodeRecord, RawDocument},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Builds a [`Canvas`] from canvas JSON source.
pub(crate) struct Builder<'src> {
    source: &'src str,
    diagnostics: DiagnosticCollector,
}

impl<'src> Builder<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Decode and validate the whole document.
    pub(crate) fn build(mut self) -> Result<Canvas, ParseError> {
        let document: RawDocument<'src> = serde_json::from_str(self.source)
            .map_err(|err| json_diagnostic(&err, self.source, 0, "the canvas document"))?;

        debug!(
            nodes = document.nodes.len(),
            edges = document.edges.len();
            "Decoding canvas records"
        );

        let (nodes, rejected) = self.decode_records::<NodeRecord>(&document.nodes, "this node");
        let rejected_ids = rejected_node_ids(&rejected);
        let elements = self.elaborate_nodes(nodes);

        let (edges, _) = self.decode_records::<EdgeRecord>(&document.edges, "this edge");
        let connections = self.elaborate_edges(&elements, &rejected_ids, edges);

        self.diagnostics.finish()?;

        let elements = elements.into_values().map(|(element, _)| element).collect();
        Ok(Canvas::new(elements, connections))
    }

    /// Decode each raw record, emitting a diagnostic for every bad one.
    ///
    /// Returns the decoded records and the raw records that were rejected.
    fn decode_records<T>(
        &mut self,
        records: &[&'src RawValue],
        what: &str,
    ) -> (Vec<(T, Span)>, Vec<&'src RawValue>)
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut decoded = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();

        for &raw in records {
            let span = self.span_of(raw);
            match serde_json::from_str::<T>(raw.get()) {
                Ok(record) => decoded.push((record, span)),
                Err(err) => {
                    self.diagnostics
                        .emit(json_diagnostic(&err, raw.get(), span.start(), what));
                    rejected.push(raw);
                }
            }
        }

        (decoded, rejected)
    }

    /// Convert node records to elements keyed by id, in document order.
    ///
    /// A repeated id keeps the first node and reports the repetition.
    fn elaborate_nodes(
        &mut self,
        nodes: Vec<(NodeRecord, Span)>,
    ) -> IndexMap<Id, (Element, Span)> {
        let mut elements: IndexMap<Id, (Element, Span)> = IndexMap::with_capacity(nodes.len());

        for (record, span) in nodes {
            let id = Id::new(&record.id);

            if let Some((_, first_span)) = elements.get(&id) {
                self.diagnostics.emit(
                    Diagnostic::error(format!("node id `{}` is used more than once", record.id))
                        .with_code(ErrorCode::E100)
                        .with_label(span, "duplicate node")
                        .with_secondary_label(*first_span, "first used here")
                        .with_help("give every node a unique `id`"),
                );
                continue;
            }

            if record.width < 0 || record.height < 0 {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "node `{}` has a negative size ({} x {})",
                        record.id, record.width, record.height
                    ))
                    .with_code(ErrorCode::E200)
                    .with_label(span, "this node")
                    .with_help("a node with negative size never contains other nodes"),
                );
            }

            let element = element_from_record(id, record);
            trace!(element:%; "Elaborated node");
            elements.insert(id, (element, span));
        }

        elements
    }

    /// Convert edge records to connections, checking both endpoints exist.
    ///
    /// An endpoint naming a node that was already reported as undecodable
    /// drops the edge without another diagnostic.
    fn elaborate_edges(
        &mut self,
        elements: &IndexMap<Id, (Element, Span)>,
        rejected_ids: &HashSet<Id>,
        edges: Vec<(EdgeRecord, Span)>,
    ) -> Vec<Connection> {
        let mut connections = Vec::with_capacity(edges.len());

        for (record, span) in edges {
            let mut valid = true;
            for endpoint in [&record.from_node, &record.to_node] {
                let id = Id::new(endpoint);
                if elements.contains_key(&id) {
                    continue;
                }
                valid = false;
                if rejected_ids.contains(&id) {
                    trace!(endpoint = endpoint.as_str(); "Edge to rejected node dropped");
                } else {
                    self.diagnostics.emit(
                        Diagnostic::error(format!("edge points to unknown node `{endpoint}`"))
                            .with_code(ErrorCode::E101)
                            .with_label(span, "this edge")
                            .with_help(format!(
                                "remove the edge or add a node with id `{endpoint}`"
                            )),
                    );
                }
            }

            if valid {
                connections.push(Connection::new(
                    Id::new(&record.from_node),
                    Id::new(&record.to_node),
                ));
            }
        }

        connections
    }

    /// Byte span of a raw value borrowed from the source.
    fn span_of(&self, raw: &RawValue) -> Span {
        let text = raw.get();
        let start = (text.as_ptr() as usize).saturating_sub(self.source.as_ptr() as usize);
        Span::new(start..start + text.len())
    }
}

/// Ids of node records that failed to decode but still carry a readable id.
fn rejected_node_ids(rejected: &[&RawValue]) -> HashSet<Id> {
    rejected
        .iter()
        .filter_map(|raw| serde_json::from_str::<NodeId>(raw.get()).ok())
        .map(|node| Id::new(&node.id))
        .collect()
}

fn element_from_record(id: Id, record: NodeRecord) -> Element {
    let bounds = Rect::new(record.x, record.y, record.width, record.height);
    let kind = match record.kind.as_str() {
        "group" => ElementKind::Group {
            label: record.label,
        },
        "text" => ElementKind::Text { text: record.text },
        "file" => ElementKind::File { path: record.file },
        _ => ElementKind::Other { tag: record.kind },
    };
    Element::new(id, bounds, kind)
}

/// Build a diagnostic for a `serde_json` error raised while decoding `text`,
/// which starts at byte `offset` of the full source.
fn json_diagnostic(err: &serde_json::Error, text: &str, offset: usize, what: &str) -> Diagnostic {
    let code = match err.classify() {
        Category::Syntax | Category::Io => ErrorCode::E001,
        Category::Data => ErrorCode::E002,
        Category::Eof => ErrorCode::E003,
    };
    let span = Span::at_line_column(text, err.line(), err.column()).offset_by(offset);

    Diagnostic::error(format!("{} in {what}", strip_position(err)))
        .with_code(code)
        .with_label(span, code.description())
}

/// `serde_json` appends " at line L column C" to its messages; the position
/// is shown through the label instead.
fn strip_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> Result<Canvas, ParseError> {
        Builder::new(source).build()
    }

    fn codes(err: &ParseError) -> Vec<Option<ErrorCode>> {
        err.diagnostics().iter().map(Diagnostic::code).collect()
    }

    #[test]
    fn test_build_elements_in_document_order() {
        let canvas = build(
            r#"{
                "nodes": [
                    {"id":"t","type":"text","text":"a","x":5,"y":5,"width":10,"height":10},
                    {"id":"g","type":"group","label":"G","x":0,"y":0,"width":100,"height":100},
                    {"id":"f","type":"file","file":"notes/plan.md","x":7,"y":7,"width":10,"height":10},
                    {"id":"l","type":"link","url":"https://example.org","x":9,"y":9,"width":1,"height":1}
                ],
                "edges": [{"id":"e","fromNode":"t","toNode":"g"}]
            }"#,
        )
        .expect("valid canvas");

        let ids: Vec<_> = canvas.elements().iter().map(Element::id).collect();
        assert_eq!(ids, vec![Id::new("t"), Id::new("g"), Id::new("f"), Id::new("l")]);
        assert_eq!(
            canvas.element(Id::new("l")).map(Element::kind),
            Some(&ElementKind::Other {
                tag: "link".to_string()
            })
        );
        assert_eq!(
            canvas.connections(),
            &[Connection::new(Id::new("t"), Id::new("g"))]
        );
    }

    #[test]
    fn test_duplicate_ids_are_reported_with_both_spans() {
        let source = r#"{"nodes":[
            {"id":"a","type":"text","x":0,"y":0,"width":1,"height":1},
            {"id":"a","type":"group","x":0,"y":0,"width":1,"height":1}
        ]}"#;

        let err = build(source).expect_err("duplicate id");
        assert_eq!(codes(&err), vec![Some(ErrorCode::E100)]);

        let labels = err.diagnostics()[0].labels();
        let duplicate = labels[0].span();
        let first = labels[1].span();
        assert!(source[duplicate.start()..duplicate.end()].contains("group"));
        assert!(source[first.start()..first.end()].contains("text"));
    }

    #[test]
    fn test_dangling_edges_are_all_reported() {
        let err = build(
            r#"{"nodes":[{"id":"a","type":"text","x":0,"y":0,"width":1,"height":1}],
                "edges":[{"fromNode":"a","toNode":"b"},{"fromNode":"c","toNode":"d"}]}"#,
        )
        .expect_err("dangling edges");

        assert_eq!(codes(&err), vec![Some(ErrorCode::E101); 3]);
        assert!(err.diagnostics()[0].message().contains("`b`"));
    }

    #[test]
    fn test_bad_node_points_at_record() {
        let source = r#"{"nodes":[
            {"id":"ok","type":"text","x":0,"y":0,"width":1,"height":1},
            {"id":"bad","type":"text","x":"left","y":0,"width":1,"height":1}
        ]}"#;

        let err = build(source).expect_err("bad coordinate");
        assert_eq!(codes(&err), vec![Some(ErrorCode::E002)]);

        let span = err.diagnostics()[0].labels()[0].span();
        let bad_record = source.find(r#"{"id":"bad""#).unwrap_or_default();
        assert!(span.start() > bad_record, "span {span:?} should fall inside the bad node");
        assert!(err.diagnostics()[0].message().ends_with("in this node"));
    }

    #[test]
    fn test_edge_to_undecodable_node_is_not_reported_again() {
        let err = build(
            r#"{"nodes":[
                {"id":"ok","type":"text","x":0,"y":0,"width":1,"height":1},
                {"id":"broken","type":"text","x":"left","y":0,"width":1,"height":1}
            ],
            "edges":[
                {"fromNode":"ok","toNode":"broken"},
                {"fromNode":"ok","toNode":"ghost"}
            ]}"#,
        )
        .expect_err("bad node");

        assert_eq!(codes(&err), vec![Some(ErrorCode::E002), Some(ErrorCode::E101)]);
        assert!(err.diagnostics()[1].message().contains("`ghost`"));
    }

    #[test]
    fn test_syntax_error() {
        let err = build(r#"{"nodes": [ , ]}"#).expect_err("malformed JSON");
        assert_eq!(codes(&err), vec![Some(ErrorCode::E001)]);
    }

    #[test]
    fn test_truncated_document() {
        let err = build(r#"{"nodes": ["#).expect_err("truncated JSON");
        assert_eq!(codes(&err), vec![Some(ErrorCode::E003)]);
    }

    #[test]
    fn test_non_object_document() {
        let err = build("[]").expect_err("not a canvas");
        assert_eq!(codes(&err), vec![Some(ErrorCode::E002)]);
        assert!(err.diagnostics()[0].message().contains("canvas object"));
    }

    #[test]
    fn test_negative_size_is_only_a_warning() {
        let canvas = build(
            r#"{"nodes":[{"id":"g","type":"group","x":0,"y":0,"width":-5,"height":10}]}"#,
        )
        .expect("warnings do not fail loading");

        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_warning_is_returned_alongside_errors() {
        let err = build(
            r#"{"nodes":[
                {"id":"g","type":"group","x":0,"y":0,"width":-5,"height":10},
                {"id":"g","type":"group","x":0,"y":0,"width":5,"height":10}
            ]}"#,
        )
        .expect_err("duplicate id");

        assert_eq!(codes(&err), vec![Some(ErrorCode::E200), Some(ErrorCode::E100)]);
        assert!(err.diagnostics()[0].severity().is_warning());
    }
}
