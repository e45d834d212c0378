use sssp_trace::graph::adapters::default_label;
use sssp_trace::graph::samples::{self, SAMPLE_NAMES};
use sssp_trace::graph::{Graph, GraphStore};
use sssp_trace::{find_shortest_path, Error};

fn s(name: &str) -> String {
    name.to_string()
}

fn vertex_names(graph: &GraphStore<String, f64>) -> Vec<&str> {
    graph.vertices().map(|v| v.as_str()).collect()
}

#[test]
fn test_json_document_keeps_key_order() {
    let json = r#"{
        "Zed": {"Amy": 2, "Bob": 1.5},
        "Amy": {"Zed": 2},
        "Bob": {"Cat": 4}
    }"#;
    let graph: GraphStore<String, f64> = GraphStore::from_json_str(json).unwrap();

    assert_eq!(vertex_names(&graph), vec!["Zed", "Amy", "Bob", "Cat"]);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edge_weight(&s("Zed"), &s("Bob")), Some(1.5));
    assert_eq!(graph.edge_weight(&s("Bob"), &s("Cat")), Some(4.0));
}

#[test]
fn test_json_reader_matches_str() {
    let json = r#"{"A": {"B": 1}, "B": {}}"#;
    let from_str: GraphStore<String, f64> = GraphStore::from_json_str(json).unwrap();
    let from_reader: GraphStore<String, f64> =
        GraphStore::from_json_reader(json.as_bytes()).unwrap();

    assert_eq!(vertex_names(&from_str), vertex_names(&from_reader));
    assert_eq!(from_reader.edge_weight(&s("A"), &s("B")), Some(1.0));
}

#[test]
fn test_json_rejects_non_positive_weights() {
    let result: Result<GraphStore<String, f64>, _> =
        GraphStore::from_json_str(r#"{"A": {"B": 3}, "B": {"A": 0}}"#);
    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_json_rejects_malformed_documents() {
    for document in [r#"["A", "B"]"#, r#"{"A": null}"#, r#"{"A": {"B": "far"}}"#] {
        let result: Result<GraphStore<String, f64>, _> = GraphStore::from_json_str(document);
        assert!(
            matches!(result, Err(Error::InvalidGraph(_))),
            "{} should be an invalid graph, got {:?}",
            document,
            result
        );
    }
}

#[test]
fn test_json_syntax_errors_stay_json_errors() {
    let truncated: Result<GraphStore<String, f64>, _> =
        GraphStore::from_json_str(r#"{"A": {"B": 1"#);
    assert!(matches!(truncated, Err(Error::Json(_))));

    let garbage: Result<GraphStore<String, f64>, _> = GraphStore::from_json_str("not json");
    assert!(matches!(garbage, Err(Error::Json(_))));
}

#[test]
fn test_json_reader_rejects_malformed_documents() {
    let result: Result<GraphStore<String, f64>, _> =
        GraphStore::from_json_reader(r#"{"A": [1, 2]}"#.as_bytes());
    assert!(matches!(result, Err(Error::InvalidGraph(_))));
}

#[test]
fn test_json_export_round_trip() {
    let graph = samples::example().unwrap();
    let json = graph.to_json_string().unwrap();
    let reloaded: GraphStore<String, f64> = GraphStore::from_json_str(&json).unwrap();

    assert_eq!(vertex_names(&reloaded), vertex_names(&graph));
    let original: Vec<_> = graph.edges().collect();
    let copied: Vec<_> = reloaded.edges().collect();
    assert_eq!(original, copied);
}

#[test]
fn test_matrix_with_default_labels() {
    let inf = f64::INFINITY;
    let matrix = vec![
        vec![0.0, 7.0, inf],
        vec![7.0, 0.0, 2.0],
        vec![inf, 2.0, 0.0],
    ];
    let graph = GraphStore::from_matrix(&matrix, None).unwrap();

    assert_eq!(vertex_names(&graph), vec!["A", "B", "C"]);
    assert_eq!(graph.edge_count(), 4, "Zero and infinite cells are not edges");
    assert!(!graph.has_edge(&s("A"), &s("C")));

    let found = find_shortest_path(&graph, &s("A"), &s("C")).unwrap();
    assert_eq!(found.path, vec![s("A"), s("B"), s("C")]);
    assert_eq!(found.distance, 9.0);
}

#[test]
fn test_matrix_with_labels_and_bad_shapes() {
    let labels = vec![s("in"), s("out")];
    let matrix = [vec![0.0, 1.0], vec![0.0, 0.0]];
    let graph = GraphStore::from_matrix(&matrix, Some(labels.as_slice())).unwrap();
    assert_eq!(graph.edge_weight(&s("in"), &s("out")), Some(1.0));

    let short_labels = vec![s("only")];
    let matrix = [vec![0.0, 1.0], vec![1.0, 0.0]];
    let err = GraphStore::from_matrix(&matrix, Some(short_labels.as_slice())).unwrap_err();
    assert!(matches!(err, Error::InvalidGraph(_)));

    let ragged = GraphStore::from_matrix(&[vec![0.0, 1.0], vec![1.0]], None).unwrap_err();
    assert!(matches!(ragged, Error::InvalidGraph(_)));

    let negative = GraphStore::from_matrix(&[vec![0.0, -1.0], vec![1.0, 0.0]], None).unwrap_err();
    assert!(matches!(negative, Error::InvalidWeight { .. }));
}

#[test]
fn test_default_labels() {
    assert_eq!(default_label(0), "A");
    assert_eq!(default_label(25), "Z");
    assert_eq!(default_label(26), "A1");
    assert_eq!(default_label(27), "B1");
    assert_eq!(default_label(53), "B2");
}

#[test]
fn test_undirected_dot_lists_each_pair_once() {
    let graph: GraphStore<String, f64> =
        GraphStore::from_json_str(r#"{"A": {"B": 2}, "B": {"A": 2, "C": 1.5}}"#).unwrap();

    let dot = graph.to_dot(false);
    assert_eq!(
        dot,
        concat!(
            "graph G {\n",
            "  \"A\";\n",
            "  \"B\";\n",
            "  \"C\";\n",
            "  \"A\" -- \"B\" [label=\"2\"];\n",
            "  \"B\" -- \"C\" [label=\"1.5\"];\n",
            "}"
        )
    );
}

#[test]
fn test_directed_dot_lists_every_edge() {
    let graph: GraphStore<String, f64> =
        GraphStore::from_json_str(r#"{"A": {"B": 2}, "B": {"A": 2}}"#).unwrap();

    let dot = graph.to_dot(true);
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("\"A\" -> \"B\" [label=\"2\"];"));
    assert!(dot.contains("\"B\" -> \"A\" [label=\"2\"];"));
}

#[test]
fn test_every_sample_loads() {
    let expected_sizes = [6, 10, 10, 16, 11];
    for (name, size) in SAMPLE_NAMES.iter().zip(expected_sizes) {
        let graph = samples::by_name(name).unwrap();
        assert_eq!(graph.vertex_count(), size, "sample {}", name);
    }

    assert!(matches!(samples::by_name("nope"), Err(Error::InvalidGraph(_))));
}
