use sssp_trace::graph::{Direction, Graph, GraphStore, MutableGraph};
use sssp_trace::Error;

fn s(name: &str) -> String {
    name.to_string()
}

fn vertex_names(graph: &GraphStore<String, f64>) -> Vec<&str> {
    graph.vertices().map(|v| v.as_str()).collect()
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();

    assert!(graph.add_vertex(s("A")));
    assert!(!graph.add_vertex(s("A")), "Second insert should be a no-op");
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_edge_inserts_endpoints_in_order() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("X"), s("Y"), 2.5).unwrap();
    graph.add_edge(s("Z"), s("X"), 1.0).unwrap();

    assert_eq!(vertex_names(&graph), vec!["X", "Y", "Z"]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight(&s("X"), &s("Y")), Some(2.5));
    assert_eq!(graph.edge_weight(&s("Y"), &s("X")), None, "Edges are directed");
}

// Zero and negative weights are rejected without mutating the store
#[test]
fn test_invalid_weights_are_rejected() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();

    for weight in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = graph.add_edge(s("X"), s("Y"), weight).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }), "weight {} should be invalid", weight);
    }

    assert_eq!(graph.vertex_count(), 0, "No endpoint should have been inserted");
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_vertex(&s("X")));
}

#[test]
fn test_invalid_undirected_edge_leaves_graph_untouched() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    assert!(graph.add_undirected_edge(s("A"), s("B"), -1.0).is_err());
    assert_eq!(graph.vertex_count(), 0);

    graph.add_undirected_edge(s("A"), s("B"), 4.0).unwrap();
    assert_eq!(graph.edge_weight(&s("A"), &s("B")), Some(4.0));
    assert_eq!(graph.edge_weight(&s("B"), &s("A")), Some(4.0));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_neighbors_of_unknown_vertex_fails() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_vertex(s("lonely"));

    let err = graph.neighbors(&s("ghost")).err().unwrap();
    assert!(matches!(err, Error::UnknownVertex(_)));

    let neighbors: Vec<_> = graph.neighbors(&s("lonely")).unwrap().collect();
    assert!(neighbors.is_empty(), "Known vertex without edges has no neighbors");
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("A"), s("C"), 4.0).unwrap();
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();
    graph.add_edge(s("A"), s("D"), 2.0).unwrap();

    let neighbors: Vec<(String, f64)> = graph
        .neighbors(&s("A"))
        .unwrap()
        .map(|(v, w)| (v.clone(), w))
        .collect();
    assert_eq!(neighbors, vec![(s("C"), 4.0), (s("B"), 1.0), (s("D"), 2.0)]);
}

// Re-adding an edge replaces its weight and keeps its position
#[test]
fn test_readding_edge_replaces_weight() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("A"), s("B"), 5.0).unwrap();
    graph.add_edge(s("A"), s("C"), 1.0).unwrap();
    graph.add_edge(s("A"), s("B"), 2.0).unwrap();

    assert_eq!(graph.edge_count(), 2);
    let targets: Vec<_> = graph.neighbors(&s("A")).unwrap().collect();
    assert_eq!(targets, vec![(&s("B"), 2.0), (&s("C"), 1.0)]);
}

#[test]
fn test_vertices_is_restartable() {
    let mut graph: GraphStore<u32, f64> = GraphStore::new();
    for v in [3, 1, 2] {
        graph.add_vertex(v);
    }

    let first: Vec<u32> = graph.vertices().copied().collect();
    let second: Vec<u32> = graph.vertices().copied().collect();
    assert_eq!(first, vec![3, 1, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_remove_edge() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("A"), s("B"), 1.0).unwrap();

    assert!(graph.remove_edge(&s("A"), &s("B")));
    assert!(!graph.remove_edge(&s("A"), &s("B")), "Edge is already gone");
    assert!(!graph.has_edge(&s("A"), &s("B")));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 2, "Removing an edge keeps its endpoints");
}

// Direct-edge weights along a waypoint sequence such as A -> B -> C
#[test]
fn test_path_weight_through_waypoints() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("A"), s("B"), 2.0).unwrap();
    graph.add_edge(s("B"), s("C"), 3.5).unwrap();
    graph.add_vertex(s("D"));

    assert_eq!(graph.path_weight(&[s("A"), s("B"), s("C")]), Some(5.5));
    assert_eq!(graph.path_weight(&[s("A"), s("C")]), None, "No direct A -> C edge");
    assert_eq!(graph.path_weight(&[s("C"), s("B")]), None, "Edges are directed");
    assert_eq!(graph.path_weight(&[s("D")]), Some(0.0));
    assert_eq!(graph.path_weight(&[s("Q")]), None);
    assert_eq!(graph.path_weight(&[]), None);
}

#[test]
fn test_edges_iterates_in_insertion_order() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("B"), s("A"), 1.0).unwrap();
    graph.add_edge(s("A"), s("C"), 2.0).unwrap();
    graph.add_edge(s("B"), s("C"), 3.0).unwrap();

    let edges: Vec<(&str, &str, f64)> = graph
        .edges()
        .map(|(from, to, w)| (from.as_str(), to.as_str(), w))
        .collect();
    assert_eq!(edges, vec![("B", "A", 1.0), ("B", "C", 3.0), ("A", "C", 2.0)]);
}

#[test]
fn test_connection_weight_falls_back_to_reverse_edge() {
    let mut graph: GraphStore<String, f64> = GraphStore::new();
    graph.add_edge(s("A"), s("B"), 4.0).unwrap();
    graph.add_edge(s("B"), s("A"), 6.0).unwrap();
    graph.add_edge(s("C"), s("A"), 2.5).unwrap();
    graph.add_vertex(s("D"));

    assert_eq!(graph.connection_weight(&s("A"), &s("B")), Some((4.0, Direction::Forward)));
    assert_eq!(graph.connection_weight(&s("B"), &s("A")), Some((6.0, Direction::Forward)));
    assert_eq!(graph.connection_weight(&s("A"), &s("C")), Some((2.5, Direction::Reverse)));
    assert_eq!(graph.connection_weight(&s("A"), &s("D")), None);
    assert_eq!(graph.connection_weight(&s("A"), &s("Z")), None);
}
