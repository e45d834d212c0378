use std::time::{Duration, Instant};
use rand::Rng;
use ordered_float::OrderedFloat;
use sssp_trace::graph::{Graph, GraphStore, MutableGraph};
use sssp_trace::Dijkstra;

// Function to generate a random directed graph with specified parameters
fn generate_random_graph(
    num_vertices: usize,
    edge_factor: f64,
) -> GraphStore<usize, OrderedFloat<f64>> {
    let mut graph = GraphStore::with_capacity(num_vertices);
    let mut rng = rand::thread_rng();

    for v in 0..num_vertices {
        graph.add_vertex(v);
    }

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            if let Err(err) = graph.add_edge(u, v, weight) {
                log::warn!("skipping edge {} -> {}: {}", u, v, err);
            }
        }
    }

    graph
}

// Function to benchmark one engine configuration on a graph
fn benchmark_engine(
    name: &str,
    dijkstra: &Dijkstra,
    graph: &GraphStore<usize, OrderedFloat<f64>>,
    source: usize,
) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match dijkstra.run(graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - {} failed: {}", name, err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices, {} relaxations recorded, in {:?}",
        result.reachable_count(),
        result.visit_trace.relaxation_count(),
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra trace recording overhead");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let full_trace = Dijkstra::new();
    let order_only = Dijkstra::new().with_relaxation_events(false);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor);
        let source = 0;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let full_time = benchmark_engine("Dijkstra (full trace)", &full_trace, &graph, source);
        let order_time = benchmark_engine("Dijkstra (order only)", &order_only, &graph, source);

        results.push((size, full_time, order_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Full (ms)", "Order (ms)", "Overhead"
    );
    println!("-----------------------------------------------------");

    for (size, full_time, order_time) in &results {
        let overhead = full_time.as_secs_f64() / order_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            full_time.as_millis(),
            order_time.as_millis(),
            overhead
        );
    }
}
