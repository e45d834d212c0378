use std::env;
use std::fs::File;
use std::io::BufReader;

use sssp_trace::graph::{samples, Graph, GraphStore};
use sssp_trace::Dijkstra;

/// Command line configuration
#[derive(Debug, Clone)]
struct CliConfig {
    /// Path to a JSON adjacency document, or the name of a sample graph
    graph: String,
    source: Option<String>,
    target: Option<String>,
    /// Print the full result as JSON instead of a table
    json: bool,
    /// Record relaxation events in the trace
    relaxations: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            graph: "example".to_string(),
            source: None,
            target: None,
            json: false,
            relaxations: true,
        }
    }
}

impl CliConfig {
    fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => config.json = true,
                "--no-relaxations" => config.relaxations = false,
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(graph) = positional.next() {
            config.graph = graph;
        }
        config.source = positional.next();
        config.target = positional.next();
        config
    }
}

fn load_graph(name: &str) -> Result<GraphStore<String, f64>, Box<dyn std::error::Error>> {
    if samples::SAMPLE_NAMES.contains(&name) {
        return Ok(samples::by_name(name)?);
    }
    let file = File::open(name)?;
    Ok(GraphStore::from_json_reader(BufReader::new(file))?)
}

fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        format!("{}", distance)
    } else {
        "unreachable".to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = CliConfig::from_args(env::args().skip(1));
    log::debug!("configuration: {:?}", config);

    let graph = load_graph(&config.graph)?;
    let source = match &config.source {
        Some(source) => source.clone(),
        None => match graph.vertices().next() {
            Some(first) => first.clone(),
            None => return Err("graph has no vertices".into()),
        },
    };

    let dijkstra = Dijkstra::new().with_relaxation_events(config.relaxations);

    if let Some(target) = &config.target {
        let found = dijkstra.shortest_path(&graph, &source, target)?;
        if config.json {
            println!("{}", serde_json::to_string_pretty(&found)?);
        } else if found.is_reachable() {
            println!("Shortest path {} -> {}: {}", source, target, found.path.join(" -> "));
            println!("Distance: {}", found.distance);
        } else {
            println!("No path from {} to {}", source, target);
        }
        return Ok(());
    }

    let result = dijkstra.run(&graph, &source)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Graph '{}' has {} vertices and {} edges",
        config.graph,
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("\n{:<16} | {:<12} | {:<16}", "Vertex", "Distance", "Predecessor");
    println!("-------------------------------------------------");
    for (vertex, distance) in &result.distances {
        let previous = result.predecessors.get(vertex).map_or("-", |v| v.as_str());
        println!("{:<16} | {:<12} | {:<16}", vertex, format_distance(*distance), previous);
    }

    println!("\nVisit order:");
    for (index, step) in result.visit_trace.steps().iter().enumerate() {
        println!("  {:>3}. {} ({})", index + 1, step.vertex, format_distance(step.distance));
        for relaxation in &step.relaxations {
            println!(
                "       {} -> {}: {} -> {}",
                step.vertex,
                relaxation.target,
                format_distance(relaxation.previous),
                relaxation.distance
            );
        }
    }

    Ok(())
}
