use colored::*;
use sssp_trace::graph::{samples, Graph};
use sssp_trace::{Dijkstra, ShortestPathResult};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Prints every vertex with its state after one replayed step
fn render_frame(
    graph: &impl Graph<String, f64>,
    result: &ShortestPathResult<String, f64>,
    done: &[&String],
    current: &String,
    lit: &[(&String, &String)],
) {
    for vertex in graph.vertices() {
        let padded = format!("{:<10}", vertex);
        let label = padded.as_str();
        let label = if vertex == current {
            label.black().on_yellow().bold()
        } else if done.contains(&vertex) {
            label.green()
        } else if lit.iter().any(|(_, to)| *to == vertex) {
            label.cyan().bold()
        } else {
            label.dimmed()
        };

        let distance = result
            .visit_trace
            .steps()
            .iter()
            .find(|step| &step.vertex == vertex)
            .map(|step| step.distance)
            .filter(|d| d.is_finite() && (done.contains(&vertex) || vertex == current))
            .map_or("?".to_string(), |d| d.to_string());

        println!("  {} {}", label, distance);
    }
}

fn main() {
    let graph = match samples::example() {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", format!("failed to build sample graph: {}", err).as_str().red());
            return;
        }
    };

    let source = "A".to_string();
    let target = "F".to_string();

    let result = match Dijkstra::new().run(&graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", format!("run failed: {}", err).as_str().red());
            return;
        }
    };

    println!("{}", "Replaying Dijkstra from A".bold().underline());

    let mut done: Vec<&String> = Vec::new();
    for frame in result.visit_trace.replay() {
        println!(
            "\n{} {} at distance {}",
            format!("Step {}:", frame.index + 1).as_str().bold(),
            "extract".yellow(),
            frame.step.distance
        );
        for (from, to) in &frame.updated {
            println!("  {} {} -> {}", "relax".cyan(), from, to);
        }

        render_frame(&graph, &result, &done, &frame.step.vertex, &frame.updated);
        done.push(&frame.step.vertex);

        io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(300));
    }

    match result.path_to(&target) {
        Ok(path) if !path.is_empty() => {
            println!("\n{} {}", "Shortest path:".bold(), path.join(" -> ").as_str().green());
        }
        Ok(_) => println!("\n{}", "No path".red()),
        Err(err) => println!("\n{}", format!("broken predecessor chain: {}", err).as_str().red()),
    }
}
