//! Predefined graphs for demos and tests.
//!
//! All samples are undirected in spirit: every edge is listed from both ends.

use crate::graph::GraphStore;
use crate::{Error, Result};

type Table = &'static [(&'static str, &'static [(&'static str, f64)])];

/// Names accepted by [`by_name`]
pub const SAMPLE_NAMES: [&str; 5] = [
    "example",
    "roadNetwork",
    "networkTopology",
    "gridMaze",
    "flightNetwork",
];

//       A
//     1/ \4
//    B --- C
//   /|     |\
//  2 |     | 1
//  / 3     3 \
// D---E-----F
//    1    1
const EXAMPLE: Table = &[
    ("A", &[("B", 1.0), ("C", 4.0)]),
    ("B", &[("A", 1.0), ("C", 3.0), ("D", 2.0), ("E", 3.0)]),
    ("C", &[("A", 4.0), ("B", 3.0), ("E", 3.0), ("F", 1.0)]),
    ("D", &[("B", 2.0), ("E", 1.0)]),
    ("E", &[("B", 3.0), ("C", 3.0), ("D", 1.0), ("F", 1.0)]),
    ("F", &[("C", 1.0), ("E", 1.0)]),
];

const ROAD_NETWORK: Table = &[
    ("City A", &[("City B", 5.0), ("City C", 10.0), ("City D", 15.0)]),
    ("City B", &[("City A", 5.0), ("City E", 7.0), ("City F", 12.0)]),
    ("City C", &[("City A", 10.0), ("City F", 8.0), ("City G", 11.0)]),
    ("City D", &[("City A", 15.0), ("City G", 9.0), ("City H", 6.0)]),
    ("City E", &[("City B", 7.0), ("City F", 4.0), ("City I", 14.0)]),
    (
        "City F",
        &[("City B", 12.0), ("City C", 8.0), ("City E", 4.0), ("City G", 3.0), ("City I", 8.0)],
    ),
    (
        "City G",
        &[("City C", 11.0), ("City D", 9.0), ("City F", 3.0), ("City H", 5.0), ("City J", 7.0)],
    ),
    ("City H", &[("City D", 6.0), ("City G", 5.0), ("City J", 9.0)]),
    ("City I", &[("City E", 14.0), ("City F", 8.0), ("City J", 10.0)]),
    ("City J", &[("City G", 7.0), ("City H", 9.0), ("City I", 10.0)]),
];

const NETWORK_TOPOLOGY: Table = &[
    ("Router1", &[("Router2", 2.0), ("Router3", 4.0), ("Router4", 3.0)]),
    ("Router2", &[("Router1", 2.0), ("Router5", 5.0), ("Router6", 1.0)]),
    ("Router3", &[("Router1", 4.0), ("Router6", 3.0), ("Router7", 2.0)]),
    ("Router4", &[("Router1", 3.0), ("Router7", 4.0), ("Router8", 1.0)]),
    ("Router5", &[("Router2", 5.0), ("Router9", 2.0)]),
    ("Router6", &[("Router2", 1.0), ("Router3", 3.0), ("Router9", 5.0), ("Router10", 3.0)]),
    ("Router7", &[("Router3", 2.0), ("Router4", 4.0), ("Router10", 2.0)]),
    ("Router8", &[("Router4", 1.0), ("Router10", 4.0)]),
    ("Router9", &[("Router5", 2.0), ("Router6", 5.0)]),
    ("Router10", &[("Router6", 3.0), ("Router7", 2.0), ("Router8", 4.0)]),
];

const GRID_MAZE: Table = &[
    ("A1", &[("A2", 1.0), ("B1", 2.0)]),
    ("A2", &[("A1", 1.0), ("A3", 3.0), ("B2", 1.0)]),
    ("A3", &[("A2", 3.0), ("A4", 1.0), ("B3", 4.0)]),
    ("A4", &[("A3", 1.0), ("B4", 2.0)]),
    ("B1", &[("A1", 2.0), ("B2", 2.0), ("C1", 1.0)]),
    ("B2", &[("A2", 1.0), ("B1", 2.0), ("B3", 5.0), ("C2", 3.0)]),
    ("B3", &[("A3", 4.0), ("B2", 5.0), ("B4", 1.0), ("C3", 2.0)]),
    ("B4", &[("A4", 2.0), ("B3", 1.0), ("C4", 5.0)]),
    ("C1", &[("B1", 1.0), ("C2", 2.0), ("D1", 3.0)]),
    ("C2", &[("B2", 3.0), ("C1", 2.0), ("C3", 1.0), ("D2", 4.0)]),
    ("C3", &[("B3", 2.0), ("C2", 1.0), ("C4", 2.0), ("D3", 1.0)]),
    ("C4", &[("B4", 5.0), ("C3", 2.0), ("D4", 3.0)]),
    ("D1", &[("C1", 3.0), ("D2", 1.0)]),
    ("D2", &[("C2", 4.0), ("D1", 1.0), ("D3", 3.0)]),
    ("D3", &[("C3", 1.0), ("D2", 3.0), ("D4", 2.0)]),
    ("D4", &[("C4", 3.0), ("D3", 2.0)]),
];

const FLIGHT_NETWORK: Table = &[
    ("New York", &[("Boston", 3.0), ("Chicago", 15.0), ("Miami", 21.0)]),
    ("Boston", &[("New York", 3.0), ("Chicago", 14.0), ("Toronto", 8.0)]),
    ("Chicago", &[("New York", 15.0), ("Boston", 14.0), ("Denver", 18.0), ("Los Angeles", 30.0)]),
    ("Denver", &[("Chicago", 18.0), ("San Francisco", 15.0), ("Los Angeles", 14.0)]),
    (
        "Los Angeles",
        &[("Chicago", 30.0), ("Denver", 14.0), ("San Francisco", 6.0), ("Seattle", 18.0)],
    ),
    ("San Francisco", &[("Denver", 15.0), ("Los Angeles", 6.0), ("Seattle", 13.0)]),
    ("Seattle", &[("Los Angeles", 18.0), ("San Francisco", 13.0), ("Vancouver", 3.0)]),
    ("Miami", &[("New York", 21.0), ("Mexico City", 15.0)]),
    ("Toronto", &[("Boston", 8.0), ("Vancouver", 45.0)]),
    ("Vancouver", &[("Seattle", 3.0), ("Toronto", 45.0)]),
    ("Mexico City", &[("Miami", 15.0), ("Los Angeles", 27.0)]),
];

fn from_table(table: Table) -> Result<GraphStore<String, f64>> {
    GraphStore::from_adjacency(table.iter().map(|(vertex, edges)| {
        (
            vertex.to_string(),
            edges.iter().map(|(to, weight)| (to.to_string(), *weight)),
        )
    }))
}

/// Six-vertex example graph (A..F)
pub fn example() -> Result<GraphStore<String, f64>> {
    from_table(EXAMPLE)
}

/// Ten cities connected by roads
pub fn road_network() -> Result<GraphStore<String, f64>> {
    from_table(ROAD_NETWORK)
}

/// Ten routers with link costs
pub fn network_topology() -> Result<GraphStore<String, f64>> {
    from_table(NETWORK_TOPOLOGY)
}

/// 4x4 maze with weighted corridors
pub fn grid_maze() -> Result<GraphStore<String, f64>> {
    from_table(GRID_MAZE)
}

/// Small flight network; note Mexico City -> Los Angeles has no return leg
pub fn flight_network() -> Result<GraphStore<String, f64>> {
    from_table(FLIGHT_NETWORK)
}

/// Looks up a sample graph by its name in [`SAMPLE_NAMES`]
pub fn by_name(name: &str) -> Result<GraphStore<String, f64>> {
    match name {
        "example" => example(),
        "roadNetwork" => road_network(),
        "networkTopology" => network_topology(),
        "gridMaze" => grid_maze(),
        "flightNetwork" => flight_network(),
        _ => Err(Error::InvalidGraph(format!("unknown sample graph: {}", name))),
    }
}
