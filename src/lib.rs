pub mod arithmetic;
pub mod batch;
pub mod config;
pub mod divisors;
pub mod error;
pub mod graph;
pub mod grid;
pub mod point;
pub mod render;
pub mod store;
pub mod traverse;

use std::time::Instant;

use tracing::info;

use config::Params;
use graph::GridGraph;

pub use error::{Error, Result};
pub use graph::build_graph;
pub use traverse::{traverse_down, traverse_down_with_cap};

pub struct Triangulation {
    pub graph: GridGraph,
    pub sequence: Vec<usize>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Build the `(n, k)` graph and walk it, timing each stage.
pub fn generate(n: usize, k: usize, params: &Params) -> Result<(Triangulation, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Allocate and wire the grid
    let t = Instant::now();
    let graph = build_graph(n, k)?;
    timings.push(Timing {
        name: "build",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Walk it
    let t = Instant::now();
    let sequence = traverse_down_with_cap(&graph, params.tick_cap(n))?;
    timings.push(Timing {
        name: "traverse",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });
    info!(n, k, len = sequence.len(), ms = total_ms, "generated sequence");

    Ok((Triangulation { graph, sequence }, timings))
}
