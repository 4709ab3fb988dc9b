//! Build, save and walk every shape up to a bound, then export one CSV.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::Params;
use crate::divisors;
use crate::error::Result;
use crate::graph::build_graph;
use crate::store::{self, SequenceRecord};
use crate::traverse::traverse_down_with_cap;

pub struct BatchOutput {
    pub graph_dir: PathBuf,
    pub csv_path: PathBuf,
    pub records: Vec<SequenceRecord>,
}

/// Run the batch for `n <= max_n`, optionally restricted to `rows` rows.
///
/// Only the shapes enumerated here reach the CSV; graph files already in the
/// output directory are overwritten or left alone, never re-read.
pub fn run_batch(max_n: usize, rows: Option<usize>, params: &Params) -> Result<BatchOutput> {
    let shapes = divisors::shapes(max_n, rows);
    let graph_dir = match rows {
        Some(r) => params.out_dir.join(format!("K{r}_Graphs")),
        None => params.out_dir.join("Graphs"),
    };
    info!(count = shapes.len(), dir = %graph_dir.display(), "building graphs");

    let walked = shapes
        .par_iter()
        .map(|&(n, k)| -> Result<Option<SequenceRecord>> {
            let graph = build_graph(n, k)?;
            store::save_graph(&graph_dir, &graph)?;
            match traverse_down_with_cap(&graph, params.tick_cap(n)) {
                Ok(sequence) => Ok(Some(SequenceRecord { n, k, sequence })),
                Err(e) => {
                    warn!(n, k, "skipping shape: {e}");
                    Ok(None)
                }
            }
        })
        .collect::<Result<Vec<_>>>()?;
    let records: Vec<SequenceRecord> = walked.into_iter().flatten().collect();

    let csv_name = match rows {
        Some(r) => format!("sequences_{r:02}.csv"),
        None => "sequences.csv".to_string(),
    };
    let csv_path = params.out_dir.join(csv_name);
    store::write_sequences_csv(&csv_path, &records)?;
    info!(rows = records.len(), path = %csv_path.display(), "exported sequences");

    Ok(BatchOutput {
        graph_dir,
        csv_path,
        records,
    })
}
