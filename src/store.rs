//! On-disk graphs (`NNN_KKK.json`) and CSV export of generated sequences.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::GridGraph;

/// One generated sequence, as exported to CSV and served over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub n: usize,
    pub k: usize,
    pub sequence: Vec<usize>,
}

impl SequenceRecord {
    /// `n,k,length,"[a, b, ...]"`
    pub fn csv_row(&self) -> String {
        let items: Vec<String> = self.sequence.iter().map(|x| x.to_string()).collect();
        format!("{},{},{},\"[{}]\"", self.n, self.k, self.sequence.len(), items.join(", "))
    }
}

pub fn graph_file_name(n: usize, k: usize) -> String {
    format!("{n:03}_{k:03}.json")
}

/// Write `graph` into `dir`, creating the directory if needed.
pub fn save_graph(dir: &Path, graph: &GridGraph) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(graph_file_name(graph.n(), graph.k()));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, graph)?;
    writer.flush()?;
    debug!(path = %path.display(), "saved graph");
    Ok(path)
}

pub fn load_graph(path: &Path) -> Result<GridGraph> {
    let reader = BufReader::new(File::open(path)?);
    let graph: GridGraph = serde_json::from_reader(reader)?;
    graph.check_shape()?;
    Ok(graph)
}

/// Load every `.json` graph in `dir`, ordered by `(n, k)`.
pub fn load_graphs(dir: &Path) -> Result<Vec<GridGraph>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    let mut graphs = paths
        .iter()
        .map(|p| load_graph(p))
        .collect::<Result<Vec<_>>>()?;
    graphs.sort_by_key(|g| (g.n(), g.k()));
    Ok(graphs)
}

pub fn write_sequences_csv(path: &Path, records: &[SequenceRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", record.csv_row())?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = records.len(), "wrote sequences");
    Ok(())
}
