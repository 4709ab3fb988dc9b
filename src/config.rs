use std::path::PathBuf;

/// Tunable parameters shared by the CLI and the server.
#[derive(Clone, Debug)]
pub struct Params {
    // Traversal
    /// Tick budget per point; the walk fails after `cap_factor * n` ticks.
    pub cap_factor: usize,

    // Rendering
    pub cell_size: usize,
    pub dot_radius: usize,

    // Batch output
    pub out_dir: PathBuf,
}

impl Params {
    pub fn tick_cap(&self, n: usize) -> usize {
        self.cap_factor.saturating_mul(n)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cap_factor: 4,
            cell_size: 48,
            dot_radius: 4,
            out_dir: PathBuf::from("artifacts"),
        }
    }
}
