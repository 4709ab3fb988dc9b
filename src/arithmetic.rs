//! Closed-form sequence generator. Produces the same walk as the graph
//! traversal from integer arithmetic alone, without building a graph.

/// Sequence for a grid of `rows` rows and `cols` columns.
///
/// A straight run steps down one column (`+cols`, `rows - 1` times). A zigzag
/// run steps right once, then alternates up-left (`-(cols + 1)`) and right
/// (`+1`) `rows - 1` times. Runs alternate, starting straight, until `cols`
/// straight runs and `cols - 1` zigzag runs are done.
pub fn arithmetic_sequence(rows: usize, cols: usize) -> Vec<usize> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let mut seq = Vec::with_capacity(rows * cols * 3);
    let mut curr = 1usize;
    seq.push(curr);

    for run in 0..cols {
        for _ in 1..rows {
            curr += cols;
            seq.push(curr);
        }
        if run + 1 == cols {
            break;
        }
        curr += 1;
        seq.push(curr);
        for _ in 1..rows {
            curr -= cols + 1;
            seq.push(curr);
            curr += 1;
            seq.push(curr);
        }
    }
    seq
}

/// Length of the closed-form sequence without materialising it.
pub fn sequence_len(rows: usize, cols: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    1 + cols * (rows - 1) + (cols - 1) * (2 * rows - 1)
}

/// Sequence lengths for `rows`-row grids of 2 up to `max_cols` columns.
/// The list is seeded with `rows` itself.
pub fn sequence_lengths(max_cols: usize, rows: usize) -> Vec<usize> {
    let mut out = vec![rows];
    out.extend((2..=max_cols).map(|cols| sequence_len(rows, cols)));
    out
}
