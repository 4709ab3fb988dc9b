use rayon::prelude::*;

use crate::graph::GridGraph;
use crate::grid::Grid;

const BACKGROUND: [u8; 4] = [24, 26, 32, 255];
const DOT: [u8; 4] = [220, 220, 215, 255];
const PATH_START: [u8; 4] = [60, 160, 220, 255];
const PATH_END: [u8; 4] = [220, 70, 50, 255];

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// Bordered text grid of zero-padded point numbers.
///
/// ```text
/// -----------
/// | 01 | 02 |
/// -----------
/// | 03 | 04 |
/// -----------
/// ```
pub fn render_text(graph: &GridGraph) -> String {
    let digits = graph.n().to_string().len().max(2);
    let cols = graph.width();
    let border = "-".repeat(1 + cols * (digits + 3));

    let mut out = String::with_capacity((graph.k() * 2 + 1) * (border.len() + 1));
    out.push_str(&border);
    out.push('\n');
    for row in 0..graph.k() {
        out.push('|');
        for col in 0..cols {
            match graph.point(row, col) {
                Some(p) => out.push_str(&format!(" {:0digits$} |", p.number)),
                None => out.push_str(&format!(" {} |", "?".repeat(digits))),
            }
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// Pixel center of a point number.
fn center(graph: &GridGraph, number: usize, cell: usize) -> Option<(i64, i64)> {
    let (row, col) = graph.position_of(number)?;
    Some(((col * cell + cell / 2) as i64, (row * cell + cell / 2) as i64))
}

/// Bresenham line, writing `value` into every covered cell.
fn draw_line(grid: &mut Grid<u32>, from: (i64, i64), to: (i64, i64), value: u32) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x >= 0 && y >= 0 && (x as usize) < grid.w && (y as usize) < grid.h {
            grid.set(x as usize, y as usize, value);
        }
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw the grid points and the walk over them as an RGBA image.
///
/// Segments are colored from blue (first move) to red (last move); later
/// segments paint over earlier ones. Returns `(rgba, width, height)`.
pub fn render_path(
    graph: &GridGraph,
    sequence: &[usize],
    cell: usize,
    dot_radius: usize,
) -> (Vec<u8>, usize, usize) {
    let cell = cell.max(4);
    let w = graph.width() * cell;
    let h = graph.k() * cell;

    // Segment index + 1 per pixel, 0 = untouched
    let mut stroke = Grid::<u32>::new(w, h);
    for (i, pair) in sequence.windows(2).enumerate() {
        let (Some(a), Some(b)) = (center(graph, pair[0], cell), center(graph, pair[1], cell)) else {
            continue;
        };
        draw_line(&mut stroke, a, b, i as u32 + 1);
    }
    let segments = sequence.len().saturating_sub(1).max(1) as f32;

    let half = (cell / 2) as i64;
    let r2 = (dot_radius * dot_radius) as i64;
    let mut rgba = vec![0u8; w * h * 4];

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let dx = (x % cell) as i64 - half;
            let dy = (y % cell) as i64 - half;
            let color = if dx * dx + dy * dy <= r2 {
                DOT
            } else {
                match stroke.data[y * w + x] {
                    0 => BACKGROUND,
                    s => lerp_color(PATH_START, PATH_END, (s - 1) as f32 / segments),
                }
            };
            row[x * 4..x * 4 + 4].copy_from_slice(&color);
        }
    });

    (rgba, w, h)
}
