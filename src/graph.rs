use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::point::Point;

/// The six candidate neighbors of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpDiagonal,
    DownDiagonal,
}

/// Whether an edge points into or out of the point it was computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Incoming,
    Outgoing,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpDiagonal,
        Direction::DownDiagonal,
    ];

    /// Offset in point numbers for a grid `w` columns wide.
    #[inline]
    pub fn offset(self, w: usize) -> isize {
        let w = w as isize;
        match self {
            Direction::Up => -w,
            Direction::Down => w,
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::UpDiagonal => -(w + 1),
            Direction::DownDiagonal => w + 1,
        }
    }

    #[inline]
    pub fn role(self) -> Role {
        match self {
            Direction::Up | Direction::Left | Direction::DownDiagonal => Role::Incoming,
            Direction::Down | Direction::Right | Direction::UpDiagonal => Role::Outgoing,
        }
    }
}

/// `n` points split into `k` rows of `n / k` columns, numbered row-major from 1.
///
/// Cells start empty and are filled once by [`GridGraph::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGraph {
    n: usize,
    k: usize,
    cells: Grid<Option<Point>>,
}

impl GridGraph {
    /// Allocate an empty `k`-row grid for `n` points.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if n == 0 || k == 0 || k > n || n % k != 0 {
            return Err(Error::InvalidShape { n, k });
        }
        Ok(Self {
            n,
            k,
            cells: Grid::new(n / k, k),
        })
    }

    /// Create every point and wire its edges.
    ///
    /// A neighbor is linked whenever its number lies in `[1, n]`. Nothing checks
    /// that it is actually adjacent on the grid, so the last point of a row links
    /// right to the first point of the next one.
    pub fn build(&mut self) {
        let w = self.width();
        for row in 0..self.k {
            for col in 0..w {
                let x = row * w + col + 1;
                let mut point = Point::new(x, row, col);
                for dir in Direction::ALL {
                    let Some(target) = x.checked_add_signed(dir.offset(w)) else {
                        continue;
                    };
                    if !(1..=self.n).contains(&target) {
                        continue;
                    }
                    match dir.role() {
                        Role::Incoming => point.add_incoming(target),
                        Role::Outgoing => point.add_outgoing(target),
                    }
                }
                self.cells.set(col, row, Some(point));
            }
        }
        debug!(n = self.n, k = self.k, "built grid graph");
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Columns per row.
    pub fn width(&self) -> usize {
        self.n / self.k
    }

    pub fn is_built(&self) -> bool {
        self.cells.data.iter().all(Option::is_some)
    }

    pub fn point(&self, row: usize, col: usize) -> Option<&Point> {
        self.cells.get(col, row).and_then(Option::as_ref)
    }

    /// Grid position of a point number, from the row-major numbering.
    pub fn position_of(&self, number: usize) -> Option<(usize, usize)> {
        if !(1..=self.n).contains(&number) {
            return None;
        }
        let w = self.width();
        Some(((number - 1) / w, (number - 1) % w))
    }

    pub fn point_by_number(&self, number: usize) -> Option<&Point> {
        let (row, col) = self.position_of(number)?;
        self.point(row, col)
    }

    /// The point `d_row` rows and `d_col` columns away from `from`, if on the grid.
    pub fn neighbor(&self, from: &Point, d_row: isize, d_col: isize) -> Option<&Point> {
        let (col, row) = self.cells.offset(from.col, from.row, d_col, d_row)?;
        self.point(row, col)
    }

    /// Built points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.cells.data.iter().flatten()
    }

    /// Reject graphs whose stored cells disagree with `(n, k)`.
    pub fn check_shape(&self) -> Result<()> {
        let ok = self.n > 0
            && self.k > 0
            && self.n % self.k == 0
            && self.cells.h == self.k
            && self.cells.w == self.width()
            && self.cells.data.len() == self.n;
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidShape {
                n: self.n,
                k: self.k,
            })
        }
    }
}

/// Construct and build a graph in one step.
pub fn build_graph(n: usize, k: usize) -> Result<GridGraph> {
    let mut graph = GridGraph::new(n, k)?;
    graph.build();
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(4, 0)]
    #[case(12, 5)]
    #[case(3, 6)]
    fn rejects_uneven_shapes(#[case] n: usize, #[case] k: usize) {
        let err = GridGraph::new(n, k).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { n: en, k: ek } if en == n && ek == k));
    }

    #[test]
    fn empty_until_built() {
        let mut g = GridGraph::new(12, 3).unwrap();
        assert!(!g.is_built());
        assert_eq!(g.points().count(), 0);
        assert!(g.point(0, 0).is_none());
        g.build();
        assert!(g.is_built());
        assert_eq!(g.points().count(), 12);
    }

    #[test]
    fn corners_of_twelve_by_three() {
        let g = build_graph(12, 3).unwrap();
        assert_eq!(g.width(), 4);
        let first = g.point(0, 0).unwrap();
        assert_eq!(first.number, 1);
        let last = g.point(2, 3).unwrap();
        assert_eq!(last.number, 12);
        assert_eq!(g.position_of(12), Some((2, 3)));
        assert_eq!(g.position_of(0), None);
        assert_eq!(g.position_of(13), None);
    }

    #[test]
    fn six_by_three_edges() {
        let g = build_graph(6, 3).unwrap();
        let p1 = g.point_by_number(1).unwrap();
        assert_eq!(p1.outgoing(), &[2, 3]);
        // down-diagonal 1 + 3 links in
        assert_eq!(p1.incoming(), &[4]);

        let p6 = g.point_by_number(6).unwrap();
        assert_eq!(p6.incoming(), &[4, 5]);
        assert_eq!(p6.outgoing(), &[3]);
    }

    #[test]
    fn last_point_only_fed_from_left_and_above() {
        let g = build_graph(6, 3).unwrap();
        let p6 = g.point_by_number(6).unwrap();
        let w = g.width();
        for &q in p6.incoming() {
            assert!(q + 1 == 6 || q + w == 6, "unexpected incoming {q}");
        }
    }

    #[test]
    fn row_edge_wraps_into_next_row() {
        let g = build_graph(12, 3).unwrap();
        // 4 ends row 0, 5 starts row 1
        assert!(g.point_by_number(4).unwrap().has_outgoing(5));
        assert!(g.point_by_number(5).unwrap().incoming().contains(&4));
    }

    #[test]
    fn single_column_has_only_vertical_edges() {
        let g = build_graph(5, 5).unwrap();
        for p in g.points() {
            for &q in p.outgoing() {
                // down is +1 and up-diagonal is -2 when w = 1
                assert!(q == p.number + 1 || q + 2 == p.number);
            }
        }
        let mid = g.point_by_number(3).unwrap();
        assert_eq!(mid.outgoing(), &[1, 4]);
        assert_eq!(mid.incoming(), &[2, 5]);
    }

    #[test]
    fn neighbor_lookup_respects_bounds() {
        let g = build_graph(12, 3).unwrap();
        let p = g.point(1, 0).unwrap();
        assert_eq!(g.neighbor(p, 1, 0).map(|q| q.number), Some(9));
        assert!(g.neighbor(p, -1, -1).is_none());
        assert_eq!(g.neighbor(p, 0, 1).map(|q| q.number), Some(6));
    }

    #[test]
    fn direction_table() {
        assert_eq!(Direction::Up.offset(4), -4);
        assert_eq!(Direction::DownDiagonal.offset(4), 5);
        let outgoing: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.role() == Role::Outgoing)
            .collect();
        assert_eq!(
            outgoing,
            vec![Direction::Down, Direction::Right, Direction::UpDiagonal]
        );
    }
}
