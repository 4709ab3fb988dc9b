/// Row-major flat grid. `w` columns by `h` rows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.w && y < self.h {
            self.data.get(self.idx(x, y))
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Signed offset from `(x, y)`. Returns None if the target leaves the grid.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.w && ny < self.h).then_some((nx, ny))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let mut g = Grid::<u8>::new(4, 3);
        g.set(3, 1, 7);
        assert_eq!(g.idx(3, 1), 7);
        assert_eq!(g.data[7], 7);
        assert_eq!(g.get(3, 1), Some(&7));
        assert_eq!(g.get(4, 0), None);
        assert_eq!(g.get(0, 3), None);
    }

    #[test]
    fn offset_stays_inside() {
        let g = Grid::<u8>::new(4, 3);
        assert_eq!(g.offset(0, 0, 1, 1), Some((1, 1)));
        assert_eq!(g.offset(0, 0, -1, 0), None);
        assert_eq!(g.offset(3, 2, 1, 0), None);
        assert_eq!(g.offset(3, 2, -1, -1), Some((2, 1)));
    }
}
