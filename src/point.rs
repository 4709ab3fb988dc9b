use serde::{Deserialize, Serialize};

/// One numbered location in the grid.
///
/// Neighbors are referenced by number only; the owning [`GridGraph`](crate::graph::GridGraph)
/// resolves them back to cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub number: usize,
    pub row: usize,
    pub col: usize,
    incoming: Vec<usize>,
    outgoing: Vec<usize>,
}

impl Point {
    pub fn new(number: usize, row: usize, col: usize) -> Self {
        Self {
            number,
            row,
            col,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Numbers with an edge into this point, ascending.
    pub fn incoming(&self) -> &[usize] {
        &self.incoming
    }

    /// Numbers this point has an edge to, ascending.
    pub fn outgoing(&self) -> &[usize] {
        &self.outgoing
    }

    pub fn add_incoming(&mut self, number: usize) {
        insert_sorted(&mut self.incoming, number);
    }

    pub fn add_outgoing(&mut self, number: usize) {
        insert_sorted(&mut self.outgoing, number);
    }

    #[inline]
    pub fn has_outgoing(&self, number: usize) -> bool {
        self.outgoing.binary_search(&number).is_ok()
    }
}

#[inline]
fn insert_sorted(list: &mut Vec<usize>, number: usize) {
    if let Err(pos) = list.binary_search(&number) {
        list.insert(pos, number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_lists_stay_sorted_and_unique() {
        let mut p = Point::new(6, 1, 1);
        for x in [9, 2, 5, 2, 11] {
            p.add_outgoing(x);
        }
        p.add_incoming(3);
        p.add_incoming(1);
        p.add_incoming(3);
        assert_eq!(p.outgoing(), &[2, 5, 9, 11]);
        assert_eq!(p.incoming(), &[1, 3]);
        assert!(p.has_outgoing(9));
        assert!(!p.has_outgoing(3));
    }
}
