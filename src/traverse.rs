//! The "down" walk: descend a column, zigzag back up along the next one, repeat.
//!
//! Every move must follow an outgoing edge of the current point. A move whose
//! edge is missing is skipped and the mode rules are re-checked on the next
//! tick. Ticks are capped so shapes the walk cannot finish fail instead of
//! spinning forever.

use tracing::debug;

use crate::config::Params;
use crate::error::{Error, Result};
use crate::graph::GridGraph;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Descend,
    Zigzag,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastMove {
    None,
    Across,
    Back,
}

struct Walk<'a> {
    graph: &'a GridGraph,
    current: &'a Point,
    /// Top of the column the last descent started from.
    start: &'a Point,
    mode: Mode,
    last_move: LastMove,
    sequence: Vec<usize>,
    terminal_visits: usize,
}

impl<'a> Walk<'a> {
    fn new(graph: &'a GridGraph, first: &'a Point) -> Self {
        Self {
            graph,
            current: first,
            start: first,
            mode: Mode::Descend,
            last_move: LastMove::None,
            sequence: vec![first.number],
            terminal_visits: usize::from(first.number == graph.n()),
        }
    }

    fn finished(&self) -> bool {
        self.terminal_visits >= 2
    }

    fn tick(&mut self) {
        let bottom = self.graph.k() - 1;
        if self.current.row == bottom {
            self.mode = Mode::Zigzag;
        } else if self.current.row == 0 && self.current.col == self.start.col + 1 {
            self.mode = Mode::Descend;
            self.start = self.current;
            self.last_move = LastMove::None;
        } else if self.finished() {
            self.mode = Mode::Done;
        }

        match self.mode {
            Mode::Descend => {
                if let Some(next) = self.graph.neighbor(self.current, 1, 0) {
                    self.advance(next);
                }
            }
            Mode::Zigzag => match self.last_move {
                LastMove::None | LastMove::Back => {
                    if let Some(next) = self.graph.neighbor(self.current, 0, 1) {
                        if self.advance(next) {
                            self.last_move = LastMove::Across;
                        }
                    }
                }
                LastMove::Across => match self.graph.neighbor(self.current, -1, -1) {
                    Some(next) => {
                        if self.advance(next) {
                            self.last_move = LastMove::Back;
                        }
                    }
                    None => {
                        self.mode = Mode::Descend;
                        self.last_move = LastMove::None;
                    }
                },
            },
            Mode::Done => {}
        }
    }

    /// Step to `next` if the current point has an edge to it.
    fn advance(&mut self, next: &'a Point) -> bool {
        if !self.current.has_outgoing(next.number) {
            return false;
        }
        self.current = next;
        self.sequence.push(next.number);
        if next.number == self.graph.n() {
            self.terminal_visits += 1;
        }
        true
    }
}

/// Walk the graph with the default tick cap.
pub fn traverse_down(graph: &GridGraph) -> Result<Vec<usize>> {
    traverse_down_with_cap(graph, Params::default().tick_cap(graph.n()))
}

/// Walk the graph from the top-left point until the terminal point `n` has been
/// visited twice, giving up after `cap` ticks.
pub fn traverse_down_with_cap(graph: &GridGraph, cap: usize) -> Result<Vec<usize>> {
    let stalled = |ticks: usize, visited: usize| Error::TraversalStalled {
        n: graph.n(),
        k: graph.k(),
        ticks,
        visited,
    };

    let Some(first) = graph.point(0, 0) else {
        return Err(stalled(0, 0));
    };

    let mut walk = Walk::new(graph, first);
    let mut ticks = 0;
    while !walk.finished() {
        if ticks >= cap {
            return Err(stalled(ticks, walk.sequence.len()));
        }
        walk.tick();
        ticks += 1;
    }

    debug!(
        n = graph.n(),
        k = graph.k(),
        ticks,
        len = walk.sequence.len(),
        "traversal finished"
    );
    Ok(walk.sequence)
}
