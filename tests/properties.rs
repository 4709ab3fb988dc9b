use std::collections::HashSet;

use rstest::rstest;

use triangulation::arithmetic::{arithmetic_sequence, sequence_len};
use triangulation::divisors::shapes;
use triangulation::{Error, build_graph, traverse_down};

/// Shapes the down walk can finish: at least two rows and two columns.
fn walkable(max_n: usize) -> Vec<(usize, usize)> {
    shapes(max_n, None)
        .into_iter()
        .filter(|&(n, k)| k >= 2 && k < n)
        .collect()
}

#[test]
fn every_point_numbered_once() {
    for (n, k) in shapes(60, None) {
        let g = build_graph(n, k).unwrap();
        let numbers: Vec<usize> = g.points().map(|p| p.number).collect();
        assert_eq!(numbers.len(), n);
        assert_eq!(numbers, (1..=n).collect::<Vec<_>>(), "({n}, {k})");
        for p in g.points() {
            assert_eq!(p.number, p.row * g.width() + p.col + 1);
        }
    }
}

#[test]
fn edges_follow_offset_table() {
    for (n, k) in shapes(60, None) {
        let g = build_graph(n, k).unwrap();
        let w = g.width();
        for p in g.points() {
            let x = p.number;
            for &q in p.outgoing() {
                assert!((1..=n).contains(&q));
                assert!(q == x + w || q == x + 1 || q + w + 1 == x, "({n}, {k}) {x} -> {q}");
            }
            for &q in p.incoming() {
                assert!((1..=n).contains(&q));
                assert!(q + w == x || q + 1 == x || q == x + w + 1, "({n}, {k}) {q} -> {x}");
            }
            assert!(p.outgoing().windows(2).all(|s| s[0] < s[1]));
            assert!(p.incoming().windows(2).all(|s| s[0] < s[1]));
        }
    }
}

#[test]
fn rebuilding_is_deterministic() {
    for (n, k) in shapes(40, None) {
        assert_eq!(build_graph(n, k).unwrap(), build_graph(n, k).unwrap());
    }
}

#[test]
fn walks_start_at_one_and_end_on_second_terminal_visit() {
    for (n, k) in walkable(80) {
        let seq = traverse_down(&build_graph(n, k).unwrap()).unwrap();
        assert_eq!(seq.first(), Some(&1));
        assert_eq!(seq.last(), Some(&n));
        assert_eq!(seq.iter().filter(|&&x| x == n).count(), 2, "({n}, {k})");
    }
}

#[test]
fn walks_use_each_edge_at_most_once() {
    for (n, k) in walkable(80) {
        let g = build_graph(n, k).unwrap();
        let seq = traverse_down(&g).unwrap();
        let mut used = HashSet::new();
        for pair in seq.windows(2) {
            let from = g.point_by_number(pair[0]).unwrap();
            assert!(from.has_outgoing(pair[1]), "({n}, {k}) {} -> {}", pair[0], pair[1]);
            assert!(used.insert((pair[0], pair[1])), "({n}, {k}) reused {:?}", pair);
        }
    }
}

#[test]
fn graph_walk_agrees_with_closed_form() {
    for (n, k) in walkable(80) {
        let seq = traverse_down(&build_graph(n, k).unwrap()).unwrap();
        assert_eq!(seq.len(), sequence_len(k, n / k), "({n}, {k})");
        assert_eq!(seq, arithmetic_sequence(k, n / k), "({n}, {k})");
    }
}

#[rstest]
#[case(12, 3, 24)]
#[case(15, 5, 31)]
#[case(21, 7, 45)]
#[case(100, 10, 262)]
fn known_lengths(#[case] n: usize, #[case] k: usize, #[case] len: usize) {
    let seq = traverse_down(&build_graph(n, k).unwrap()).unwrap();
    assert_eq!(seq.len(), len);
}

#[rstest]
#[case(7, 1)]
#[case(7, 7)]
fn single_row_or_column_stalls(#[case] n: usize, #[case] k: usize) {
    let err = traverse_down(&build_graph(n, k).unwrap()).unwrap_err();
    assert!(matches!(err, Error::TraversalStalled { .. }));
}

#[test]
fn generate_reports_stage_timings() {
    let params = triangulation::config::Params::default();
    let (tri, timings) = triangulation::generate(12, 4, &params).unwrap();
    assert_eq!(tri.sequence.len(), 24);
    let names: Vec<_> = timings.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["build", "traverse", "TOTAL"]);
    assert!(matches!(
        triangulation::generate(10, 3, &params),
        Err(Error::InvalidShape { n: 10, k: 3 })
    ));
}
