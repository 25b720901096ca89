use common::{edges, init_logger};
use rand::prelude::*;
use widest_path::{
    generator::{random_graph, GraphConfig},
    Bottleneck, BottleneckError, BottleneckOracle, BottleneckSolver, Edge, SpanningForest,
    WeightedGraph,
};

mod common;

#[test]
fn test_forest_edges() {
    init_logger();
    let f = SpanningForest::build(4, &edges(&[(1, 2, 4), (2, 3, 3), (3, 1, 1)])).unwrap();
    assert_eq!(f.edges(), &[Edge::new(1, 2, 4), Edge::new(2, 3, 3)]);
    assert_eq!(f.component_count(), 2);
    assert_eq!(f.tree().edge_count(), 2);
    assert_eq!(f.tree().neighbors(2).unwrap(), &[(1, 4), (3, 3)]);
    assert!(f.connected(1, 3).unwrap());
    assert!(!f.connected(3, 4).unwrap());

    let f = SpanningForest::build(2, &edges(&[(1, 2, 10), (1, 2, 20), (1, 2, 5)])).unwrap();
    assert_eq!(f.edges(), &[Edge::new(1, 2, 20)]);
}

#[test]
fn test_forest_size() {
    let mut rng = StdRng::seed_from_u64(31337);
    for _ in 0..200 {
        let n = rng.gen_range(0..60);
        let m = rng.gen_range(0..=n * 2);
        let edges = random_graph(&GraphConfig::new(n, m).with_weights(1, 5), &mut rng);
        let f = SpanningForest::build(n, &edges).unwrap();
        assert_eq!(f.edges().len() + f.component_count(), n);
        assert!(f.edges().windows(2).all(|w| w[0].weight >= w[1].weight));
        let oracle = BottleneckOracle::build(n, &edges).unwrap();
        for x in 1..=n {
            for y in 1..=n {
                let connected = oracle.query(x, y).unwrap() != Bottleneck::Disconnected;
                assert_eq!(f.connected(x, y).unwrap(), connected);
            }
        }
    }
}

/// Edges of equal weight may be picked in any order: the forests differ but
/// every answer stays the same.
#[test]
fn test_tie_order() {
    let mut rng = StdRng::seed_from_u64(2718);
    for _ in 0..50 {
        const N: usize = 15;
        let mut edges = random_graph(&GraphConfig::new(N, 30).with_weights(1, 3), &mut rng);
        let f1 = SpanningForest::build(N, &edges).unwrap();
        edges.shuffle(&mut rng);
        let f2 = SpanningForest::build(N, &edges).unwrap();
        for x in 1..=N {
            for y in 1..=N {
                assert_eq!(f1.query(x, y).unwrap(), f2.query(x, y).unwrap());
            }
        }
    }
}

#[test]
fn test_connectivity_beyond_forest() {
    // 1-2-3 triangle: the 1-3 edge is never in the forest but 1 and 3 are connected.
    let f = SpanningForest::build(3, &edges(&[(1, 3, 1), (1, 2, 5), (2, 3, 5)])).unwrap();
    assert!(f.edges().iter().all(|e| e.weight == 5));
    assert!(f.connected(1, 3).unwrap());
    assert_eq!(f.query(1, 3).unwrap(), Bottleneck::Width(5));
}

/// Slot 0 of every table exists but is not a node.
#[test]
fn test_invalid_ids() {
    let f = SpanningForest::build(4, &edges(&[(1, 2, 3)])).unwrap();
    for (a, b, bad) in [(0, 0, 0), (0, 1, 0), (1, 5, 5), (5, 5, 5)] {
        assert_eq!(
            f.connected(a, b).unwrap_err(),
            BottleneckError::NodeOutOfRange { node: bad, n: 4 }
        );
    }
    assert!(f.connected(1, 2).unwrap());
    assert_eq!(
        f.tree().neighbors(0).unwrap_err(),
        BottleneckError::NodeOutOfRange { node: 0, n: 4 }
    );
    assert!(f.tree().neighbors(5).is_err());

    let mut g = WeightedGraph::new(2);
    assert_eq!(
        g.add_edge(0, 1, 7).unwrap_err(),
        BottleneckError::EdgeOutOfRange {
            index: 0,
            u: 0,
            v: 1,
            n: 2
        }
    );
    assert!(g.add_edge(1, 3, 7).is_err());
    assert_eq!(g.edge_count(), 0);
    g.add_edge(1, 2, 7).unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.neighbors(1).unwrap(), &[(2, 7)]);
}
