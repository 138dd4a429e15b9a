// Tests for the force-directed layout engine

use navmap_layout::{ForceDirected, LayoutEngine, LayoutError, layout_graph};
use petgraph::graph::DiGraph;

fn chain_edges(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i - 1, i)).collect()
}

// ============================================================================
// Shape Tests
// ============================================================================

#[test]
fn test_empty_graph_layout_is_empty() {
    let engine = ForceDirected::new();
    let positions = engine.compute(0, &[]).unwrap();
    assert!(positions.is_empty());
}

#[test]
fn test_single_node_sits_at_origin() {
    let engine = ForceDirected::new().with_seed(1);
    let positions = engine.compute(1, &[]).unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].x, 0.0);
    assert_eq!(positions[0].y, 0.0);
}

#[test]
fn test_one_position_per_node() {
    let engine = ForceDirected::new()
        .with_optimal_distance(0.15)
        .with_iterations(20)
        .with_seed(3);
    let positions = engine.compute(13, &chain_edges(13)).unwrap();
    assert_eq!(positions.len(), 13);
}

#[test]
fn test_positions_are_finite() {
    let engine = ForceDirected::new()
        .with_optimal_distance(0.15)
        .with_iterations(20)
        .with_seed(3);
    for pos in engine.compute(13, &chain_edges(13)).unwrap() {
        assert!(pos.x.is_finite());
        assert!(pos.y.is_finite());
    }
}

#[test]
fn test_positions_within_unit_square() {
    let engine = ForceDirected::new().with_iterations(50).with_seed(11);
    for pos in engine.compute(20, &chain_edges(20)).unwrap() {
        assert!(pos.x.abs() <= 1.0 + f64::EPSILON);
        assert!(pos.y.abs() <= 1.0 + f64::EPSILON);
    }
}

#[test]
fn test_zero_iterations_still_places_every_node() {
    let engine = ForceDirected::new().with_iterations(0).with_seed(5);
    let positions = engine.compute(4, &chain_edges(4)).unwrap();
    assert_eq!(positions.len(), 4);
}

#[test]
fn test_self_loop_is_tolerated() {
    let engine = ForceDirected::new().with_seed(5);
    let positions = engine.compute(2, &[(0, 0), (0, 1)]).unwrap();
    assert_eq!(positions.len(), 2);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_seed_same_layout() {
    let edges = chain_edges(8);
    let engine = ForceDirected::new()
        .with_optimal_distance(0.15)
        .with_iterations(20)
        .with_seed(42);
    let first = engine.compute(8, &edges).unwrap();
    let second = engine.compute(8, &edges).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let edges = chain_edges(8);
    let a = ForceDirected::new().with_seed(1).compute(8, &edges).unwrap();
    let b = ForceDirected::new().with_seed(2).compute(8, &edges).unwrap();
    assert_ne!(a, b);
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

#[test]
fn test_zero_optimal_distance_rejected() {
    let engine = ForceDirected::new().with_optimal_distance(0.0);
    let err = engine.compute(3, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameter(_)));
}

#[test]
fn test_negative_optimal_distance_rejected() {
    let engine = ForceDirected::new().with_optimal_distance(-1.0);
    let err = engine.compute(3, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameter(_)));
}

#[test]
fn test_non_finite_optimal_distance_rejected() {
    let engine = ForceDirected::new().with_optimal_distance(f64::NAN);
    let err = engine.compute(3, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameter(_)));
}

#[test]
fn test_edge_outside_node_range_rejected() {
    let engine = ForceDirected::new().with_seed(1);
    let err = engine.compute(2, &[(0, 5)]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameter(_)));
}

// ============================================================================
// Petgraph Adapter Tests
// ============================================================================

#[test]
fn test_layout_graph_matches_node_count() {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    graph.add_edge(a, b, ());
    graph.add_edge(b, c, ());

    let engine = ForceDirected::new().with_seed(9);
    let positions = layout_graph(&engine, &graph).unwrap();
    assert_eq!(positions.len(), graph.node_count());
}

#[test]
fn test_engine_usable_as_trait_object() {
    let engine: Box<dyn LayoutEngine> = Box::new(ForceDirected::new().with_seed(9));
    let positions = engine.compute(3, &[(0, 1)]).unwrap();
    assert_eq!(positions.len(), 3);
}
