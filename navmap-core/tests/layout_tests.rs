// Tests for the layout bridge

use navmap_core::graph::PageGraph;
use navmap_core::layout::compute_layout;
use navmap_core::site;
use navmap_layout::ForceDirected;

// ============================================================================
// Layout Completeness Tests
// ============================================================================

#[test]
fn test_layout_covers_every_page() {
    let graph = site::build_graph();
    let engine = ForceDirected::new()
        .with_optimal_distance(0.15)
        .with_iterations(20)
        .with_seed(7);
    let layout = compute_layout(&graph, &engine).unwrap();

    assert_eq!(layout.len(), graph.page_count());
    for page in graph.pages() {
        assert!(layout.contains_key(page), "no position for {page}");
    }
}

#[test]
fn test_layout_has_no_extra_entries() {
    let graph = site::build_graph();
    let engine = ForceDirected::new().with_seed(7);
    let layout = compute_layout(&graph, &engine).unwrap();

    for label in layout.keys() {
        assert!(graph.contains_page(label), "unexpected entry: {label}");
    }
}

#[test]
fn test_layout_coordinates_finite() {
    let graph = site::build_graph();
    let engine = ForceDirected::new()
        .with_optimal_distance(0.15)
        .with_iterations(20)
        .with_seed(7);
    let layout = compute_layout(&graph, &engine).unwrap();

    for (label, pos) in &layout {
        assert!(pos.x.is_finite(), "non-finite x for {label}");
        assert!(pos.y.is_finite(), "non-finite y for {label}");
    }
}

#[test]
fn test_empty_graph_layout_is_empty() {
    let graph = PageGraph::new();
    let engine = ForceDirected::new();
    let layout = compute_layout(&graph, &engine).unwrap();
    assert!(layout.is_empty());
}
