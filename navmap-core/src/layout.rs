use crate::graph::PageGraph;
use navmap_layout::{LayoutEngine, Result, layout_graph};
use std::collections::BTreeMap;

pub use navmap_layout::Position;

/// A finished layout: one 2D position per page label.
pub type PageLayout = BTreeMap<String, Position>;

/// Compute a position for every page with the given layout strategy.
pub fn compute_layout<L>(graph: &PageGraph, engine: &L) -> Result<PageLayout>
where
    L: LayoutEngine + ?Sized,
{
    let positions = layout_graph(engine, graph.inner())?;
    Ok(graph
        .inner()
        .node_indices()
        .zip(positions)
        .map(|(ix, pos)| (graph.inner()[ix].clone(), pos))
        .collect())
}
