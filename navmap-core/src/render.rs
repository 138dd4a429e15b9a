use crate::graph::PageGraph;
use crate::layout::PageLayout;

/// A visualization backend: draws one graph + layout to a display surface.
pub trait Renderer {
    type Error;

    fn render(&self, graph: &PageGraph, layout: &PageLayout) -> Result<(), Self::Error>;
}
