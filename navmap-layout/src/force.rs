use crate::error::{LayoutError, Result};
use crate::rng::XorShift64Star;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// A computed node position in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A layout strategy: positions from graph structure alone.
///
/// Implementations see only the node count and edge index pairs, so any
/// graph representation can be adapted (see [`layout_graph`]). The returned
/// vector holds exactly one position per node, in node order.
pub trait LayoutEngine {
    fn compute(&self, node_count: usize, edges: &[(usize, usize)]) -> Result<Vec<Position>>;
}

/// Run `engine` over a petgraph graph.
///
/// Positions are returned in `graph.node_indices()` order.
pub fn layout_graph<N, E, L>(engine: &L, graph: &DiGraph<N, E>) -> Result<Vec<Position>>
where
    L: LayoutEngine + ?Sized,
{
    let index_of: HashMap<_, _> = graph
        .node_indices()
        .enumerate()
        .map(|(pos, ix)| (ix, pos))
        .collect();
    let edges: Vec<(usize, usize)> = graph
        .edge_references()
        .map(|e| (index_of[&e.source()], index_of[&e.target()]))
        .collect();
    engine.compute(graph.node_count(), &edges)
}

/// Fruchterman-Reingold spring layout.
///
/// Every node pair repels (k²/d), linked nodes attract (d²/k). Nodes start
/// at random points in the unit square and settle over a fixed iteration
/// budget while the temperature cools linearly to zero; the finished layout
/// is rescaled to the centered [-1, 1] square.
pub struct ForceDirected {
    optimal_distance: Option<f64>,
    iterations: usize,
    seed: Option<u64>,
}

/// Distances and displacements below this are treated as degenerate.
const MIN_DISTANCE: f64 = 0.01;

impl ForceDirected {
    pub fn new() -> Self {
        Self {
            optimal_distance: None,
            iterations: 50,
            seed: None,
        }
    }

    /// Target distance between nodes (`k`). Defaults to `1/sqrt(n)`.
    pub fn with_optimal_distance(mut self, k: f64) -> Self {
        self.optimal_distance = Some(k);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Fix the RNG seed so repeated runs produce identical positions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ForceDirected {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for ForceDirected {
    fn compute(&self, node_count: usize, edges: &[(usize, usize)]) -> Result<Vec<Position>> {
        if let Some(k) = self.optimal_distance
            && !(k.is_finite() && k > 0.0)
        {
            return Err(LayoutError::InvalidParameter(format!(
                "optimal distance must be positive and finite, got {k}"
            )));
        }
        if node_count == 0 {
            return Ok(Vec::new());
        }
        if let Some(&(u, v)) = edges
            .iter()
            .find(|(u, v)| *u >= node_count || *v >= node_count)
        {
            return Err(LayoutError::InvalidParameter(format!(
                "edge ({u}, {v}) references a node outside 0..{node_count}"
            )));
        }

        let k = self
            .optimal_distance
            .unwrap_or_else(|| 1.0 / (node_count as f64).sqrt());
        let mut rng = XorShift64Star::new(self.seed.unwrap_or_else(entropy_seed));

        // Random start in the unit square.
        let mut pos: Vec<[f64; 2]> = (0..node_count)
            .map(|_| [rng.next_f64_unit(), rng.next_f64_unit()])
            .collect();

        // The temperature limits how far a node may move in one step; it
        // starts at a tenth of the initial extent and cools to zero over the
        // full budget.
        let mut t = 0.1 * initial_extent(&pos);
        let dt = t / (self.iterations as f64 + 1.0);

        debug!(
            nodes = node_count,
            links = edges.len(),
            k,
            iterations = self.iterations,
            "computing force-directed layout"
        );

        let mut disp = vec![[0.0f64; 2]; node_count];
        for _ in 0..self.iterations {
            for d in disp.iter_mut() {
                *d = [0.0, 0.0];
            }

            // Pairwise repulsion.
            for i in 0..node_count {
                for j in 0..node_count {
                    if i == j {
                        continue;
                    }
                    let dx = pos[i][0] - pos[j][0];
                    let dy = pos[i][1] - pos[j][1];
                    let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                    let f = k * k / (dist * dist);
                    disp[i][0] += dx * f;
                    disp[i][1] += dy * f;
                }
            }

            // Attraction along links, pulling both endpoints.
            for &(u, v) in edges {
                if u == v {
                    continue;
                }
                let dx = pos[u][0] - pos[v][0];
                let dy = pos[u][1] - pos[v][1];
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let f = dist / k;
                disp[u][0] -= dx * f;
                disp[u][1] -= dy * f;
                disp[v][0] += dx * f;
                disp[v][1] += dy * f;
            }

            // Move each node a temperature-limited distance.
            for i in 0..node_count {
                let len = (disp[i][0] * disp[i][0] + disp[i][1] * disp[i][1]).sqrt();
                if len < MIN_DISTANCE {
                    continue;
                }
                let step = t.min(len) / len;
                pos[i][0] += disp[i][0] * step;
                pos[i][1] += disp[i][1] * step;
            }
            t -= dt;
        }

        rescale_to_unit(&mut pos);

        let mut out = Vec::with_capacity(node_count);
        for (i, p) in pos.iter().enumerate() {
            if !(p[0].is_finite() && p[1].is_finite()) {
                return Err(LayoutError::NonFinite(i));
            }
            out.push(Position { x: p[0], y: p[1] });
        }
        Ok(out)
    }
}

/// Widest axis span of the starting positions, used to seed the temperature.
fn initial_extent(pos: &[[f64; 2]]) -> f64 {
    let mut span = 0.0f64;
    for axis in 0..2 {
        let min = pos.iter().map(|p| p[axis]).fold(f64::INFINITY, f64::min);
        let max = pos.iter().map(|p| p[axis]).fold(f64::NEG_INFINITY, f64::max);
        span = span.max(max - min);
    }
    if span > 0.0 { span } else { 1.0 }
}

/// Center on the origin and scale the widest coordinate to magnitude 1.
fn rescale_to_unit(pos: &mut [[f64; 2]]) {
    if pos.is_empty() {
        return;
    }
    let n = pos.len() as f64;
    for axis in 0..2 {
        let mean = pos.iter().map(|p| p[axis]).sum::<f64>() / n;
        for p in pos.iter_mut() {
            p[axis] -= mean;
        }
    }
    let lim = pos
        .iter()
        .flat_map(|p| p.iter())
        .fold(0.0f64, |acc, c| acc.max(c.abs()));
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= lim;
            p[1] /= lim;
        }
    }
}

fn entropy_seed() -> u64 {
    // Clock-derived fallback; pass a seed for reproducible runs.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
