use commands::command_argument_builder;
use navmap_core::layout::compute_layout;
use navmap_core::render::Renderer;
use navmap_core::{print_banner, site};
use navmap_layout::ForceDirected;
use navmap_tui::TuiRenderer;
use tracing::debug;

mod commands;

/// Spring layout parameters for the fixed site graph.
const OPTIMAL_DISTANCE: f64 = 0.15;
const ITERATIONS: usize = 20;

fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");
    let seed = matches.get_one::<u64>("seed").copied();

    tracing_subscriber::fmt::init();

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let graph = site::build_graph();
    debug!(
        pages = graph.page_count(),
        links = graph.link_count(),
        "site graph constructed"
    );

    let mut engine = ForceDirected::new()
        .with_optimal_distance(OPTIMAL_DISTANCE)
        .with_iterations(ITERATIONS);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    let layout = match compute_layout(&graph, &engine) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("✗ Layout failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = TuiRenderer::new().render(&graph, &layout) {
        eprintln!("✗ Rendering failed: {}", e);
        std::process::exit(1);
    }
}
