use anyhow::{Context as _, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navmap_core::graph::PageGraph;
use navmap_core::layout::PageLayout;
use navmap_core::render::Renderer;
use navmap_core::site;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};
use std::collections::HashMap;
use std::io;

/// Figure dimensions in world units.
const FIGURE_WIDTH: f64 = 30.0;
const FIGURE_HEIGHT: f64 = 20.0;

/// Node disc area in points squared, at 72 points to the figure unit.
const NODE_AREA: f64 = 5000.0;
const POINTS_PER_UNIT: f64 = 72.0;

/// Sky blue node fill.
const NODE_COLOR: Color = Color::Rgb(135, 206, 235);

/// Clearance between the drawing and the figure edge, in world units.
const MARGIN: f64 = 2.5;

fn node_radius() -> f64 {
    (NODE_AREA / std::f64::consts::PI).sqrt() / POINTS_PER_UNIT
}

/// A page placed at its figure coordinates.
struct PlacedPage {
    label: String,
    x: f64,
    y: f64,
}

/// Viewer state: the placed pages, the links between them, and the title.
pub struct App {
    title: String,
    pages: Vec<PlacedPage>,
    links: Vec<(usize, usize)>,
    should_quit: bool,
}

impl App {
    /// Map every page of `graph` into figure coordinates.
    ///
    /// Layout positions live in the centered [-1, 1] square; the figure
    /// keeps a margin so discs and labels stay inside the bounds.
    pub fn new(title: &str, graph: &PageGraph, layout: &PageLayout) -> Result<Self> {
        let mut index = HashMap::new();
        let mut pages = Vec::with_capacity(graph.page_count());
        for label in graph.pages() {
            let pos = layout
                .get(label)
                .with_context(|| format!("no position for page '{label}'"))?;
            index.insert(label.to_string(), pages.len());
            pages.push(PlacedPage {
                label: label.to_string(),
                x: (pos.x + 1.0) / 2.0 * (FIGURE_WIDTH - 2.0 * MARGIN) + MARGIN,
                y: (pos.y + 1.0) / 2.0 * (FIGURE_HEIGHT - 2.0 * MARGIN) + MARGIN,
            });
        }
        let links = graph
            .links()
            .map(|(from, to)| (index[from], index[to]))
            .collect();
        Ok(Self {
            title: title.to_string(),
            pages,
            links,
            should_quit: false,
        })
    }

    /// Paint links, then discs, then labels, so text lands on top.
    fn draw_map(&self, ctx: &mut Context, cell_width: f64) {
        let radius = node_radius();

        for &(from, to) in &self.links {
            let a = &self.pages[from];
            let b = &self.pages[to];
            draw_arrow(ctx, a.x, a.y, b.x, b.y, radius);
        }
        ctx.layer();
        for page in &self.pages {
            ctx.draw(&Circle {
                x: page.x,
                y: page.y,
                radius,
                color: NODE_COLOR,
            });
        }
        ctx.layer();
        for page in &self.pages {
            let offset = page.label.chars().count() as f64 * cell_width / 2.0;
            ctx.print(
                page.x - offset,
                page.y,
                Line::from(page.label.clone().bold()),
            );
        }
    }
}

/// Directed arrow: shaft from disc edge to disc edge, two strokes for the
/// head.
fn draw_arrow(ctx: &mut Context, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= radius * 2.0 {
        // Discs overlap (or a self-loop); nothing sensible to draw.
        return;
    }
    let ux = dx / len;
    let uy = dy / len;
    let (sx, sy) = (x1 + ux * radius, y1 + uy * radius);
    let (tx, ty) = (x2 - ux * radius, y2 - uy * radius);
    ctx.draw(&CanvasLine {
        x1: sx,
        y1: sy,
        x2: tx,
        y2: ty,
        color: Color::White,
    });

    let head = (radius * 0.6).min(len / 3.0);
    let sweep: f64 = 0.45;
    for sign in [-1.0, 1.0] {
        let (c, s) = (sweep.cos(), sign * sweep.sin());
        // Back along the shaft, rotated off it by the sweep angle.
        let hx = (-ux) * c - (-uy) * s;
        let hy = (-ux) * s + (-uy) * c;
        ctx.draw(&CanvasLine {
            x1: tx,
            y1: ty,
            x2: tx + hx * head,
            y2: ty + hy * head,
            color: Color::White,
        });
    }
}

/// Renders the navigation map in the terminal, blocking until dismissed.
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TuiRenderer {
    type Error = anyhow::Error;

    fn render(&self, graph: &PageGraph, layout: &PageLayout) -> Result<()> {
        let app = App::new(site::TITLE, graph, layout)?;
        run(app)
    }
}

pub fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process KeyPress events, ignore KeyRelease
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render one frame: the figure, a rule, and the key hints.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Figure
            Constraint::Length(1), // Horizontal rule
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // World units covered by one terminal cell, for centering labels.
    let cell_width = if chunks[0].width > 0 {
        FIGURE_WIDTH / chunks[0].width as f64
    } else {
        0.0
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(Line::from(app.title.as_str().bold()))
                .title_alignment(Alignment::Center),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, FIGURE_WIDTH])
        .y_bounds([0.0, FIGURE_HEIGHT])
        .paint(|ctx| app.draw_map(ctx, cell_width));
    f.render_widget(canvas, chunks[0]);

    let rule = Paragraph::new("─".repeat(chunks[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, chunks[1]);

    let status = Paragraph::new(Line::from(vec![
        Span::raw("Press "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" or "),
        Span::styled("ESC", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to close the viewer"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[2]);
}
