pub mod info;
pub mod solve;
pub mod sweep;

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use longmaze_core::Maze;
use longmaze_graph::Graph;

/// Run `f` and log how long it took.
pub fn timed<T>(stage: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    log::info!("time {stage}: {:.3}", start.elapsed().as_secs_f64());
    out
}

/// Read a maze from a text file (`.txt`) or any supported image.
pub fn load_maze(path: &Path) -> anyhow::Result<Maze> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    timed("load maze", || -> anyhow::Result<Maze> {
        let is_text = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_text {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Maze::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            longmaze_image::load_maze(path)
                .with_context(|| format!("Failed to load {}", path.display()))
        }
    })
}

/// Build and reduce the corridor graph of `maze`.
pub fn build_graph(maze: &Maze) -> Graph {
    timed("build graph", || {
        let mut graph = Graph::build(maze);
        let plain = graph.len();
        let stats = graph.reduce();
        log::debug!("{plain} cells reduced to {} nodes: {stats}", graph.len());
        graph
    })
}
