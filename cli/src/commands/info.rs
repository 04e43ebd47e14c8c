use std::path::Path;

use longmaze_graph::Graph;

use super::{load_maze, timed};

pub fn run(maze_path: &Path) -> anyhow::Result<()> {
    let maze = load_maze(maze_path)?;
    let mut graph = timed("build graph", || Graph::build(&maze));
    let plain = (graph.len(), graph.edge_count() / 2);
    let stats = timed("reduce graph", || graph.reduce());

    println!("size:      {} x {}", maze.width(), maze.height());
    println!("passages:  {}", maze.passage_count());
    println!("begin:     {}", maze.begin());
    println!("end:       {}", maze.end());
    println!("plain:     {} nodes, {} corridors", plain.0, plain.1);
    println!(
        "reduced:   {} nodes, {} corridors, total length {}",
        graph.len(),
        graph.edge_count() / 2,
        graph.total_weight()
    );
    println!("reduction: {stats}");
    if !graph.contains(maze.end()) {
        log::warn!("end {} is not reachable from begin", maze.end());
    }
    Ok(())
}
