use std::path::Path;

use anyhow::Context;
use longmaze_core::Maze;
use longmaze_solve::{AntColonySolver, BeamSearchSolver, Solution, Solver};

use super::{build_graph, load_maze, timed};

pub fn beam(
    maze: &Path,
    max_size: usize,
    max_count: usize,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    run(maze, BeamSearchSolver::new(max_size, max_count), output)
}

pub fn ants(
    maze: &Path,
    ant_steps: usize,
    ants_count: usize,
    seed: u64,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    run(maze, AntColonySolver::new(ant_steps, ants_count, seed), output)
}

fn run<S: Solver>(maze_path: &Path, mut solver: S, output: Option<&Path>) -> anyhow::Result<()> {
    let maze = load_maze(maze_path)?;
    let graph = build_graph(&maze);
    let solution = timed("solve", || solver.solve(&graph))?;
    report(&solution);
    if let Some(out) = output {
        save(&maze, &solution, out)?;
    }
    Ok(())
}

fn report(solution: &Solution) {
    println!("length: {}", solution.length);
    println!("nodes:  {}", solution.nodes.len());
}

fn save(maze: &Maze, solution: &Solution, out: &Path) -> anyhow::Result<()> {
    longmaze_image::save_solution(maze, &solution.cells, out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    log::info!("solution written to {}", out.display());
    Ok(())
}
