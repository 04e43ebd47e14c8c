use std::path::Path;

use longmaze_solve::{ANT_COUNT_LADDER, SweepOutcome, sweep_ant_count, sweep_beam_width};

use super::{build_graph, load_maze, timed};

pub fn beam(
    maze: &Path,
    widths: impl IntoIterator<Item = usize>,
    max_count: usize,
) -> anyhow::Result<()> {
    let maze = load_maze(maze)?;
    let graph = build_graph(&maze);
    let best = timed("solve", || sweep_beam_width(&graph, widths, max_count));
    report("max_size", best)
}

pub fn ants(maze: &Path, ant_steps: usize, seed: u64) -> anyhow::Result<()> {
    let maze = load_maze(maze)?;
    let graph = build_graph(&maze);
    let best = timed("solve", || {
        sweep_ant_count(&graph, ANT_COUNT_LADDER, ant_steps, seed)
    });
    report("ants_count", best)
}

fn report(label: &str, best: Option<SweepOutcome>) -> anyhow::Result<()> {
    let Some(best) = best else {
        anyhow::bail!("no {label} produced a solution");
    };
    println!(
        "Best length is {} with {label} = {}",
        best.solution.length, best.parameter
    );
    Ok(())
}
