//! Parameter sweeps: run a solver once per candidate setting and keep the
//! longest route.

use longmaze_graph::Graph;

use crate::ant::{AntColonySolver, AntConfig};
use crate::beam::BeamSearchSolver;
use crate::solver::{Solution, Solver};

/// Ant counts tried by a default ant sweep.
pub const ANT_COUNT_LADDER: [usize; 13] =
    [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10000];

/// Beam widths tried by a default beam sweep.
pub fn beam_width_ladder() -> impl Iterator<Item = usize> {
    1..=200
}

/// The best run of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// The parameter value that produced `solution`.
    pub parameter: usize,
    pub solution: Solution,
}

/// Run `make(parameter)` for every parameter and keep the first longest
/// solution. Failed runs are logged and skipped.
fn sweep<S, I, F>(graph: &Graph, label: &str, params: I, mut make: F) -> Option<SweepOutcome>
where
    S: Solver,
    I: IntoIterator<Item = usize>,
    F: FnMut(usize) -> S,
{
    let mut best: Option<SweepOutcome> = None;
    for parameter in params {
        let mut solver = make(parameter);
        match solver.solve(graph) {
            Ok(solution) => {
                log::info!("{label} = {parameter}: length {}", solution.length);
                if best
                    .as_ref()
                    .is_none_or(|b| solution.length > b.solution.length)
                {
                    best = Some(SweepOutcome {
                        parameter,
                        solution,
                    });
                }
            }
            Err(e) => log::warn!("{label} = {parameter}: {e}"),
        }
    }
    match &best {
        Some(b) => log::info!(
            "best length {} with {label} = {}",
            b.solution.length,
            b.parameter
        ),
        None => log::warn!("no {label} produced a solution"),
    }
    best
}

/// Try each beam width with a fixed generation limit.
pub fn sweep_beam_width<I>(graph: &Graph, widths: I, max_count: usize) -> Option<SweepOutcome>
where
    I: IntoIterator<Item = usize>,
{
    sweep(graph, "max_size", widths, |w| {
        BeamSearchSolver::new(w, max_count)
    })
}

/// Try each ant count. Every run starts from a generator seeded with `seed`,
/// so a count's result does not depend on the counts tried before it.
pub fn sweep_ant_count<I>(
    graph: &Graph,
    counts: I,
    ant_steps: usize,
    seed: u64,
) -> Option<SweepOutcome>
where
    I: IntoIterator<Item = usize>,
{
    sweep(graph, "ants_count", counts, |ants_count| {
        AntColonySolver::with_config(AntConfig {
            ant_steps,
            ants_count,
            seed,
        })
    })
}

#[cfg(test)]
mod tests {
    use longmaze_core::Maze;

    use super::*;

    const LOOPS: &str = "
#.#####
#.....#
#.#.#.#
#.....#
#.#.#.#
#.....#
#####.#";

    #[test]
    fn wider_beams_never_lose() {
        let g = Graph::build_reduced(&Maze::parse(LOOPS).unwrap());
        let out = sweep_beam_width(&g, [1, 4, 64], 100).unwrap();
        let narrow = BeamSearchSolver::new(1, 100).search(&g).unwrap();
        assert!(out.solution.length >= narrow.length);
        assert!([1, 4, 64].contains(&out.parameter));
    }

    #[test]
    fn first_best_parameter_wins() {
        // A single corridor gives the same length for every width.
        let g = Graph::build_reduced(&Maze::parse("#.#\n#.#\n#.#").unwrap());
        let out = sweep_beam_width(&g, [3, 1, 2], 10).unwrap();
        assert_eq!(out.parameter, 3);
        assert_eq!(out.solution.length, 2);
    }

    #[test]
    fn ant_sweep_reseeds() {
        let g = Graph::build_reduced(&Maze::parse(LOOPS).unwrap());
        let a = sweep_ant_count(&g, [5], 10_000, 9).unwrap();
        let b = sweep_ant_count(&g, [1, 2, 5], 10_000, 9).unwrap();
        let alone = AntColonySolver::new(10_000, 5, 9).search(&g).unwrap();
        assert_eq!(a.solution, alone);
        assert!(b.solution.length >= alone.length);
    }

    #[test]
    fn all_runs_failing() {
        let g = Graph::build_reduced(&Maze::parse("#.#\n###\n#.#").unwrap());
        assert_eq!(sweep_beam_width(&g, [1, 2], 10), None);
        assert_eq!(sweep_ant_count(&g, [1, 2], 10, 0), None);
    }

    #[test]
    fn ladders() {
        assert_eq!(beam_width_ladder().count(), 200);
        assert_eq!(ANT_COUNT_LADDER.first(), Some(&1));
        assert_eq!(ANT_COUNT_LADDER.last(), Some(&10000));
    }
}
