use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "longmaze")]
#[command(author, version, about)]
#[command(long_about = "Search binary mazes for long simple routes.\n\n\
    A maze is an image (light pixels are passages) or a text file (`#` is a wall).\n\
    The route starts at the first passage of the top row and ends at the first\n\
    passage of the bottom row.\n\n\
    Examples:\n  \
    longmaze beam maze.bmp -o solved.png      Beam search, default width\n  \
    longmaze ants maze.bmp --ants-count 200   Ant colony with 200 ants\n  \
    longmaze sweep-beam maze.bmp --to 50      Try beam widths 1..=50\n  \
    longmaze info maze.bmp                    Show graph statistics")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve with bounded-width beam search
    Beam {
        /// Maze image or text file
        maze: PathBuf,

        /// Partial routes kept per generation
        #[arg(long, default_value = "200", value_parser = positive)]
        max_size: usize,

        /// Generation limit
        #[arg(long, default_value = "1000", value_parser = positive)]
        max_count: usize,

        /// Write the maze with the route drawn in red
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve with a pheromone-guided ant colony
    Ants {
        /// Maze image or text file
        maze: PathBuf,

        /// Step limit per ant
        #[arg(long, default_value = "1000000", value_parser = positive)]
        ant_steps: usize,

        /// Number of ants
        #[arg(long, default_value = "1000", value_parser = positive)]
        ants_count: usize,

        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Write the maze with the route drawn in red
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run beam search over a range of widths and report the best
    SweepBeam {
        /// Maze image or text file
        maze: PathBuf,

        /// Smallest width tried
        #[arg(long, default_value = "1", value_parser = positive)]
        from: usize,

        /// Largest width tried
        #[arg(long, default_value = "200", value_parser = positive)]
        to: usize,

        /// Generation limit for every run
        #[arg(long, default_value = "1000", value_parser = positive)]
        max_count: usize,
    },

    /// Run the ant colony over a ladder of ant counts and report the best
    SweepAnts {
        /// Maze image or text file
        maze: PathBuf,

        /// Step limit per ant
        #[arg(long, default_value = "1000000", value_parser = positive)]
        ant_steps: usize,

        /// Random seed, reused for every run
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Print maze size, endpoints and graph sizes
    Info {
        /// Maze image or text file
        maze: PathBuf,
    },
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Beam {
                maze,
                max_size,
                max_count,
                output,
            } => crate::commands::solve::beam(&maze, max_size, max_count, output.as_deref()),
            Commands::Ants {
                maze,
                ant_steps,
                ants_count,
                seed,
                output,
            } => crate::commands::solve::ants(
                &maze,
                ant_steps,
                ants_count,
                seed,
                output.as_deref(),
            ),
            Commands::SweepBeam {
                maze,
                from,
                to,
                max_count,
            } => {
                if from > to {
                    anyhow::bail!("--from ({from}) is greater than --to ({to})");
                }
                crate::commands::sweep::beam(&maze, from..=to, max_count)
            }
            Commands::SweepAnts {
                maze,
                ant_steps,
                seed,
            } => crate::commands::sweep::ants(&maze, ant_steps, seed),
            Commands::Info { maze } => crate::commands::info::run(&maze),
        }
    }
}
