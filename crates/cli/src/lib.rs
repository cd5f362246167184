//! zdd CLI -- build, count, and generate pseudo-ZDD fixtures from
//! graph/predicate description files.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "zdd", about = "Frontier-based pseudo-ZDD construction over graph/predicate files")]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a pseudo-ZDD from a graph/predicate file and write it as JSON
    Build(BuildArgs),
    /// Count the edge subsets a graph/predicate file's pseudo-ZDD accepts
    Count(CountArgs),
    /// Generate a random graph/predicate fixture file
    Fixture(FixtureArgs),
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Graph/predicate description file
    #[arg(long)]
    pub input: PathBuf,
    /// Where to write the pseudo-ZDD, as JSON
    #[arg(long)]
    pub output: PathBuf,
    /// Apply zdd_reduce's elimination/sharing rules before writing
    #[arg(long)]
    pub reduce: bool,
}

#[derive(Debug, Parser)]
pub struct CountArgs {
    /// Graph/predicate description file
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum FixtureKind {
    StPath,
    Hamilton,
    FGeneral,
    SetPartition,
    SetCover,
}

#[derive(Debug, Parser)]
pub struct FixtureArgs {
    /// Which predicate family to generate a fixture for
    #[arg(long, value_enum)]
    pub kind: FixtureKind,
    /// Number of vertices in the generated graph
    #[arg(long)]
    pub num_vertices: u32,
    /// Probability each possible edge (or hyperedge) is included
    #[arg(long, default_value_t = 0.5)]
    pub edge_density: f64,
    /// RNG seed; re-running with the same seed and other arguments
    /// reproduces the same fixture
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Where to write the generated graph/predicate file
    #[arg(long)]
    pub output: PathBuf,
}
