use std::path::PathBuf;

use clap::Parser;

use crate::agent::AgentConfig;
use crate::environment::Pos;

/// Let an agent wander a grid scenario until it runs out of unvisited
/// neighbours.
#[derive(Parser, Debug, Clone)]
#[command(name = "grid_exploration", version, long_about = None)]
pub struct Config {
    /// Scenario file: a `rows cols` header followed by rows of `.` and `X`
    #[arg(default_value = "scenario.txt")]
    pub scenario: PathBuf,

    /// Row of the starting cell
    #[arg(long, default_value_t = 0)]
    pub start_row: i32,

    /// Column of the starting cell
    #[arg(long, default_value_t = 0)]
    pub start_col: i32,

    /// Count the starting cell as visited, so the agent never returns to it
    #[arg(long)]
    pub include_start: bool,

    /// Seed for reproducible walks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the moves, not the map after each of them
    #[arg(long)]
    pub quiet_map: bool,

    /// Also write every step as CSV to this file
    #[arg(long)]
    pub trace: Option<PathBuf>,
}

impl Config {
    pub fn start(&self) -> Pos {
        Pos::new(self.start_row, self.start_col)
    }

    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            include_start_in_visited: self.include_start,
        }
    }
}
