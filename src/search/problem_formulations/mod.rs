mod mice_and_meows;
mod search_problem;

pub use mice_and_meows::{Layout, MiceAndMeows, MiceAndMeowsState, Move};
pub use search_problem::SearchProblem;

/// The problems that can be solved from the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum ProblemName {
    #[clap(help = "Catch every mouse, then reach the exit. Water costs 6 to enter.")]
    MiceAndMeows,
}
