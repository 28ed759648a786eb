mod render;

use clap::Parser;
use console::Term;
use gridwalk::{
    config::{ConfigError, DisplayConfig, DisplayOverrides},
    search::{
        problem_formulations::{MiceAndMeows, ProblemName},
        search_engines::{SearchMode, SearchStrategyName},
        BoardError, DriverStatus, HeuristicName, SearchDriver, SearchProblem, SearchState,
        Verbosity,
    },
};
use itertools::Itertools;
use std::{error::Error, io, path::PathBuf, process::ExitCode, thread, time::Duration};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve a grid puzzle with a state space search, drawing the search as it
/// goes.
struct Cli {
    #[arg(
        value_enum,
        help = "The problem to solve",
        long = "problem",
        id = "PROBLEM"
    )]
    problem: ProblemName,
    #[arg(
        value_enum,
        help = "The search strategy to use",
        long = "strategy",
        id = "STRATEGY"
    )]
    strategy: SearchStrategyName,
    #[arg(help = "The board file", long = "board", id = "BOARD")]
    board: PathBuf,
    #[arg(
        help = "The heuristic to use, one of manhattan, euclidean, \
        mice-remaining, closest-mouse or total-distance. Unknown names mean no heuristic.",
        long = "heuristic",
        id = "HEURISTIC",
        default_value = ""
    )]
    heuristic: String,
    #[arg(
        help = "Never add a state to the fringe twice, instead of only \
        avoiding states on the current path",
        long = "graph-search"
    )]
    graph_search: bool,
    #[arg(help = "Search steps per second", long = "fps", id = "FPS")]
    fps: Option<u32>,
    #[arg(help = "Spot size in pixels", long = "spot-size", id = "SPOT_SIZE")]
    spot_size: Option<u32>,
    #[arg(
        help = "Margin between spots in pixels",
        long = "margin-size",
        id = "MARGIN_SIZE"
    )]
    margin_size: Option<u32>,
    #[arg(
        value_enum,
        help = "Whether to draw the search, without graphics it runs to the end at once",
        long = "graphics",
        id = "GRAPHICS"
    )]
    graphics: Option<Switch>,
    #[arg(
        help = "A TOML file with display settings, overridden by the flags above",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    On,
    Off,
}

#[derive(thiserror::Error, Debug)]
enum SolverError {
    #[error("couldn't open board")]
    Board(#[from] BoardError),
    #[error("bad display settings")]
    Config(#[from] ConfigError),
    #[error("failed to draw the board")]
    Draw(#[from] io::Error),
}

/// The error followed by each of its causes, outermost first.
fn report(error: &dyn Error) -> String {
    std::iter::successors(Some(error), |&e| e.source()).join(": ")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(io::stderr)
        .compact()
        .init();

    match solve(cli) {
        Ok(DriverStatus::Exhausted) => {
            println!("No solution found.");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let message = report(&e);
            error!("{}", message);
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn solve(cli: Cli) -> Result<DriverStatus, SolverError> {
    let display = DisplayConfig::resolve(
        cli.config.as_deref(),
        DisplayOverrides {
            fps: cli.fps,
            spot_size: cli.spot_size,
            margin_size: cli.margin_size,
            graphics: cli.graphics.map(|switch| switch == Switch::On),
        },
    )?;

    if !HeuristicName::is_known(&cli.heuristic) {
        warn!(heuristic = %cli.heuristic, "unknown heuristic, searching without one");
    }
    let heuristic = HeuristicName::from_name(&cli.heuristic);
    let mode = if cli.graph_search {
        SearchMode::Graph
    } else {
        SearchMode::Tree
    };

    match cli.problem {
        ProblemName::MiceAndMeows => {
            let mut problem = MiceAndMeows::new();
            problem.set_heuristic(heuristic);
            let driver = SearchDriver::new(problem, cli.strategy.create(mode), &cli.board)?;
            drive(driver, &display)
        }
    }
}

fn drive<S: SearchState + 'static>(
    mut driver: SearchDriver<S>,
    display: &DisplayConfig,
) -> Result<DriverStatus, SolverError> {
    if display.graphics {
        let term = Term::stdout();
        let frame = Duration::from_secs(1) / display.fps;
        render::draw(&term, driver.board(), display)?;
        while driver.step() {
            thread::sleep(frame);
            render::draw(&term, driver.board(), display)?;
        }
    } else {
        info!("graphics off, running search to the end");
        driver.run();
    }

    if let Some(summary) = driver.summary() {
        println!("{}", summary);
    }
    Ok(driver.status())
}
