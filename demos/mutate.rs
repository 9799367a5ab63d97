//! Search a maze with mutate-and-select, then animate the winning route.
//!
//! Run: cargo run --bin mutate -- [maze.txt] [--config search.json] [--seed N] [--no-animate]
//!
//! Without a maze file the built-in level is used. Set `RUST_LOG=debug` to
//! follow the search generation by generation.

use std::fs;
use std::process;

use mutroute_core::{Maze, SystemClock, animate, render::DEFAULT_FRAME_DELAY};
use mutroute_crossterm::TerminalRenderer;
use mutroute_search::{SearchConfig, solve};

const LEVEL: &str = "
###############
#.............#
#........#..G.#
#....#...#....#
#.####........#
#..........#..#
#.....#....####
#.S...#.......#
#.............#
###############
";

struct Args {
    maze: Option<String>,
    config: Option<String>,
    seed: Option<u64>,
    animate: bool,
}

fn usage() -> ! {
    eprintln!("Usage: mutate [maze.txt] [--config search.json] [--seed N] [--no-animate]");
    process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        maze: None,
        config: None,
        seed: None,
        animate: true,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().unwrap_or_else(|| usage())),
            "--seed" => {
                let seed = it.next().and_then(|s| s.parse().ok());
                args.seed = Some(seed.unwrap_or_else(|| usage()));
            }
            "--no-animate" => args.animate = false,
            "-h" | "--help" => usage(),
            _ if args.maze.is_none() && !arg.starts_with('-') => args.maze = Some(arg.clone()),
            _ => usage(),
        }
    }
    args
}

fn load_config(path: Option<&str>) -> Result<SearchConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let maze = match &args.maze {
        Some(path) => Maze::load(path)?,
        None => Maze::parse(LEVEL)?,
    };
    let mut config = load_config(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    log::info!(
        "searching {}x{} maze: {} candidates per generation, mutation probability {}, max route length {}",
        maze.width(),
        maze.height(),
        config.candidates_per_generation,
        config.mutation_probability,
        config.max_route_length
    );

    let outcome = solve(&maze, config)?;

    if args.animate {
        let mut renderer = TerminalRenderer::new();
        animate(
            &mut renderer,
            &mut SystemClock,
            &maze,
            &outcome.route,
            DEFAULT_FRAME_DELAY,
        )?;
    } else {
        println!("{}", mutroute_core::Frame::new(&maze, &outcome.route));
    }
    println!("Took {} generations.", outcome.generations);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(parse_args()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
