use mutroute_core::Maze;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const LEVEL: &str = "
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

pub fn level() -> Maze {
    Maze::parse(LEVEL).unwrap()
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
