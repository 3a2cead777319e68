use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slider::board::Board;
use slider::generator;
use slider::heuristic::{HammingHeuristic, Heuristic, ManhattanHeuristic, NullHeuristic};
use slider::puzzles::{self, Puzzles};
use slider::solver::{Frontier, SolveResult, Solver, SolverError, Tracer};
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicType {
    Manhattan,
    Hamming,
    Null,
}

fn format_solution(solver: &Solver) -> String {
    if !solver.is_solvable() {
        return "No solution possible\n".to_string();
    }
    let mut out = format!("Minimum number of moves = {}\n", solver.moves().unwrap_or(0));
    for board in solver.solution() {
        out.push_str(&board.to_string());
        out.push('\n');
    }
    out
}

struct VerboseTracer {
    range: Option<(usize, usize)>,
}

impl Tracer for VerboseTracer {
    fn trace(
        &self,
        frontier: Frontier,
        board: &Board,
        nodes_explored: usize,
        f_cost: usize,
        g_cost: usize,
    ) {
        let Some((trace_start, trace_end)) = self.range else {
            return;
        };
        if trace_start <= nodes_explored && nodes_explored <= trace_end {
            println!(
                "frontier={}, count={}, f_cost={}, g_cost={}, hamming={}, manhattan={}:\n{}",
                frontier,
                nodes_explored,
                f_cost,
                g_cost,
                board.hamming(),
                board.manhattan(),
                board
            );
        }
    }
}

struct PuzzleStats {
    solved: bool,
    moves: usize,
    states_explored: usize,
    elapsed_ms: u128,
}

struct SolveOpts {
    puzzle_num: usize,
    stats: bool,
    trace_range: Option<(usize, usize)>,
}

fn solve_puzzle_helper<H: Heuristic>(
    board: &Board,
    opts: &SolveOpts,
    heuristic: H,
) -> Result<PuzzleStats, SolverError> {
    let tracer = VerboseTracer {
        range: opts.trace_range,
    };

    let start = Instant::now();
    let solver = Solver::with_heuristic(board, &heuristic, &tracer)?;
    let elapsed_ms = start.elapsed().as_millis();
    let (nodes_initial, nodes_twin) = solver.nodes_explored();
    let states_explored = nodes_initial + nodes_twin;

    let (solved_char, moves, solved) = match solver.result() {
        SolveResult::Solved(path) => ('Y', path.len() - 1, true),
        SolveResult::Impossible => ('X', 0, false),
    };

    if opts.stats {
        println!(
            "puzzle: {:<3}  solved: {}  moves: {:<5}  states: {:<12}  elapsed: {} ms",
            opts.puzzle_num, solved_char, moves, states_explored, elapsed_ms
        );
    } else {
        print!("{}", format_solution(&solver));
    }

    if log::log_enabled!(log::Level::Debug) {
        let directions: Vec<String> = solver.directions().iter().map(|d| d.to_string()).collect();
        log::debug!("puzzle {}: blank moves [{}]", opts.puzzle_num, directions.join(", "));
    }

    Ok(PuzzleStats {
        solved,
        moves,
        states_explored,
        elapsed_ms,
    })
}

fn solve_puzzle(
    board: &Board,
    opts: &SolveOpts,
    heuristic_type: HeuristicType,
) -> Result<PuzzleStats, SolverError> {
    match heuristic_type {
        HeuristicType::Manhattan => solve_puzzle_helper(board, opts, ManhattanHeuristic),
        HeuristicType::Hamming => solve_puzzle_helper(board, opts, HammingHeuristic),
        HeuristicType::Null => solve_puzzle_helper(board, opts, NullHeuristic),
    }
}

#[derive(Parser)]
#[command(name = "slider")]
#[command(about = "An N-puzzle solver", long_about = None)]
struct Args {
    /// Path to the puzzles file (dimension followed by tiles, per puzzle)
    #[arg(value_name = "FILE", required_unless_present = "generate")]
    puzzles_file: Option<String>,

    /// Puzzle number to solve (1-indexed), or start of range
    #[arg(value_name = "PUZZLE")]
    puzzle_start: Option<usize>,

    /// Optional end of puzzle range (inclusive, 1-indexed)
    #[arg(value_name = "PUZZLE_END")]
    puzzle_end: Option<usize>,

    /// Generate this many random puzzles instead of reading a file
    #[arg(short, long, conflicts_with = "puzzles_file")]
    generate: Option<usize>,

    /// Dimension of generated puzzles
    #[arg(long, default_value = "3")]
    dimension: usize,

    /// Scramble generated puzzles with this many random slides from the goal
    /// (default: uniformly random arrangement, possibly unsolvable)
    #[arg(long)]
    scramble: Option<usize>,

    /// Seed for puzzle generation
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Heuristic to use for solving
    #[arg(short = 'H', long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicType,

    /// Print one summary line per puzzle instead of the solution
    #[arg(short, long)]
    stats: bool,

    /// Range of expanded node numbers to trace (start, end)
    #[arg(long, num_args = 2)]
    trace_range: Option<Vec<usize>>,
}

fn load_puzzles(args: &Args) -> Result<Puzzles, String> {
    if let Some(count) = args.generate {
        if args.dimension == 0 || args.dimension > puzzles::MAX_DIMENSION {
            return Err(format!(
                "dimension must be in 1..={}",
                puzzles::MAX_DIMENSION
            ));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let boards: Vec<Board> = (0..count)
            .map(|_| match args.scramble {
                Some(steps) => generator::scramble(args.dimension, steps, &mut rng),
                None => generator::shuffle(args.dimension, &mut rng),
            })
            .collect();
        log::info!(
            "generated {} puzzles of dimension {} (seed {})",
            boards.len(),
            args.dimension,
            args.seed
        );
        return Ok(Puzzles::from(boards));
    }

    let path = args.puzzles_file.as_deref().ok_or("no puzzles file given")?;
    let puzzles = Puzzles::from_file(path).map_err(|e| format!("failed to load {}: {}", path, e))?;
    log::info!("loaded {} puzzles from {}", puzzles.len(), path);
    Ok(puzzles)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzles = match load_puzzles(&args) {
        Ok(puzzles) => puzzles,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if puzzles.is_empty() {
        eprintln!("Error: no puzzles to solve");
        std::process::exit(1);
    }

    // Determine the range of puzzles to solve
    let puzzle_start = args.puzzle_start.unwrap_or(1);
    let puzzle_end = args
        .puzzle_end
        .unwrap_or(if args.puzzle_start.is_some() { puzzle_start } else { puzzles.len() });
    let num_puzzles = puzzle_end.saturating_sub(puzzle_start) + 1;

    // Validate range
    if puzzle_start == 0 {
        eprintln!("Error: puzzle numbers must be at least 1");
        std::process::exit(1);
    }

    if puzzle_end < puzzle_start {
        eprintln!("Error: puzzle end must be >= puzzle start");
        std::process::exit(1);
    }

    if puzzle_end > puzzles.len() {
        eprintln!(
            "Error: puzzle {} not found ({} puzzles available)",
            puzzle_end,
            puzzles.len()
        );
        std::process::exit(1);
    }

    // Validate trace_range
    let trace_range = args.trace_range.as_ref().map(|v| (v[0], v[1]));
    if let Some((trace_start, trace_end)) = trace_range {
        if trace_start > trace_end {
            eprintln!("Error: trace range start must be <= end");
            std::process::exit(1);
        }
    }

    let mut total_solved = 0;
    let mut total_moves = 0;
    let mut total_states = 0;
    let mut total_time_ms = 0;

    for puzzle_num in puzzle_start..=puzzle_end {
        let Some(board) = puzzles.get(puzzle_num - 1) else {
            break;
        };
        let opts = SolveOpts {
            puzzle_num,
            stats: args.stats,
            trace_range,
        };
        let stats = match solve_puzzle(board, &opts, args.heuristic) {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Error: puzzle {}: {}", puzzle_num, e);
                std::process::exit(1);
            }
        };

        if stats.solved {
            total_solved += 1;
        }
        total_moves += stats.moves;
        total_states += stats.states_explored;
        total_time_ms += stats.elapsed_ms;
    }

    // Print summary statistics if multiple puzzles were solved
    if args.stats && num_puzzles > 1 {
        println!("---");
        println!(
            "solved: {:>3}/{:<3}        moves: {:<5}  states: {:<12}  elapsed: {} ms",
            total_solved, num_puzzles, total_moves, total_states, total_time_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_solved() {
        let board = Board::new(&[[1, 2], [0, 3]]);
        let solver = Solver::new(&board).unwrap();
        assert_eq!(
            format_solution(&solver),
            "Minimum number of moves = 1\n2\n1 2\n0 3\n2\n1 2\n3 0\n"
        );
    }

    #[test]
    fn test_format_already_solved() {
        let solver = Solver::new(&Board::goal(2)).unwrap();
        assert_eq!(format_solution(&solver), "Minimum number of moves = 0\n2\n1 2\n3 0\n");
    }

    #[test]
    fn test_format_unsolvable() {
        let board = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        let solver = Solver::new(&board).unwrap();
        assert_eq!(format_solution(&solver), "No solution possible\n");
    }
}
