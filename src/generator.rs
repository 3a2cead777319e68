use crate::board::{ALL_DIRECTIONS, Board, Direction};
use rand::Rng;
use rand::seq::SliceRandom;

/// Walk the blank randomly from the goal for `steps` slides, never undoing
/// the previous slide. The result is solvable in at most `steps` moves.
pub fn scramble<R: Rng + ?Sized>(dimension: usize, steps: usize, rng: &mut R) -> Board {
    let mut board = Board::goal(dimension);
    let mut last: Option<Direction> = None;

    for _ in 0..steps {
        let candidates: Vec<(Direction, Board)> = ALL_DIRECTIONS
            .into_iter()
            .filter(|&direction| Some(direction.opposite()) != last)
            .filter_map(|direction| board.move_blank(direction).map(|next| (direction, next)))
            .collect();

        // A 1x1 board has nowhere to go
        let Some((direction, next)) = candidates.choose(rng) else {
            break;
        };
        last = Some(*direction);
        board = next.clone();
    }

    board
}

/// A uniformly random arrangement of tiles. Half of these are unsolvable.
pub fn shuffle<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Board {
    let mut tiles: Vec<u16> = (0..(dimension * dimension) as u16).collect();
    tiles.shuffle(rng);
    let grid: Vec<&[u16]> = tiles.chunks(dimension.max(1)).collect();
    Board::new(&grid)
}
