use crate::board::Board;

/// Trait for estimating the number of slides needed to reach the goal.
///
/// Implementations must never overestimate and must change by at most one
/// per slide, otherwise the solver may return a non-minimal solution.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> usize;
}

/// Sum of tile distances to their goal cells.
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, board: &Board) -> usize {
        board.manhattan()
    }
}

/// Number of misplaced tiles.
pub struct HammingHeuristic;

impl Heuristic for HammingHeuristic {
    fn estimate(&self, board: &Board) -> usize {
        board.hamming()
    }
}

/// Always zero, which turns the search into a uniform-cost search.
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    fn estimate(&self, _board: &Board) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board() {
        let board = Board::goal(3);
        assert_eq!(ManhattanHeuristic.estimate(&board), 0);
        assert_eq!(HammingHeuristic.estimate(&board), 0);
        assert_eq!(NullHeuristic.estimate(&board), 0);
    }

    #[test]
    fn test_ordering() {
        // Manhattan dominates Hamming, which dominates Null
        let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        assert_eq!(ManhattanHeuristic.estimate(&board), 10);
        assert_eq!(HammingHeuristic.estimate(&board), 5);
        assert_eq!(NullHeuristic.estimate(&board), 0);
    }

    #[test]
    fn test_consistent_across_slides() {
        let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        for neighbor in board.neighbors() {
            let before = ManhattanHeuristic.estimate(&board);
            let after = ManhattanHeuristic.estimate(&neighbor);
            assert!(before.abs_diff(after) <= 1);

            let before = HammingHeuristic.estimate(&board);
            let after = HammingHeuristic.estimate(&neighbor);
            assert!(before.abs_diff(after) <= 1);
        }
    }
}
