use crate::board::Board;
use std::fs;
use std::io;
use std::path::Path;

pub const MAX_DIMENSION: usize = 255;

/// Error type for puzzle parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

/// A collection of sliding puzzles.
#[derive(Debug)]
pub struct Puzzles {
    boards: Vec<Board>,
}

impl Puzzles {
    /// Parse puzzles from a string.
    ///
    /// Each puzzle is its dimension `n` followed by `n * n` tiles in
    /// row-major order, 0 being the blank. All values are separated by
    /// whitespace and several puzzles may follow each other. Lines starting
    /// with `;` are comments.
    pub fn from_text(contents: &str) -> Result<Self, PuzzleError> {
        let mut tokens = contents
            .lines()
            .filter(|line| !line.trim_start().starts_with(';'))
            .flat_map(str::split_whitespace);

        let mut boards = Vec::new();
        while let Some(token) = tokens.next() {
            let puzzle = boards.len() + 1;
            let n = parse_value(token, puzzle)?;
            if n == 0 || n > MAX_DIMENSION {
                return Err(PuzzleError::InvalidPuzzle(format!(
                    "puzzle {}: dimension {} not in 1..={}",
                    puzzle, n, MAX_DIMENSION
                )));
            }

            let mut seen = vec![false; n * n];
            let mut grid = Vec::with_capacity(n);
            for row in 0..n {
                let mut tiles = Vec::with_capacity(n);
                for col in 0..n {
                    let token = tokens.next().ok_or_else(|| {
                        PuzzleError::InvalidPuzzle(format!(
                            "puzzle {}: expected {} tiles, found {}",
                            puzzle,
                            n * n,
                            row * n + col
                        ))
                    })?;
                    let tile = parse_value(token, puzzle)?;
                    if tile >= n * n {
                        return Err(PuzzleError::InvalidPuzzle(format!(
                            "puzzle {}: tile {} at ({}, {}) out of range 0..{}",
                            puzzle,
                            tile,
                            row,
                            col,
                            n * n
                        )));
                    }
                    if seen[tile] {
                        return Err(PuzzleError::InvalidPuzzle(format!(
                            "puzzle {}: duplicate tile {} at ({}, {})",
                            puzzle, tile, row, col
                        )));
                    }
                    seen[tile] = true;
                    tiles.push(tile as u16);
                }
                grid.push(tiles);
            }

            boards.push(Board::new(&grid));
        }

        Ok(Puzzles { boards })
    }

    /// Parse puzzles from a text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth puzzle (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }
}

impl From<Vec<Board>> for Puzzles {
    fn from(boards: Vec<Board>) -> Self {
        Puzzles { boards }
    }
}

fn parse_value(token: &str, puzzle: usize) -> Result<usize, PuzzleError> {
    token.parse().map_err(|_| {
        PuzzleError::InvalidPuzzle(format!("puzzle {}: invalid number '{}'", puzzle, token))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_single() {
        let puzzles = Puzzles::from_text("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(
            puzzles.get(0),
            Some(&Board::new(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]))
        );
    }

    #[test]
    fn test_from_text_multiple_with_comments() {
        let text = "; 1\n\
                    2\n1 2\n3 0\n\
                    \n\
                    ; 2\n\
                    3\n8 1 3\n4 0 2\n7 6 5\n";
        let puzzles = Puzzles::from_text(text).unwrap();

        assert_eq!(puzzles.len(), 2);
        assert!(puzzles.get(0).unwrap().is_goal());
        assert_eq!(puzzles.get(1).unwrap().manhattan(), 10);
        assert_eq!(puzzles.iter().count(), 2);
        assert!(puzzles.get(2).is_none());
    }

    #[test]
    fn test_round_trip_display() {
        let text = "3\n8 1 3\n4 0 2\n7 6 5";
        let puzzles = Puzzles::from_text(text).unwrap();
        assert_eq!(puzzles.get(0).unwrap().to_string(), text);
    }

    #[test]
    fn test_empty() {
        let puzzles = Puzzles::from_text("; nothing here\n\n").unwrap();
        assert!(puzzles.is_empty());
    }

    #[test]
    fn test_invalid_puzzles() {
        let cases = [
            "0",
            "256",
            "2\n1 2\n3",
            "2\n1 2\n3 4",
            "2\n1 1\n3 0",
            "2\n1 x\n3 0",
            "-2\n1 2\n3 0",
        ];
        for text in cases {
            let result = Puzzles::from_text(text);
            assert!(
                matches!(result, Err(PuzzleError::InvalidPuzzle(_))),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_from_file_no_file() {
        let result = Puzzles::from_file("nonexistent_file.txt");
        assert!(matches!(result.unwrap_err(), PuzzleError::Io(_)));
    }
}
