use arrayvec::ArrayVec;
use std::fmt;

/// A (row, column) position on the grid.
pub type Position = (usize, usize);

/// Direction in which the blank slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

/// An immutable arrangement of tiles on an n×n grid, 0 being the blank.
///
/// The Hamming and Manhattan distances are computed once on construction.
#[derive(Debug, Clone)]
pub struct Board {
    n: usize,
    // Row-major
    tiles: Vec<u16>,
    hamming: usize,
    manhattan: usize,
}

impl Board {
    /// Build a board from its rows. The rows are copied.
    ///
    /// The grid must be square and hold every value of 0..n² exactly once;
    /// this is not checked here (see `puzzles` for validated parsing).
    pub fn new<R: AsRef<[u16]>>(grid: &[R]) -> Self {
        let n = grid.len();
        let mut tiles = Vec::with_capacity(n * n);
        for row in grid {
            tiles.extend_from_slice(row.as_ref());
        }
        Self::from_tiles(n, tiles)
    }

    /// The solved board of the given dimension.
    pub fn goal(n: usize) -> Self {
        let mut tiles: Vec<u16> = (1..(n * n) as u16).collect();
        tiles.push(0);
        Self::from_tiles(n, tiles)
    }

    fn from_tiles(n: usize, tiles: Vec<u16>) -> Self {
        let (hamming, manhattan) = Self::distances(n, &tiles);
        Board {
            n,
            tiles,
            hamming,
            manhattan,
        }
    }

    fn distances(n: usize, tiles: &[u16]) -> (usize, usize) {
        let mut hamming = 0;
        let mut manhattan = 0;
        for (idx, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal_idx = tile as usize - 1;
            if goal_idx != idx {
                hamming += 1;
                manhattan += (idx / n).abs_diff(goal_idx / n) + (idx % n).abs_diff(goal_idx % n);
            }
        }
        (hamming, manhattan)
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> usize {
        self.hamming
    }

    /// Sum of the grid distances of all non-blank tiles to their goal cells.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(idx, &tile)| tile as usize == idx + 1)
    }

    /// Panics if the board has no blank tile.
    pub fn blank_position(&self) -> Position {
        let Some(idx) = self.tiles.iter().position(|&tile| tile == 0) else {
            panic!("board has no blank tile:\n{}", self);
        };
        (idx / self.n, idx % self.n)
    }

    /// Grid distance from the blank to the bottom-right cell.
    pub fn blank_distance(&self) -> usize {
        let (row, col) = self.blank_position();
        (self.n - 1 - row) + (self.n - 1 - col)
    }

    /// Slide the blank one cell in the given direction.
    /// Returns None if that would leave the grid.
    pub fn move_blank(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = direction.delta();
        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.n || new_col >= self.n {
            return None;
        }

        let mut tiles = self.tiles.clone();
        tiles.swap(row * self.n + col, new_row * self.n + new_col);
        Some(Self::from_tiles(self.n, tiles))
    }

    /// All boards one slide away, in Up, Down, Left, Right order.
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&direction| self.move_blank(direction))
            .collect()
    }

    /// The slide that turns this board into `other`, if they are neighbors.
    pub fn direction_to(&self, other: &Board) -> Option<Direction> {
        ALL_DIRECTIONS
            .into_iter()
            .find(|&direction| self.move_blank(direction).as_ref() == Some(other))
    }

    /// The board with the first two non-blank tiles (row-major) swapped.
    ///
    /// Exactly one of a board and its twin is solvable. Returns None when
    /// there are fewer than two non-blank tiles.
    pub fn twin(&self) -> Option<Board> {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, _)| idx);
        let first = non_blank.next()?;
        let second = non_blank.next()?;

        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Some(Self::from_tiles(self.n, tiles))
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n.max(1)) {
            writeln!(f)?;
            let line: Vec<String> = row.iter().map(|tile| tile.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
