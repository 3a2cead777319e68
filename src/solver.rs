use crate::board::{Board, Direction};
use crate::heuristic::{Heuristic, ManhattanHeuristic};
use crate::pqueue::PriorityQueue;
use std::fmt;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// Boards from the initial board to the goal, inclusive.
    Solved(Vec<Board>),
    Impossible,
}

/// Which of the two lockstep searches a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontier {
    Initial,
    Twin,
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontier::Initial => write!(f, "initial"),
            Frontier::Twin => write!(f, "twin"),
        }
    }
}

pub trait Tracer {
    fn trace(
        &self,
        frontier: Frontier,
        board: &Board,
        nodes_explored: usize,
        f_cost: usize,
        g_cost: usize,
    );
}

pub struct NullTracer;

impl Tracer for NullTracer {
    fn trace(&self, _: Frontier, _: &Board, _: usize, _: usize, _: usize) {}
}

struct SearchNode {
    board: Board,
    parent: Option<usize>,
    moves: usize,
}

/// One A* search. Nodes live in an arena and link to their parent by index.
struct Search<'a, H: Heuristic, T: Tracer> {
    frontier_kind: Frontier,
    nodes: Vec<SearchNode>,
    frontier: PriorityQueue<usize>,
    heuristic: &'a H,
    tracer: &'a T,
    nodes_explored: usize,
}

impl<'a, H: Heuristic, T: Tracer> Search<'a, H, T> {
    fn new(frontier_kind: Frontier, root: Board, heuristic: &'a H, tracer: &'a T) -> Self {
        let mut frontier = PriorityQueue::new();
        frontier.push(heuristic.estimate(&root), 0);
        Search {
            frontier_kind,
            nodes: vec![SearchNode {
                board: root,
                parent: None,
                moves: 0,
            }],
            frontier,
            heuristic,
            tracer,
            nodes_explored: 0,
        }
    }

    /// Index of the frontier minimum if it is a goal board.
    fn goal(&self) -> Option<usize> {
        let &idx = self.frontier.peek_min()?;
        self.nodes[idx].board.is_goal().then_some(idx)
    }

    /// Pop the frontier minimum and push its children, skipping the board
    /// it was reached from. Returns false if the frontier was empty.
    fn expand(&mut self) -> bool {
        let Some(f_cost) = self.frontier.min_priority() else {
            return false;
        };
        let Some(idx) = self.frontier.pop_min() else {
            return false;
        };
        self.nodes_explored += 1;

        let node = &self.nodes[idx];
        let moves = node.moves + 1;
        self.tracer.trace(
            self.frontier_kind,
            &node.board,
            self.nodes_explored,
            f_cost,
            node.moves,
        );

        let parent_board = node.parent.map(|parent| &self.nodes[parent].board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .into_iter()
            .filter(|neighbor| Some(neighbor) != parent_board)
            .collect();

        for board in children {
            let priority = moves + self.heuristic.estimate(&board);
            let child = self.nodes.len();
            self.nodes.push(SearchNode {
                board,
                parent: Some(idx),
                moves,
            });
            self.frontier.push(priority, child);
        }
        true
    }

    /// Walk the parent links from `idx` back to the root.
    fn path(&self, idx: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[idx].moves + 1);
        let mut current = Some(idx);
        while let Some(idx) = current {
            path.push(self.nodes[idx].board.clone());
            current = self.nodes[idx].parent;
        }
        path.reverse();
        path
    }
}

/// Finds a minimum-move solution for a board, or shows there is none.
///
/// Two searches run in lockstep: one from the board and one from its twin.
/// Exactly one of them is solvable, so whichever reaches a goal first
/// decides the outcome.
pub struct Solver {
    result: SolveResult,
    nodes_explored: (usize, usize),
}

impl Solver {
    pub fn new(initial: &Board) -> Result<Self, SolverError> {
        Self::with_heuristic(initial, &ManhattanHeuristic, &NullTracer)
    }

    pub fn with_heuristic<H: Heuristic, T: Tracer>(
        initial: &Board,
        heuristic: &H,
        tracer: &T,
    ) -> Result<Self, SolverError> {
        if initial.is_goal() {
            return Ok(Solver {
                result: SolveResult::Solved(vec![initial.clone()]),
                nodes_explored: (0, 0),
            });
        }

        let twin = initial.twin().ok_or_else(|| {
            SolverError::InvalidArgument(format!(
                "board has fewer than two tiles and is not solved:\n{}",
                initial
            ))
        })?;

        log::debug!(
            "solving {0}x{0} board, hamming={1}, manhattan={2}",
            initial.dimension(),
            initial.hamming(),
            initial.manhattan()
        );

        let mut search = Search::new(Frontier::Initial, initial.clone(), heuristic, tracer);
        let mut twin_search = Search::new(Frontier::Twin, twin, heuristic, tracer);

        let result = loop {
            if let Some(goal) = search.goal() {
                break SolveResult::Solved(search.path(goal));
            }
            if twin_search.goal().is_some() {
                break SolveResult::Impossible;
            }

            let expanded = search.expand();
            let twin_expanded = twin_search.expand();
            if !expanded && !twin_expanded {
                panic!("both frontiers exhausted without reaching a goal:\n{}", initial);
            }
        };

        let nodes_explored = (search.nodes_explored, twin_search.nodes_explored);
        match &result {
            SolveResult::Solved(path) => log::debug!(
                "solved in {} moves, nodes explored: {} initial, {} twin",
                path.len() - 1,
                nodes_explored.0,
                nodes_explored.1
            ),
            SolveResult::Impossible => log::debug!(
                "twin reached goal, board is unsolvable; nodes explored: {} initial, {} twin",
                nodes_explored.0,
                nodes_explored.1
            ),
        }

        Ok(Solver {
            result,
            nodes_explored,
        })
    }

    pub fn is_solvable(&self) -> bool {
        matches!(self.result, SolveResult::Solved(_))
    }

    /// Minimum number of moves, or None if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        match &self.result {
            SolveResult::Solved(path) => Some(path.len() - 1),
            SolveResult::Impossible => None,
        }
    }

    /// Boards from the initial board to the goal. Empty if unsolvable.
    pub fn solution(&self) -> &[Board] {
        match &self.result {
            SolveResult::Solved(path) => path,
            SolveResult::Impossible => &[],
        }
    }

    /// The blank slides along the solution.
    pub fn directions(&self) -> Vec<Direction> {
        self.solution()
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }

    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    /// Nodes expanded by the initial and the twin search.
    pub fn nodes_explored(&self) -> (usize, usize) {
        self.nodes_explored
    }
}
