pub mod board;
pub mod generator;
pub mod heuristic;
pub mod pqueue;
pub mod puzzles;
pub mod solver;
