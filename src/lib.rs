/*
* Copyright (C) 2026  fastdoku contributors
* This file is part of fastdoku.
*
* fastdoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* fastdoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with fastdoku.  If not, see <https://www.gnu.org/licenses/>.
*/

//! A high-performance 9×9 Sudoku solver built around the exact-cover
//! structure of the puzzle.
//!
//! Two interchangeable solver cores share one problem model:
//!
//! - [`DlxSolver`]: Knuth's Dancing Links over an index-addressed
//!   four-way linked matrix (no pointers, no cyclic ownership).
//! - [`LiteralSolver`]: a direct bitset solver that tracks, for every
//!   cell and every (row/column/box, digit) group, how many candidate
//!   placements remain, and always branches on the group with the
//!   fewest.
//!
//! Both cores pick their branch point with the same "minimum of 324
//! small counters" primitive, which uses SSE4.1 `minpos` when the CPU
//! has it and an identical scalar scan when it does not.
//!
//! ```
//! use fastdoku::{Board, LiteralSolver, SearchMode};
//!
//! let board: Board = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!     .parse()
//!     .unwrap();
//! let mut solver = LiteralSolver::new();
//! let outcome = solver.solve(&board, SearchMode::FirstSolution);
//! assert!(outcome.found);
//! ```

pub mod bits;
pub mod board;
pub mod candidates;
pub mod geometry;
pub mod solver;

pub use board::{Board, InvalidBoard};
pub use solver::dlx::DlxSolver;
pub use solver::literal::LiteralSolver;
pub use solver::{SearchMode, SearchStats, SolveOutcome, MAX_REPORTED_SOLUTIONS};
