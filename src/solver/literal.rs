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

//! The literal-count kernel: depth-first search over the candidate
//! state of [`crate::candidates`], always branching on the constraint
//! with the fewest remaining alternatives.

use crate::bits::{min_pos_u16, Bits};
use crate::board::Board;
use crate::candidates::{decode_constraint, Candidates, Family};
use crate::geometry::BOX_INFO;
use crate::solver::{SearchMode, SearchStats, SolutionLog, SolveOutcome};

/// Bitset solver over the shared exact-cover model.
///
/// One instance owns all of its state and may be reused across puzzles
/// after [`init`](Self::init); nothing is shared between instances.
pub struct LiteralSolver {
    state: Candidates,
    stats: SearchStats,
    empties: usize,
}

impl LiteralSolver {
    pub fn new() -> Self {
        LiteralSolver {
            state: Candidates::new(),
            stats: SearchStats::default(),
            empties: 0,
        }
    }

    /// Prepares the candidate state for one puzzle and resets the
    /// statistics. Idempotent.
    pub fn init(&mut self, board: &Board) {
        self.state.load_givens(board);
        self.stats = SearchStats::default();
        self.empties = board.count_empties();
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches a working copy of `board` under `mode`.
    pub fn solve(&mut self, board: &Board, mode: SearchMode) -> SolveOutcome {
        self.init(board);
        let mut log = SolutionLog::new(mode);
        if !self.state.is_contradictory() {
            let mut work = *board;
            self.search(&mut work, self.empties, &mut log);
        }
        log.into_outcome(self.stats)
    }

    /// One recursion step. Returns `true` when the search should
    /// unwind all pending frames.
    fn search(&mut self, work: &mut Board, empties: usize, log: &mut SolutionLog) -> bool {
        if empties == 0 {
            // Every originally-empty cell on the current path has been
            // filled; a solved state must never read as infeasible.
            return log.record(work);
        }

        let (min_count, constraint) = min_pos_u16(self.state.counter_words());
        // An empty cell keeps its cell constraint enabled, so with
        // empties > 0 the minimum always comes from an enabled word.
        debug_assert!(min_count < 0x100);
        if min_count == 0 {
            self.stats.failed_returns += 1;
            return false;
        }
        if min_count == 1 {
            self.stats.unique_candidates += 1;
        } else {
            self.stats.guesses += 1;
        }

        let (family, local) = decode_constraint(constraint);
        match family {
            Family::Cell => {
                let pos = local;
                for digit in Bits(self.state.candidates_at(pos) as u32) {
                    if self.descend(work, empties, pos, digit as usize, log) {
                        return true;
                    }
                }
            }
            Family::RowDigit => {
                let digit = local / 9;
                let row = local % 9;
                for col in Bits(self.state.row_positions(digit, row) as u32) {
                    let pos = row * 9 + col as usize;
                    if self.descend(work, empties, pos, digit, log) {
                        return true;
                    }
                }
            }
            Family::ColDigit => {
                let digit = local / 9;
                let col = local % 9;
                for row in Bits(self.state.col_positions(digit, col) as u32) {
                    let pos = row as usize * 9 + col;
                    if self.descend(work, empties, pos, digit, log) {
                        return true;
                    }
                }
            }
            Family::BoxDigit => {
                let digit = local / 9;
                let box_idx = local % 9;
                for cell_in_box in Bits(self.state.box_positions(digit, box_idx) as u32) {
                    let pos = BOX_INFO[box_idx * 9 + cell_in_box as usize].pos as usize;
                    if self.descend(work, empties, pos, digit, log) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Places one alternative, recurses, and restores the state.
    #[inline]
    fn descend(
        &mut self,
        work: &mut Board,
        empties: usize,
        pos: usize,
        digit: usize,
        log: &mut SolutionLog,
    ) -> bool {
        let entry = self.state.assign(pos, digit);
        work.cells[pos] = digit as u8 + 1;
        let stop = self.search(work, empties - 1, log);
        self.state.undo(&entry);
        stop
    }
}

impl Default for LiteralSolver {
    fn default() -> Self {
        LiteralSolver::new()
    }
}
