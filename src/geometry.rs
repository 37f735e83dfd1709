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

//! Precomputed, immutable board geometry: per-cell coordinates, the
//! inverse box map, and the 20-peer neighbour list of every cell.

/// Coordinates of one cell in every indexing scheme the solvers use.
#[derive(Clone, Copy, Debug)]
pub struct CellInfo {
    pub row: u8,
    pub col: u8,
    pub box_idx: u8,
    pub cell_in_box: u8,
}

/// Inverse of [`CellInfo`]: position of `box * 9 + cell_in_box`.
#[derive(Clone, Copy, Debug)]
pub struct BoxCell {
    pub pos: u8,
    pub row: u8,
    pub col: u8,
}

lazy_static::lazy_static! {
    /// `CELL_INFO[pos]` for every cell of the grid.
    pub static ref CELL_INFO: [CellInfo; 81] = {
        let mut info = [CellInfo { row: 0, col: 0, box_idx: 0, cell_in_box: 0 }; 81];
        for (pos, cell) in info.iter_mut().enumerate() {
            let row = pos / 9;
            let col = pos % 9;
            cell.row = row as u8;
            cell.col = col as u8;
            cell.box_idx = ((row / 3) * 3 + col / 3) as u8;
            cell.cell_in_box = ((row % 3) * 3 + col % 3) as u8;
        }
        info
    };

    /// `BOX_INFO[box_idx * 9 + cell_in_box]`, the inverse of `CELL_INFO`.
    pub static ref BOX_INFO: [BoxCell; 81] = {
        let mut info = [BoxCell { pos: 0, row: 0, col: 0 }; 81];
        for (index, cell) in info.iter_mut().enumerate() {
            let box_idx = index / 9;
            let cell_in_box = index % 9;
            let row = (box_idx / 3) * 3 + cell_in_box / 3;
            let col = (box_idx % 3) * 3 + cell_in_box % 3;
            cell.pos = (row * 9 + col) as u8;
            cell.row = row as u8;
            cell.col = col as u8;
        }
        info
    };

    /// The 20 distinct peers of every cell: the 8 other cells of its
    /// row, the 8 of its column, then the 4 box cells sharing neither.
    pub static ref NEIGHBOURS: [[u8; 20]; 81] = {
        let mut map = [[0u8; 20]; 81];
        for (pos, peers) in map.iter_mut().enumerate() {
            let row = pos / 9;
            let col = pos % 9;
            let mut count = 0;
            for c in 0..9 {
                if c != col {
                    peers[count] = (row * 9 + c) as u8;
                    count += 1;
                }
            }
            for r in 0..9 {
                if r != row {
                    peers[count] = (r * 9 + col) as u8;
                    count += 1;
                }
            }
            let box_row = (row / 3) * 3;
            let box_col = (col / 3) * 3;
            for r in box_row..box_row + 3 {
                for c in box_col..box_col + 3 {
                    if r != row && c != col {
                        peers[count] = (r * 9 + c) as u8;
                        count += 1;
                    }
                }
            }
            debug_assert_eq!(count, 20);
        }
        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_and_box_info_are_inverse() {
        for pos in 0..81 {
            let info = CELL_INFO[pos];
            let back = BOX_INFO[info.box_idx as usize * 9 + info.cell_in_box as usize];
            assert_eq!(back.pos as usize, pos);
            assert_eq!(back.row, info.row);
            assert_eq!(back.col, info.col);
        }
    }

    #[test]
    fn neighbours_are_distinct_peers() {
        for pos in 0..81 {
            let info = CELL_INFO[pos];
            let peers = NEIGHBOURS[pos];
            let mut seen = [false; 81];
            for &peer in peers.iter() {
                let peer = peer as usize;
                assert_ne!(peer, pos);
                assert!(!seen[peer], "duplicate peer {} of cell {}", peer, pos);
                seen[peer] = true;
                let other = CELL_INFO[peer];
                assert!(
                    other.row == info.row || other.col == info.col || other.box_idx == info.box_idx
                );
            }
        }
    }
}
