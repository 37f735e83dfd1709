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

use fastdoku::{Board, InvalidBoard};

const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn parse_and_format_round_trip() {
    let board: Board = PUZZLE.parse().unwrap();
    assert_eq!(board.to_string(), PUZZLE);
}

#[test]
fn zero_and_dot_both_mean_empty() {
    let dotted: Board = PUZZLE.parse().unwrap();
    let zeroed: Board = PUZZLE.replace('.', "0").parse().unwrap();
    assert_eq!(dotted, zeroed);
}

#[test]
fn wrong_length_is_rejected() {
    let err = "123".parse::<Board>().unwrap_err();
    assert_eq!(err, InvalidBoard::Length(3));

    let long = ".".repeat(82);
    assert_eq!(long.parse::<Board>().unwrap_err(), InvalidBoard::Length(82));
}

#[test]
fn out_of_range_characters_are_rejected() {
    let mut text = ".".repeat(81);
    text.replace_range(40..41, "x");
    assert_eq!(
        text.parse::<Board>().unwrap_err(),
        InvalidBoard::Character {
            index: 40,
            found: 'x'
        }
    );
}

#[test]
fn count_empties_counts_unfilled_cells() {
    assert_eq!(Board::empty().count_empties(), 81);
    let board: Board = PUZZLE.parse().unwrap();
    assert_eq!(board.count_empties(), 81 - 30);
}

#[test]
fn pretty_renders_box_separators() {
    let board: Board = PUZZLE.parse().unwrap();
    let pretty = board.pretty();
    assert_eq!(pretty.lines().count(), 11);
    assert!(pretty.contains("------+-------+------"));
    assert!(pretty.starts_with("5 3 . | . 7 . | . . ."));
}
