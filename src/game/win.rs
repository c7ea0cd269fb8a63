//! Four-in-a-row detection around the most recently placed piece.
//!
//! Only the four lines through the last placement are inspected, each
//! clipped to at most 3 slots on either side, so the cost is bounded no
//! matter how large the board is. This relies on the board holding no
//! earlier win: call it right after a placement, never as a general
//! board scanner.

use super::board::{Board, Slot};

const RUN_LENGTH: usize = 4;
const REACH: isize = RUN_LENGTH as isize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right, /
    DiagonalRising,
    /// Top-left to bottom-right, \
    DiagonalFalling,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalRising,
        Direction::DiagonalFalling,
    ];

    /// (column, row) step; rows grow downwards
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalRising => (1, -1),
            Direction::DiagonalFalling => (1, 1),
        }
    }
}

/// Check if the piece at (`column`, `row`) completes four in a row.
///
/// The slot must hold the piece that was just placed. An empty slot never
/// wins.
pub fn is_winning_move(board: &Board, column: usize, row: usize) -> bool {
    let mark = board.get(column, row);
    if mark == Slot::Empty {
        return false;
    }

    Direction::ALL
        .iter()
        .any(|&direction| line_has_run(board, column as isize, row as isize, direction, mark))
}

/// Scan the window of up to 7 slots centred on the placement. Off-board
/// positions are skipped; since the line is straight they can only sit at
/// the ends of the window, so they never join two separate runs.
fn line_has_run(board: &Board, column: isize, row: isize, direction: Direction, mark: Slot) -> bool {
    let (dc, dr) = direction.step();
    let mut run = 0;

    for offset in -REACH..=REACH {
        let Some(slot) = board.slot_at(column + offset * dc, row + offset * dr) else {
            continue;
        };
        if slot == mark {
            run += 1;
            if run >= RUN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn wins(picture: &[&str], column: usize, row: usize) -> bool {
        is_winning_move(&Board::from_rows(picture), column, row)
    }

    #[test]
    fn test_vertical_bottom_left() {
        let picture = [
            ".......",
            ".......",
            "1......",
            "12.....",
            "12.....",
            "12.....",
        ];
        assert!(wins(&picture, 0, 2));
    }

    #[test]
    fn test_vertical_top_right() {
        let picture = [
            "......1",
            "......1",
            "......1",
            ".....21",
            ".....22",
            ".....21",
        ];
        assert!(wins(&picture, 6, 0));
    }

    #[test]
    fn test_horizontal_top_row() {
        let picture = [
            "2222...",
            "1112...",
            "2221...",
            "1112...",
            "22211..",
            "11121..",
        ];
        assert!(wins(&picture, 3, 0));
    }

    #[test]
    fn test_horizontal_middle() {
        let picture = [
            ".......",
            ".......",
            ".......",
            "..1111.",
            ".12221.",
            "221122.",
        ];
        assert!(wins(&picture, 3, 3));
    }

    #[test]
    fn test_horizontal_last_piece_on_left_edge() {
        let picture = [
            ".......",
            ".......",
            ".......",
            ".......",
            "222....",
            "1111...",
        ];
        assert!(wins(&picture, 0, 5));
    }

    #[test]
    fn test_diagonal_rising_middle() {
        let picture = [
            ".......",
            ".....2.",
            "....21.",
            "...211.",
            "..2212.",
            ".111212",
        ];
        assert!(wins(&picture, 4, 2));
    }

    #[test]
    fn test_diagonal_rising_top_right() {
        let picture = [
            "......1",
            ".....12",
            "....111",
            "...1222",
            "...2111",
            "..21222",
        ];
        assert!(wins(&picture, 6, 0));
    }

    #[test]
    fn test_diagonal_falling_top_left() {
        let picture = [
            "1......",
            "11.....",
            "221....",
            "1121...",
            "2212...",
            "1221.2.",
        ];
        assert!(wins(&picture, 0, 0));
    }

    #[test]
    fn test_diagonal_falling_bottom_right() {
        let picture = [
            ".......",
            ".......",
            "...1...",
            "...21..",
            "...221.",
            "..11221",
        ];
        assert!(wins(&picture, 3, 2));
    }

    #[test]
    fn test_diagonal_falling_middle() {
        let picture = [
            ".......",
            "..2....",
            "..12...",
            "..212..",
            "..1122.",
            "..2111.",
        ];
        assert!(wins(&picture, 2, 1));
    }

    #[test]
    fn test_no_win_with_three() {
        let picture = [
            ".......",
            ".......",
            ".......",
            ".......",
            "22.....",
            "111....",
        ];
        assert!(!wins(&picture, 2, 5));
    }

    #[test]
    fn test_gap_breaks_run() {
        let picture = [
            ".......",
            ".......",
            ".......",
            ".......",
            "22...2.",
            "11.1.11",
        ];
        assert!(!wins(&picture, 1, 5));
    }

    #[test]
    fn test_run_does_not_wrap_around_edge() {
        let picture = [
            ".......",
            ".......",
            ".......",
            ".......",
            "2.....2",
            "11...11",
        ];
        assert!(!wins(&picture, 6, 5));
    }

    #[test]
    fn test_other_players_run_does_not_count() {
        let picture = [
            "1......",
            "2......",
            "1......",
            "1......",
            "1......",
            "2......",
        ];
        // Three 1s under the top piece, capped by a 2 at the bottom
        assert!(!wins(&picture, 0, 0));
        assert!(!wins(&picture, 0, 1));
    }

    #[test]
    fn test_vertical_three_is_not_a_win() {
        let picture = [
            ".......",
            ".......",
            ".......",
            "2......",
            "2......",
            "2......",
        ];
        assert!(!wins(&picture, 0, 3));
    }

    #[test]
    fn test_empty_slot_never_wins() {
        let board = Board::default();
        assert!(!is_winning_move(&board, 3, 5));
    }

    #[test]
    fn test_win_on_larger_board() {
        let mut board = Board::new(12, 10).unwrap();
        for column in 7..11 {
            board = board.apply_move(column, Player::Two).unwrap().0;
        }
        assert!(is_winning_move(&board, 10, 9));
        assert!(is_winning_move(&board, 8, 9));
        assert!(!is_winning_move(&board, 11, 9));
    }
}
