//! Four-cell window scanning: win detection and the per-window threat scores
//! the evaluator sums over the board.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Number of cells in a winning line.
pub const WINDOW: usize = 4;

// (row step, col step): right, down, down-right, up-right. Together these
// cover every horizontal, vertical, and diagonal window exactly once.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

// Window weights. The defensive penalty is intentionally smaller in magnitude
// than the offensive three-in-a-row bonus.
const FOUR: i64 = 100;
const OPEN_THREE: i64 = 5;
const OPEN_TWO: i64 = 2;
const OPPONENT_OPEN_THREE: i64 = -4;

/// Iterate over every four-cell window on the board.
pub fn windows(board: &Board) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
    DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
        (0..ROWS as i32).flat_map(move |row| {
            (0..COLS as i32).filter_map(move |col| window_at(board, row, col, dr, dc))
        })
    })
}

fn window_at(board: &Board, row: i32, col: i32, dr: i32, dc: i32) -> Option<[Cell; WINDOW]> {
    let last = WINDOW as i32 - 1;
    let end_row = row + dr * last;
    let end_col = col + dc * last;
    if !(0..ROWS as i32).contains(&end_row) || !(0..COLS as i32).contains(&end_col) {
        return None;
    }

    let mut cells = [Cell::Empty; WINDOW];
    for (i, cell) in cells.iter_mut().enumerate() {
        let step = i as i32;
        *cell = board.get((row + dr * step) as usize, (col + dc * step) as usize);
    }
    Some(cells)
}

/// True if `player` occupies all four cells of any window.
pub fn has_four(board: &Board, player: Player) -> bool {
    let own = player.to_cell();
    windows(board).any(|window| window.iter().all(|&cell| cell == own))
}

/// Heuristic value of a single window from `player`'s perspective.
pub fn score_window(window: &[Cell; WINDOW], player: Player) -> i64 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        if cell == own_cell {
            own += 1;
        } else if cell == opp_cell {
            opp += 1;
        } else {
            empty += 1;
        }
    }

    let mut score = 0;
    if own == 4 {
        score += FOUR;
    } else if own == 3 && empty == 1 {
        score += OPEN_THREE;
    } else if own == 2 && empty == 2 {
        score += OPEN_TWO;
    }
    if opp == 3 && empty == 1 {
        score += OPPONENT_OPEN_THREE;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Cell = Cell::Red;
    const Y: Cell = Cell::Yellow;
    const E: Cell = Cell::Empty;

    #[test]
    fn test_window_count_on_6x7() {
        // 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(windows(&Board::new()).count(), 69);
    }

    #[test]
    fn test_has_four_horizontal() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, R).unwrap();
        }
        assert!(has_four(&board, Player::Red));
        assert!(!has_four(&board, Player::Yellow));
    }

    #[test]
    fn test_has_four_vertical() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Y).unwrap();
        }
        assert!(has_four(&board, Player::Yellow));
        assert!(!has_four(&board, Player::Red));
    }

    #[test]
    fn test_has_four_diagonal_up() {
        let mut board = Board::new();
        // Staircase rising to the right, red on top of each step
        board.drop_piece(0, R).unwrap();

        board.drop_piece(1, Y).unwrap();
        board.drop_piece(1, R).unwrap();

        board.drop_piece(2, Y).unwrap();
        board.drop_piece(2, Y).unwrap();
        board.drop_piece(2, R).unwrap();

        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, R).unwrap();

        assert!(has_four(&board, Player::Red));
    }

    #[test]
    fn test_has_four_diagonal_down() {
        let mut board = Board::new();
        // Staircase rising to the left
        board.drop_piece(6, R).unwrap();

        board.drop_piece(5, Y).unwrap();
        board.drop_piece(5, R).unwrap();

        board.drop_piece(4, Y).unwrap();
        board.drop_piece(4, Y).unwrap();
        board.drop_piece(4, R).unwrap();

        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, R).unwrap();

        assert!(has_four(&board, Player::Red));
    }

    #[test]
    fn test_no_four_with_gap() {
        let mut board = Board::new();
        // X X _ X at the bottom row
        board.drop_piece(0, R).unwrap();
        board.drop_piece(1, R).unwrap();
        board.drop_piece(3, R).unwrap();
        assert!(!has_four(&board, Player::Red));
    }

    #[test]
    fn test_no_four_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, R).unwrap();
        }
        assert!(!has_four(&board, Player::Red));
    }

    #[test]
    fn test_score_window_four_own() {
        assert_eq!(score_window(&[R, R, R, R], Player::Red), 100);
    }

    #[test]
    fn test_score_window_open_three() {
        assert_eq!(score_window(&[R, R, R, E], Player::Red), 5);
        assert_eq!(score_window(&[R, E, R, R], Player::Red), 5);
    }

    #[test]
    fn test_score_window_open_two() {
        assert_eq!(score_window(&[R, R, E, E], Player::Red), 2);
    }

    #[test]
    fn test_score_window_opponent_threat() {
        assert_eq!(score_window(&[Y, Y, Y, E], Player::Red), -4);
    }

    #[test]
    fn test_score_window_neutral_compositions() {
        assert_eq!(score_window(&[R, Y, E, E], Player::Red), 0);
        assert_eq!(score_window(&[Y, Y, E, E], Player::Red), 0);
        assert_eq!(score_window(&[R, R, R, Y], Player::Red), 0);
        assert_eq!(score_window(&[E, E, E, E], Player::Red), 0);
    }
}
