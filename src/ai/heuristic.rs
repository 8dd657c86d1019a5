use crate::game::{lines, Board, Player, COLS, ROWS};

/// Bonus per own piece in the center column.
const CENTER_BONUS: i64 = 3;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: a center-column bonus plus the threat score of every
/// four-cell window. Only the scoring side's center pieces count; the
/// opponent's threats enter through the window scores.
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own = player.to_cell();

        let mut score = 0;
        for row in 0..ROWS {
            if board.get(row, COLS / 2) == own {
                score += CENTER_BONUS;
            }
        }

        score
            + lines::windows(board)
                .map(|window| lines::score_window(&window, player))
                .sum::<i64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn single_center_piece_scores_exactly_the_bonus() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();

        // One piece alone contributes no window score, so the center bonus is
        // the whole evaluation
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 3);
    }

    #[test]
    fn center_beats_edge() {
        let mut center = Board::new();
        center.drop_piece(3, Cell::Red).unwrap();
        let mut edge = Board::new();
        edge.drop_piece(0, Cell::Red).unwrap();

        let center_score = WindowHeuristic.evaluate(&center, Player::Red);
        let edge_score = WindowHeuristic.evaluate(&edge, Player::Red);
        assert!(
            center_score > edge_score,
            "center ({center_score}) should beat edge ({edge_score})"
        );
    }

    #[test]
    fn two_stacked_center_pieces() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        // 2 x center bonus, plus the one vertical window holding both pieces
        // and two empties; no horizontal or diagonal window holds more than
        // one of them
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 2 * 3 + 2);
    }

    #[test]
    fn opponent_center_pieces_do_not_count() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Yellow).unwrap();

        // From Red's view a lone opposing piece is worth nothing either way
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn three_in_a_row_reads_as_a_threat() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        let score = WindowHeuristic.evaluate(&board, Player::Red);
        assert!(score > 5, "open three should score well, got {score}");

        // The same position viewed by the opponent is negative
        let opp = WindowHeuristic.evaluate(&board, Player::Yellow);
        assert!(opp < 0, "facing an open three should be negative, got {opp}");
    }
}
