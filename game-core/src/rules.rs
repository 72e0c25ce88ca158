//! Win and draw detection.

use game_types::{Board, Symbol};

/// Every line that wins a round: three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark owning a completed line, if any.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    })
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::BOARD_SIZE;

    fn board_from(marks: &str) -> Board {
        let mut cells = [None; BOARD_SIZE];
        for (i, ch) in marks.chars().enumerate() {
            cells[i] = match ch {
                'X' => Some(Symbol::X),
                'O' => Some(Symbol::O),
                _ => None,
            };
        }
        Board::from(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for symbol in [Symbol::X, Symbol::O] {
                let mut board = Board::new();
                for cell in line {
                    board.place(cell, symbol);
                }
                assert_eq!(check_winner(&board), Some(symbol), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from("XXO......");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_from("XOXXOOOXX");
        assert_eq!(check_winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from("XXXOOXOXO");
        assert_eq!(check_winner(&board), Some(Symbol::X));
        assert!(!is_draw(&board));
    }
}
