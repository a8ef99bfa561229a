use tictactoe_engine::{Board, Mark};

/// Grid with cell numbers in empty cells and brackets around a winning line.
pub fn render_board(board: &Board) -> String {
    let winning_line = board.winning_line();
    let mut result = String::new();

    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let symbol = match board.get(index) {
                Some(Mark::Empty) | None => index.to_string(),
                Some(mark) => mark.to_string(),
            };
            let highlighted = winning_line.is_some_and(|line| line.contains(&index));
            if highlighted {
                result.push_str(&format!("[{}]", symbol));
            } else {
                result.push_str(&format!(" {} ", symbol));
            }
            if col < 2 {
                result.push('|');
            }
        }
        result.push('\n');
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_show_index() {
        let rendered = render_board(&Board::new());
        assert_eq!(
            rendered,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \n"
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let board = Board::parse("XXX OO. ...").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("[X]|[X]|[X]\n"), "{}", rendered);
        assert!(rendered.contains(" O | O | 5 "));
    }
}
