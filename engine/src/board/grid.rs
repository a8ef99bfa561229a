use std::fmt;
use std::str::FromStr;

use super::lines::LINES;
use super::types::{GameStatus, Mark};
use crate::error::EngineError;

pub const CELL_COUNT: usize = 9;

/// 3x3 board in row-major order: 0,1,2 top row, 3,4,5 middle, 6,7,8 bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Parses nine cell characters (`X`, `O`, and `.`, `_` or `-` for empty).
    /// Whitespace and the separators `|`, `/`, `,` are skipped.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let symbols: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '/' | ','))
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoardLength {
                found: symbols.len(),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, &symbol) in symbols.iter().enumerate() {
            cells[index] = Mark::from_char(symbol).ok_or_else(|| EngineError::InvalidCell {
                index,
                value: symbol.to_string(),
            })?;
        }

        Ok(Self { cells })
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Writes `mark` into the cell. Panics if `index` is not in `0..9`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// First completed line in `LINES` order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            let mark = self.cells[a];
            !mark.is_empty() && mark == self.cells[b] && mark == self.cells[c]
        })
    }

    pub fn winner(&self) -> GameStatus {
        if let Some([a, _, _]) = self.winning_line() {
            return GameStatus::won_by(self.cells[a]);
        }

        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Board {
    type Error = EngineError;

    /// Raw cells: 0 is empty, 1 is X, 2 is O.
    fn try_from(raw: [u8; CELL_COUNT]) -> Result<Self, Self::Error> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, &value) in raw.iter().enumerate() {
            cells[index] = Mark::from_raw(value).ok_or_else(|| EngineError::InvalidCell {
                index,
                value: value.to_string(),
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let start = row * 3;
            writeln!(
                f,
                "{} {} {}",
                self.cells[start],
                self.cells[start + 1],
                self.cells[start + 2]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_cells_are_ascending() {
        let board = Board::parse("X.O .X. O..").unwrap();
        assert_eq!(board.available_cells(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(Board::new().winner(), GameStatus::InProgress);
        assert_eq!(Board::new().available_cells().len(), 9);
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, Mark::O);
            }
            assert_eq!(board.winner(), GameStatus::OWon, "line {:?}", line);
            assert_eq!(board.winning_line(), Some(line));
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::parse("XOX XOO OXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), GameStatus::Draw);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::parse("XXX OOX XOO").unwrap();
        assert_eq!(board.winner(), GameStatus::XWon);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable in play: both the top row and the bottom row are complete.
        let board = Board::parse("OOO X.X XXX").unwrap();
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
        assert_eq!(board.winner(), GameStatus::OWon);
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = Board::parse("XX. .O. ..O").unwrap();
        assert_eq!(board.winner(), GameStatus::InProgress);
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "x|o|.\n-|x|_\n.,.,o".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        let result = Board::parse("XX? .O. ..O");
        assert_eq!(
            result,
            Err(EngineError::InvalidCell {
                index: 2,
                value: "?".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Board::parse("XO."),
            Err(EngineError::InvalidBoardLength { found: 3 })
        );
        assert_eq!(Board::parse("........."), Ok(Board::new()));
        assert!(matches!(
            Board::parse(".........."),
            Err(EngineError::InvalidBoardLength { found: 10 })
        ));
    }

    #[test]
    fn test_try_from_raw_rejects_unknown_value() {
        let board = Board::try_from([1, 2, 0, 0, 1, 0, 0, 0, 2]).unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));

        let result = Board::try_from([0, 0, 0, 3, 0, 0, 0, 0, 0]);
        assert!(matches!(result, Err(EngineError::InvalidCell { index: 3, .. })));
    }

    #[test]
    fn test_place_and_clear_restore_board() {
        let original = Board::parse("X.. .O. ...").unwrap();
        let mut board = original;
        board.place(8, Mark::X);
        assert_ne!(board, original);
        board.clear(8);
        assert_eq!(board, original);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::parse("X.O .X. O..").unwrap();
        assert_eq!(board.to_string(), "X . O\n. X .\nO . .\n");
    }
}
