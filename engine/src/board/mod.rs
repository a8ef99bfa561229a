mod grid;
mod lines;
mod types;

pub use grid::{Board, CELL_COUNT};
pub use lines::LINES;
pub use types::{GameStatus, Mark};
