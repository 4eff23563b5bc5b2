use crate::core::engine::{Color, Move, PieceType};

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub kind: PieceType,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/** Contract between a match and the UI driving it. */
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, rank: u8, file: u8) -> Option<Cell>;
    fn possible_moves(&self, rank: u8, file: u8) -> Option<Vec<Move>>;
    fn execute_move(&mut self, _move: Move);
    // info
    fn current_player(&self) -> Color;
}
