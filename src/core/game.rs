use log::debug;

use crate::core::definitions::{Cell, Figure, MatchInterface};
use crate::core::engine::{Board, Color, Move, PieceType};

pub fn ui_board(board: &Board) -> Vec<Vec<Cell>> {
    (0..8)
        .map(|rank| {
            (0..8)
                .map(|file| board.get(rank, file))
                .map(|piece| {
                    if piece.type_() == PieceType::EmptySquare {
                        Cell::Empty
                    } else {
                        Cell::Figure(Figure {
                            kind: piece.type_(),
                            color: piece.color(),
                        })
                    }
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::White)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            current_player: player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Default::default())
    }
}

impl MatchInterface for Game {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        ui_board(&self.board)
    }

    fn cell(&self, rank: u8, file: u8) -> Option<Cell> {
        if rank < 8 && file < 8 {
            let piece = self.board.get(rank, file);
            Some(if piece.type_() == PieceType::EmptySquare {
                Cell::Empty
            } else {
                Cell::Figure(Figure {
                    kind: piece.type_(),
                    color: piece.color(),
                })
            })
        } else {
            None
        }
    }

    /** Moves of the piece at a square, or `None` when the square is empty
     * or holds a piece of the side not to move. */
    fn possible_moves(&self, rank: u8, file: u8) -> Option<Vec<Move>> {
        let piece = self.board.get(rank, file);
        if !piece.is_ally(self.current_player) {
            return None;
        }
        let moves = self.board.possible_moves(&piece);
        debug!("{} possible moves for {piece} at ({rank},{file})", moves.len());
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    fn execute_move(&mut self, _move: Move) {
        self.board.execute(_move);
        self.current_player = self.current_player.opposite();
    }

    fn current_player(&self) -> Color {
        self.current_player
    }
}
