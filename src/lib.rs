pub mod core;

// module re-exports
pub use self::core::definitions::{Cell, Figure, MatchInterface};
pub use self::core::engine::{Board, Color, Move, Piece, PieceType};
pub use self::core::game::{ui_board, Game};
