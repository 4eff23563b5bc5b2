use std::fmt::{Debug, Display};

use log::trace;

use crate::core::utils::{compact_pos, in_direction, is_valid_coord, unpack_pos};

#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    /** who is moving, where it's moving */
    QuietMove(Piece, u8),
    /** who is capturing, whom is being captured */
    Capture(Piece, Piece),
}

impl Move {
    pub fn piece(&self) -> &Piece {
        match self {
            Move::QuietMove(piece, _) => piece,
            Move::Capture(piece, _) => piece,
        }
    }

    pub fn end_position(&self) -> u8 {
        match self {
            Move::QuietMove(_, pos) => *pos,
            Move::Capture(_, target) => target.position() as u8,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (from_rank, from_file): (u8, u8) = unpack_pos(self.piece().position() as u8);
        let (to_rank, to_file): (u8, u8) = unpack_pos(self.end_position());
        match self {
            Move::QuietMove(piece, _) => write!(
                f,
                "{piece} ({from_rank},{from_file}) - ({to_rank},{to_file})"
            ),
            Move::Capture(piece, target) => write!(
                f,
                "{piece} ({from_rank},{from_file}) x {target} ({to_rank},{to_file})"
            ),
        }
    }
}

/** Variation of 0x88 board */
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    arr: [u8; 128],
}

impl Board {
    #[rustfmt::skip]
    pub fn new() -> Board {
        Board {
            arr: [
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            ]
        }
    }

    pub fn inside(&self) -> &[u8; 128] {
        &self.arr
    }

    pub fn get(&self, rank: u8, file: u8) -> Piece {
        debug_assert!(rank < 8 && file < 8, "Square ({rank},{file}) is off the board!");
        let position = compact_pos(rank, file);
        Piece::from_code(self.arr[position as usize], position)
    }

    /** Overwrite the occupant of a square; `0x00` clears it. */
    pub fn set(&mut self, rank: u8, file: u8, code: u8) {
        debug_assert!(rank < 8 && file < 8, "Square ({rank},{file}) is off the board!");
        self.arr[compact_pos(rank, file) as usize] = code;
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        ITER_INDEX.iter().map(|&pos| self.arr[pos])
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        ITER_INDEX
            .iter()
            .map(|&pos| Piece::from_code(self.arr[pos], pos as u8))
    }

    /** Execute ***valid*** move. */
    pub fn execute(&mut self, _move: Move) {
        trace!("Executing {_move}");
        use Move::*;
        match _move {
            QuietMove(piece, move_to) => {
                assert!(
                    self.arr[move_to as usize] == 0x00,
                    "Trying to move in busy place!"
                );
                self.arr[piece.position()] = 0x00;
                self.arr[move_to as usize] = piece.code;
            }
            Capture(piece, target) => {
                assert!(
                    piece.color() != target.color(),
                    "That's a bug! Piece captured teammate!"
                );
                self.arr[piece.position()] = 0x00;
                self.arr[target.position()] = piece.code;
            }
        }
    }

    /** Every square `piece` may move to on this board, ignoring king safety. */
    pub fn possible_moves(&self, piece: &Piece) -> Vec<Move> {
        let mut moves = Vec::with_capacity(27);
        match piece.type_() {
            PieceType::Pawn => {
                let step: u8 = match piece.color() {
                    Color::Black => 0x10,
                    Color::White => 0xf0,
                };
                // push
                let front_pos = piece.position.wrapping_add(step);
                if is_valid_coord(front_pos) && self.arr[front_pos as usize] == 0x00 {
                    moves.push(Move::QuietMove(piece.clone(), front_pos));
                }
                // capture
                for side in [0x01, 0xff] {
                    let pos = front_pos.wrapping_add(side);
                    if !is_valid_coord(pos) {
                        continue;
                    }
                    let cell = self.arr[pos as usize];
                    if cell != 0x00 && Color::from_byte(cell) != piece.color() {
                        moves.push(Move::Capture(piece.clone(), Piece::from_code(cell, pos)));
                    }
                }
            }
            PieceType::Knight | PieceType::King => {
                let offsets = match piece.type_() {
                    PieceType::Knight => KNIGHT_MOVES,
                    _ => KING_MOVES,
                };
                for offset in offsets {
                    let pos = piece.position.wrapping_add(*offset);
                    if !is_valid_coord(pos) {
                        continue;
                    }
                    let cell = self.arr[pos as usize];
                    if cell == 0x00 {
                        moves.push(Move::QuietMove(piece.clone(), pos));
                    } else if Color::from_byte(cell) != piece.color() {
                        moves.push(Move::Capture(piece.clone(), Piece::from_code(cell, pos)));
                    }
                }
            }
            // Sliding pieces
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                let directions = match piece.type_() {
                    PieceType::Bishop => BISHOP_DIR,
                    PieceType::Rook => ROOK_DIR,
                    _ => QUEEN_DIR,
                };
                for dir in directions {
                    for pos in in_direction(piece.position, *dir) {
                        let cell = self.arr[pos as usize];
                        if cell == 0x00 {
                            moves.push(Move::QuietMove(piece.clone(), pos));
                            continue;
                        }
                        if Color::from_byte(cell) != piece.color() {
                            moves.push(Move::Capture(piece.clone(), Piece::from_code(cell, pos)));
                        }
                        break;
                    }
                }
            }
            // Empty and malformed cells move nowhere
            PieceType::EmptySquare | PieceType::Invalid => (),
        }
        moves
    }
}

impl Default for Board {
    #[rustfmt::skip]
    fn default() -> Self {
        Board {
            arr: [
                0x04, 0x02, 0x03, 0x05, 0x06, 0x03, 0x02, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                0x84, 0x82, 0x83, 0x85, 0x86, 0x83, 0x82, 0x84, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            ]
        }
    }
}

/** Tables directions for pieces */
const BISHOP_DIR: &[u8] = &[0x11, 0x0f, 0xef, 0xf1];
const ROOK_DIR: &[u8] = &[0x10, 0xff, 0xf0, 0x01];
const QUEEN_DIR: &[u8] = &[0x11, 0x0f, 0xef, 0xf1, 0x10, 0xff, 0xf0, 0x01];

/** Possible moves for pieces */
const KING_MOVES: &[u8] = QUEEN_DIR;
const KNIGHT_MOVES: &[u8] = &[0x12, 0x21, 0x1f, 0x0e, 0xee, 0xdf, 0xe1, 0xf2];

/** Valid cells of the 0x88 array in rank-major order */
#[rustfmt::skip]
const ITER_INDEX: [usize; 64] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17,
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27,
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
    0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57,
    0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
    0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77,
];

/** Bits structure of piece code
 * Bit 7 -- Color of the piece
 * - 1 -- White
 * - 0 -- Black
 * Bits 6-3 -- Not used
 * Bits 2-0 Piece type
 * - 1 -- Pawn
 * - 2 -- Knight
 * - 3 -- Bishop
 * - 4 -- Rook
 * - 5 -- Queen
 * - 6 -- King
 * - 7 -- Not used
 * - 0 -- Empty Square */
#[derive(Clone, PartialEq)]
pub struct Piece {
    code: u8,
    position: u8,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color, position: u8) -> Piece {
        Piece {
            code: piece_type as u8 | color as u8,
            position,
        }
    }

    pub fn from_code(code: u8, position: u8) -> Piece {
        Piece { code, position }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn color(&self) -> Color {
        Color::from_byte(self.code)
    }

    pub fn type_(&self) -> PieceType {
        PieceType::from_byte(self.code)
    }

    pub fn position(&self) -> usize {
        self.position as usize
    }

    /** True for a real piece of `color`; false for empty cells. */
    pub fn is_ally(&self, color: Color) -> bool {
        self.type_().is_valid() && self.color() == color
    }

    /** True for a real piece of the other color; false for empty cells. */
    pub fn is_enemy(&self, color: Color) -> bool {
        self.type_().is_valid() && self.color() != color
    }

    pub fn glyph(&self) -> Option<&'static str> {
        use Color::*;
        use PieceType::*;
        match (self.color(), self.type_()) {
            (White, Pawn) => Some("\u{2659}"),
            (White, Knight) => Some("\u{2658}"),
            (White, Bishop) => Some("\u{2657}"),
            (White, Rook) => Some("\u{2656}"),
            (White, Queen) => Some("\u{2655}"),
            (White, King) => Some("\u{2654}"),
            (Black, Pawn) => Some("\u{265F}"),
            (Black, Knight) => Some("\u{265E}"),
            (Black, Bishop) => Some("\u{265D}"),
            (Black, Rook) => Some("\u{265C}"),
            (Black, Queen) => Some("\u{265B}"),
            (Black, King) => Some("\u{265A}"),
            (_, Invalid | EmptySquare) => None,
        }
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece")
            .field("code", &self.code)
            .field("position", &self.position)
            .field("color", &self.color())
            .field("type", &self.type_())
            .finish()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.glyph().unwrap_or("."))
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum Color {
    Black = 0x00,
    #[default]
    White = 0x80,
}

impl Color {
    #[inline]
    fn from_byte(byte: u8) -> Color {
        if byte & 0x80 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::from_byte(value)
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> Self {
        value as u8
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PieceType {
    Pawn = 0x01,
    Knight = 0x02,
    Bishop = 0x03,
    Rook = 0x04,
    Queen = 0x05,
    King = 0x06,
    Invalid = 0x07,
    EmptySquare = 0x00,
}

impl PieceType {
    #[inline]
    fn from_byte(byte: u8) -> PieceType {
        use PieceType::*;
        match byte & 0x07 {
            0x01 => Pawn,
            0x02 => Knight,
            0x03 => Bishop,
            0x04 => Rook,
            0x05 => Queen,
            0x06 => King,
            0x07 => Invalid,
            _ => EmptySquare,
        }
    }

    fn is_valid(&self) -> bool {
        matches!(
            self,
            Self::Pawn | Self::Knight | Self::Bishop | Self::Rook | Self::Queen | Self::King
        )
    }
}

impl From<u8> for PieceType {
    fn from(value: u8) -> Self {
        PieceType::from_byte(value)
    }
}

impl From<PieceType> for u8 {
    fn from(value: PieceType) -> Self {
        value as u8
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
            PieceType::Invalid => "Invalid",
            PieceType::EmptySquare => "Empty",
        })
    }
}
