//! 基本型

mod board;
mod color;
mod hand;
mod moves;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use hand::Hands;
pub use moves::Move;
pub use piece::{HAND_ORDER, Piece, PieceKind};
pub use square::Square;
