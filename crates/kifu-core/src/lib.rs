//! # kifu-core
//!
//! 詰将棋作成用の局面モデル、指し手の合法性検査、KIF 棋譜出力。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, PieceKind, Piece, Square, Board, Hands, Move）
//! - `position`: 局面、undo 履歴、最小適用と厳密適用
//! - `shorthand`: 数字入力（7776 / 77761 / 076）の解析
//! - `kif`: KIF テキストの生成
//! - `error`: エラー型
//!

pub mod error;
pub mod kif;
pub mod position;
pub mod shorthand;
pub mod types;

pub use error::{MoveError, MoveResult, ShorthandError};
pub use kif::{KifOptions, generate_kif};
pub use position::{Position, Snapshot};
pub use shorthand::{Shorthand, parse_shorthand};
pub use types::{Board, Color, HAND_ORDER, Hands, Move, Piece, PieceKind, Square};
