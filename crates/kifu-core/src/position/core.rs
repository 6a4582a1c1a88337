//! Position struct and basic methods

use serde::Serialize;

use crate::types::{Board, Color, Hands, Move, Piece, PieceKind, Square};

/// 局面のスナップショット
///
/// 元の `Position` とは何も共有しない独立したコピー。undo と KIF の開始局面に使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub hands: Hands,
    pub side_to_move: Color,
    pub moves: Vec<Move>,
}

/// 編集・対局中の局面
#[derive(Debug, Clone, Default)]
pub struct Position {
    pub board: Board,
    pub hands: Hands,
    pub side_to_move: Color,
    /// 適用済みの指し手（古い順）
    pub moves: Vec<Move>,

    history: Vec<Snapshot>,
}

impl Position {
    /// 空の局面（先手番）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 盤外の升は None
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// 盤外の升は何もしない
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<Piece>) {
        self.board.set(sq, piece);
    }

    #[inline]
    pub fn hand_count(&self, color: Color, kind: PieceKind) -> u8 {
        self.hands.count(color, kind)
    }

    #[inline]
    pub fn set_hand_count(&mut self, color: Color, kind: PieceKind, n: u8) {
        self.hands.set(color, kind, n);
    }

    #[inline]
    pub fn add_to_hand(&mut self, color: Color, kind: PieceKind) {
        self.hands.add(color, kind);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            hands: self.hands.clone(),
            side_to_move: self.side_to_move,
            moves: self.moves.clone(),
        }
    }

    /// スナップショットの内容に戻す（undo 履歴はそのまま）
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.board = snapshot.board.clone();
        self.hands = snapshot.hands.clone();
        self.side_to_move = snapshot.side_to_move;
        self.moves = snapshot.moves.clone();
    }

    pub fn push_history(&mut self) {
        self.history.push(self.snapshot());
        log::trace!("history pushed (depth={})", self.history.len());
    }

    /// 直前のスナップショットに戻す。履歴が空なら false。
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        self.restore(&last);
        log::trace!("history popped (depth={})", self.history.len());
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 盤・持駒・棋譜を空にして先手番に戻す。undo 履歴は呼び出し側が
    /// `clear_history` で別途消す。
    pub fn clear_all(&mut self) {
        self.board.clear();
        self.hands.clear();
        self.moves.clear();
        self.side_to_move = Color::Black;
    }

    /// 現局面を開始局面として確定し、棋譜と undo 履歴を消して対局を始める。
    pub fn begin_play(&mut self) -> Snapshot {
        let start = self.snapshot();
        self.moves.clear();
        self.history.clear();
        start
    }

    #[inline]
    pub(crate) fn toggle_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }
}
