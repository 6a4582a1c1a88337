//! 盤面（Board）
//!
//! 9x9 の固定長配列に `Option<Piece>` を値で持つ。`Clone` がそのまま深いコピーになる。

use serde::Serialize;

use super::{Color, Piece, PieceKind, Square};

const N: usize = Square::SIZE as usize;

/// 盤面。`[筋-1][段-1]` で引く。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board([[Option<Piece>; N]; N]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// 駒を返す。盤外の升は常に None。
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !sq.is_valid() {
            return None;
        }
        let (f, r) = sq.index();
        self.0[f][r]
    }

    /// 駒を置く（None で取り除く）。盤外の升は何もしない。
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if !sq.is_valid() {
            return;
        }
        let (f, r) = sq.index();
        self.0[f][r] = piece;
    }

    pub fn clear(&mut self) {
        self.0 = [[None; N]; N];
    }

    /// 盤上の全駒
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    /// `file` 筋に `color` の不成の歩があるか（二歩判定）
    pub fn has_unpromoted_pawn_on_file(&self, color: Color, file: u8) -> bool {
        (1..=Square::SIZE).any(|rank| {
            matches!(
                self.get(Square::new(file, rank)),
                Some(Piece { color: c, kind: PieceKind::Pawn, promoted: false }) if c == color
            )
        })
    }

    /// 駒種ごとの枚数（手番・成不成を問わない）
    pub fn count_kind(&self, kind: PieceKind) -> usize {
        self.pieces().filter(|(_, p)| p.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}
