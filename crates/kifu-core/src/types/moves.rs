//! 指し手の記録（Move）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PieceKind, Square};

/// 棋譜に積まれる指し手。積んだ後は変更しない。
///
/// `from` は打つ手のとき None。「同」は記録せず、KIF 生成時に直前の手から判断する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub is_drop: bool,
    pub kind: PieceKind,
    pub from: Option<Square>,
    pub to: Square,
    pub promote: bool,
}

impl Move {
    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Self {
        Move {
            is_drop: true,
            kind,
            from: None,
            to,
            promote: false,
        }
    }

    #[inline]
    pub const fn normal(kind: PieceKind, from: Square, to: Square, promote: bool) -> Self {
        Move {
            is_drop: false,
            kind,
            from: Some(from),
            to,
            promote,
        }
    }
}

/// ログ用の簡易表記（例: `G*22`, `P77-76`, `R55-54+`）
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) if !self.is_drop => write!(f, "{}{}-{}", self.kind, from, self.to)?,
            _ => write!(f, "{}*{}", self.kind, self.to)?,
        }
        if self.promote {
            write!(f, "+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sq = Square::new;
        assert_eq!(Move::drop(PieceKind::Gold, sq(2, 2)).to_string(), "G*22");
        assert_eq!(Move::normal(PieceKind::Pawn, sq(7, 7), sq(7, 6), false).to_string(), "P77-76");
        assert_eq!(Move::normal(PieceKind::Rook, sq(5, 5), sq(5, 4), true).to_string(), "R55-54+");
    }
}
