//! エラー型

use crate::types::{PieceKind, Square};

/// 指し手の適用に失敗した理由
///
/// 厳密適用（`apply_move_strict`）の各ルールと、最小適用（`apply_move_minimal`）の
/// 構造的な前提条件にそれぞれ1つずつ対応する。
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 盤外の升
    #[error("square {0} is outside the board")]
    OutOfBoard(Square),

    /// 打つ先に駒がある
    #[error("cannot drop onto occupied square {0}")]
    DropOnOccupied(Square),

    /// 持駒にない駒を打とうとした
    #[error("no {0} in hand")]
    NotInHand(PieceKind),

    /// 玉を打とうとした
    #[error("the king cannot be dropped (to {0})")]
    KingDrop(Square),

    /// 二歩
    #[error("two pawns on file {0}: an unpromoted pawn is already there")]
    DoublePawn(u8),

    /// 行き所のない升への打ち
    #[error("cannot drop {kind} on {to}: it would have no further move")]
    DropDeadEnd { kind: PieceKind, to: Square },

    /// 打ちと同時に成ろうとした
    #[error("cannot promote on a drop ({kind} to {to})")]
    DropWithPromotion { kind: PieceKind, to: Square },

    /// 盤上の手なのに移動元がない
    #[error("move to {0} has no origin square")]
    MissingOrigin(Square),

    /// 移動元に駒がない
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Square),

    /// 移動元の駒が手番側のものではない
    #[error("piece at {0} does not belong to the side to move")]
    WrongOwner(Square),

    /// 指定した駒種と移動元の駒が食い違う
    #[error("piece at {from} is {actual}, not {declared}")]
    KindMismatch {
        from: Square,
        declared: PieceKind,
        actual: PieceKind,
    },

    /// 自分の駒を取ろうとした
    #[error("cannot capture own piece at {0}")]
    SelfCapture(Square),

    /// 成れない駒種（金・玉）、または既に成っている駒
    #[error("{kind} at {from} cannot promote")]
    NotPromotable { kind: PieceKind, from: Square },

    /// 移動元・移動先とも敵陣外での成り
    #[error("cannot promote moving {from} to {to}: neither square is in the promotion zone")]
    PromotionOutsideZone { from: Square, to: Square },

    /// 成らないと行き所がなくなる手
    #[error("{kind} must promote when moving to {to}")]
    PromotionRequired { kind: PieceKind, to: Square },
}

/// 指し手適用の結果型
pub type MoveResult<T> = Result<T, MoveError>;

/// 数字入力（7776 / 77761 / 076）の解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShorthandError {
    #[error("numeric input must be 3..5 digits: {0:?}")]
    InvalidFormat(String),

    #[error("3-digit input must start with 0 for drop: {0:?}")]
    DropPrefix(String),

    #[error("square out of range: {0:?}")]
    OutOfRange(String),

    #[error("5th digit must be 0 or 1, got {0:?}")]
    PromoteDigit(char),
}
