//! Strict move validation
//!
//! 厳密適用は状態を変えない検査の列で、全て通ったときだけ最小適用に委ねる。

use super::Position;
use crate::error::{MoveError, MoveResult};
use crate::types::{PieceKind, Square};

impl Position {
    /// 厳密適用
    ///
    /// `from` が None なら打ち、Some なら盤上の手として扱う。
    /// 違反があれば最初に引っかかったルールの `MoveError` を返し、局面も undo 履歴も変えない。
    pub fn apply_move_strict(
        &mut self,
        kind: PieceKind,
        from: Option<Square>,
        to: Square,
        promote: bool,
    ) -> MoveResult<()> {
        if let Err(e) = self.check_move_strict(kind, from, to, promote) {
            log::debug!("rejected {kind} {from:?}->{to} promote={promote}: {e}");
            return Err(e);
        }
        self.apply_move_minimal(kind, from, to, promote, from.is_none())
    }

    /// 厳密適用の検査だけを行う
    pub fn check_move_strict(
        &self,
        kind: PieceKind,
        from: Option<Square>,
        to: Square,
        promote: bool,
    ) -> MoveResult<()> {
        if !to.is_valid() {
            return Err(MoveError::OutOfBoard(to));
        }
        match from {
            None => self.check_drop(kind, to, promote),
            Some(from) if !from.is_valid() => Err(MoveError::OutOfBoard(from)),
            Some(from) => self.check_board_move(kind, from, to, promote),
        }
    }

    fn check_drop(&self, kind: PieceKind, to: Square, promote: bool) -> MoveResult<()> {
        let side = self.side_to_move;

        if self.piece_at(to).is_some() {
            return Err(MoveError::DropOnOccupied(to));
        }
        if self.hand_count(side, kind) == 0 {
            return Err(MoveError::NotInHand(kind));
        }
        if kind == PieceKind::King {
            return Err(MoveError::KingDrop(to));
        }
        if kind == PieceKind::Pawn && self.board.has_unpromoted_pawn_on_file(side, to.file) {
            return Err(MoveError::DoublePawn(to.file));
        }
        if to.relative_rank(side) <= kind.dead_end_ranks() {
            return Err(MoveError::DropDeadEnd { kind, to });
        }
        if promote {
            return Err(MoveError::DropWithPromotion { kind, to });
        }
        Ok(())
    }

    fn check_board_move(
        &self,
        kind: PieceKind,
        from: Square,
        to: Square,
        promote: bool,
    ) -> MoveResult<()> {
        let side = self.side_to_move;

        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtOrigin(from))?;
        if piece.color != side {
            return Err(MoveError::WrongOwner(from));
        }
        if piece.kind != kind {
            return Err(MoveError::KindMismatch {
                from,
                declared: kind,
                actual: piece.kind,
            });
        }

        if self.piece_at(to).is_some_and(|p| p.color == side) {
            return Err(MoveError::SelfCapture(to));
        }

        if promote {
            if !piece.kind.can_promote() || piece.promoted {
                return Err(MoveError::NotPromotable {
                    kind: piece.kind,
                    from,
                });
            }
            if !from.in_promotion_zone(side) && !to.in_promotion_zone(side) {
                return Err(MoveError::PromotionOutsideZone { from, to });
            }
        } else if !piece.promoted && to.relative_rank(side) <= piece.kind.dead_end_ranks() {
            return Err(MoveError::PromotionRequired {
                kind: piece.kind,
                to,
            });
        }

        Ok(())
    }
}
