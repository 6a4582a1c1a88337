//! Move execution and undo functionality
//!
//! ここでは盤・持駒の整合性に必要な検査だけを行う。将棋のルール検査は
//! `legality` 側の厳密適用が受け持つ。

use super::Position;
use crate::error::{MoveError, MoveResult};
use crate::types::{Move, Piece, PieceKind, Square};

impl Position {
    /// `to` に打てる駒種の候補
    ///
    /// 手番側の持駒のうち1枚以上あるもの。玉と、二歩になる歩は除く（簡易判定）。
    /// `to` が埋まっていれば空。
    pub fn drop_candidates(&self, to: Square) -> Vec<PieceKind> {
        if !to.is_valid() || self.piece_at(to).is_some() {
            return Vec::new();
        }
        let side = self.side_to_move;
        self.hands
            .iter(side)
            .map(|(kind, _)| kind)
            .filter(|&kind| kind != PieceKind::King)
            .filter(|&kind| {
                kind != PieceKind::Pawn || !self.board.has_unpromoted_pawn_on_file(side, to.file)
            })
            .collect()
    }

    /// 最小適用
    ///
    /// 検査は「持駒がある」「移動元に手番側の駒がある」「成れる駒種」と盤外チェックのみ。
    /// 成功したときだけ undo 履歴を1つ積み、駒を動かして棋譜に追加し、手番を入れ替える。
    pub fn apply_move_minimal(
        &mut self,
        kind: PieceKind,
        from: Option<Square>,
        to: Square,
        promote: bool,
        is_drop: bool,
    ) -> MoveResult<()> {
        if !to.is_valid() {
            return Err(MoveError::OutOfBoard(to));
        }
        let side = self.side_to_move;

        if is_drop {
            if self.hands.count(side, kind) == 0 {
                return Err(MoveError::NotInHand(kind));
            }

            self.push_history();
            self.hands.take(side, kind);
            self.set_piece_at(to, Some(Piece::new(side, kind)));
            self.record(Move::drop(kind, to));
            return Ok(());
        }

        let from = from.ok_or(MoveError::MissingOrigin(to))?;
        if !from.is_valid() {
            return Err(MoveError::OutOfBoard(from));
        }
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtOrigin(from))?;
        if piece.color != side {
            return Err(MoveError::WrongOwner(from));
        }
        if promote && !piece.kind.can_promote() {
            return Err(MoveError::NotPromotable {
                kind: piece.kind,
                from,
            });
        }

        self.push_history();

        // 取った駒は成りを外して持駒へ
        if let Some(captured) = self.piece_at(to).filter(|p| p.color != side) {
            self.hands.add(side, captured.kind);
        }

        self.set_piece_at(from, None);
        let moved = if promote { piece.promote() } else { piece };
        self.set_piece_at(to, Some(moved));
        self.record(Move::normal(kind, from, to, promote));
        Ok(())
    }

    fn record(&mut self, mv: Move) {
        log::debug!("{:?} plays {} (ply {})", self.side_to_move, mv, self.moves.len() + 1);
        self.moves.push(mv);
        self.toggle_side();
    }
}
