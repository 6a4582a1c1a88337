//! 平手初期配置

use super::Position;
use crate::types::{Color, Piece, PieceKind, Square};

/// 1段目（後手）/9段目（先手）の並び。9筋から1筋へ 香桂銀金玉金銀桂香。
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

impl Position {
    /// 平手の初期局面（先手番、持駒なし）
    pub fn hirate() -> Self {
        let mut pos = Position::empty();
        let mut set = |color, kind, file, rank| {
            pos.set_piece_at(Square::new(file, rank), Some(Piece::new(color, kind)));
        };

        for (i, &kind) in BACK_RANK.iter().enumerate() {
            let file = 9 - i as u8;
            set(Color::Black, kind, file, 9);
            set(Color::White, kind, file, 1);
        }

        // 飛角: 2八飛・8八角 / 8二飛・2二角
        set(Color::Black, PieceKind::Rook, 2, 8);
        set(Color::Black, PieceKind::Bishop, 8, 8);
        set(Color::White, PieceKind::Rook, 8, 2);
        set(Color::White, PieceKind::Bishop, 2, 2);

        for file in 1..=9 {
            set(Color::Black, PieceKind::Pawn, file, 7);
            set(Color::White, PieceKind::Pawn, file, 3);
        }

        pos
    }
}
