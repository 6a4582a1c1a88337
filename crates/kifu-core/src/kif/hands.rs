//! 持駒の表記と後手持駒の推定

use super::tables::{count_kanji, piece_kanji};
use crate::types::{Board, Color, HAND_ORDER, Hands, PieceKind};

/// 駒種ごとの枚数（`PieceKind::index` 順）
pub type KindCounts = [u32; PieceKind::NUM];

/// 手番側の持駒を枚数表にする
pub fn hand_counts(hands: &Hands, color: Color) -> KindCounts {
    let mut counts = [0; PieceKind::NUM];
    for kind in PieceKind::ALL {
        counts[kind.index()] = u32::from(hands.count(color, kind));
    }
    counts
}

/// 持駒の行（"飛　角二　歩十八　"）
///
/// 飛角金銀桂香歩の順で 0 枚は飛ばし、全角スペースで区切って末尾にも1つ付ける。
/// 1枚も無ければ空文字。
pub fn hand_summary(counts: &KindCounts) -> String {
    let parts: Vec<String> = HAND_ORDER
        .iter()
        .filter(|k| counts[k.index()] > 0)
        .map(|&k| format!("{}{}", piece_kanji(k), count_kanji(counts[k.index()])))
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    let mut out = parts.join("　");
    out.push('　');
    out
}

/// 後手の持駒を消去法で求める
///
/// 平手一組から、開始局面の盤上の駒（先後・成不成を問わず元の駒種で数える）と
/// 先手の持駒を引いた残り。玉は数えない。
pub fn second_player_remaining(board: &Board, first_hand: &KindCounts) -> KindCounts {
    let mut used = *first_hand;
    for (_, piece) in board.pieces() {
        used[piece.kind.index()] += 1;
    }

    let mut rem = [0; PieceKind::NUM];
    for kind in HAND_ORDER {
        let total = u32::from(kind.standard_count());
        let n = used[kind.index()];
        if n > total {
            log::warn!("{n} {kind} pieces exceed the standard set of {total}; gote hand is inferred as 0");
        }
        rem[kind.index()] = total.saturating_sub(n);
    }
    rem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Square};

    fn counts(pairs: &[(PieceKind, u32)]) -> KindCounts {
        let mut c = [0; PieceKind::NUM];
        for &(k, n) in pairs {
            c[k.index()] = n;
        }
        c
    }

    #[test]
    fn test_hand_summary_empty() {
        assert_eq!(hand_summary(&[0; PieceKind::NUM]), "");
    }

    #[test]
    fn test_hand_summary_order_and_counts() {
        let c = counts(&[
            (PieceKind::Pawn, 18),
            (PieceKind::Rook, 1),
            (PieceKind::Silver, 3),
            (PieceKind::King, 1),
        ]);
        assert_eq!(hand_summary(&c), "飛　銀三　歩十八　");
    }

    #[test]
    fn test_remaining_from_empty_board() {
        let rem = second_player_remaining(&Board::new(), &[0; PieceKind::NUM]);
        assert_eq!(hand_summary(&rem), "飛二　角二　金四　銀四　桂四　香四　歩十八　");
        assert_eq!(rem[PieceKind::King.index()], 0);
    }

    #[test]
    fn test_remaining_counts_board_and_first_hand() {
        let mut board = Board::new();
        board.set(Square::new(5, 1), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::new(5, 3), Some(Piece::promoted(Color::Black, PieceKind::Rook)));
        board.set(Square::new(4, 1), Some(Piece::new(Color::White, PieceKind::Gold)));
        let first = counts(&[(PieceKind::Rook, 1), (PieceKind::Gold, 1)]);

        let rem = second_player_remaining(&board, &first);
        assert_eq!(hand_summary(&rem), "角二　金二　銀四　桂四　香四　歩十八　");
    }

    #[test]
    fn test_remaining_clamps_excess() {
        let mut board = Board::new();
        for rank in 1..=3 {
            board.set(Square::new(1, rank), Some(Piece::new(Color::Black, PieceKind::Rook)));
        }
        let rem = second_player_remaining(&board, &[0; PieceKind::NUM]);
        assert_eq!(rem[PieceKind::Rook.index()], 0);
    }

    #[test]
    fn test_hand_counts() {
        let mut hands = Hands::new();
        hands.set(Color::Black, PieceKind::Gold, 2);
        hands.set(Color::White, PieceKind::Pawn, 1);
        let c = hand_counts(&hands, Color::Black);
        assert_eq!(c[PieceKind::Gold.index()], 2);
        assert_eq!(c[PieceKind::Pawn.index()], 0);
    }
}
