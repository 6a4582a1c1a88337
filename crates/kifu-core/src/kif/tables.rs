//! KIF の文字テーブル

use crate::types::PieceKind;

/// 全角数字（筋）。添字 0 は未使用。
const FW_DIGITS: [&str; 10] = ["０", "１", "２", "３", "４", "５", "６", "７", "８", "９"];

/// 漢数字（段）。添字 0 は未使用。
const RANK_KANJI: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 持駒枚数の漢数字（1 は空、2〜18）
const COUNT_KANJI: [&str; 19] = [
    "", "", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二", "十三", "十四",
    "十五", "十六", "十七", "十八",
];

/// 盤外の筋は空文字
pub(crate) fn file_digit(file: u8) -> &'static str {
    match file {
        1..=9 => FW_DIGITS[file as usize],
        _ => "",
    }
}

/// 盤外の段は空文字
pub(crate) fn rank_kanji(rank: u8) -> &'static str {
    RANK_KANJI.get(rank as usize).copied().unwrap_or("")
}

/// 駒の漢字名（成っていない形）
pub fn piece_kanji(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "歩",
        PieceKind::Lance => "香",
        PieceKind::Knight => "桂",
        PieceKind::Silver => "銀",
        PieceKind::Gold => "金",
        PieceKind::Bishop => "角",
        PieceKind::Rook => "飛",
        PieceKind::King => "玉",
    }
}

/// 盤面図で使う成駒の1文字。金・玉は None。
pub fn promoted_glyph(kind: PieceKind) -> Option<&'static str> {
    match kind {
        PieceKind::Pawn => Some("と"),
        PieceKind::Lance => Some("杏"),
        PieceKind::Knight => Some("圭"),
        PieceKind::Silver => Some("全"),
        PieceKind::Bishop => Some("馬"),
        PieceKind::Rook => Some("竜"),
        PieceKind::Gold | PieceKind::King => None,
    }
}

/// 持駒枚数の表記。1 は空文字、2〜18 は漢数字、それ以外は算用数字。
pub fn count_kanji(n: u32) -> String {
    match COUNT_KANJI.get(n as usize) {
        Some(s) if n >= 1 => (*s).to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_kanji() {
        assert_eq!(count_kanji(1), "");
        assert_eq!(count_kanji(2), "二");
        assert_eq!(count_kanji(10), "十");
        assert_eq!(count_kanji(18), "十八");
        assert_eq!(count_kanji(19), "19");
        assert_eq!(count_kanji(0), "0");
    }

    #[test]
    fn test_out_of_board_coordinates_are_empty() {
        assert_eq!(file_digit(0), "");
        assert_eq!(file_digit(10), "");
        assert_eq!(file_digit(7), "７");
        assert_eq!(rank_kanji(0), "");
        assert_eq!(rank_kanji(255), "");
        assert_eq!(rank_kanji(9), "九");
    }

    #[test]
    fn test_promoted_glyph() {
        assert_eq!(promoted_glyph(PieceKind::Rook), Some("竜"));
        assert_eq!(promoted_glyph(PieceKind::Lance), Some("杏"));
        assert_eq!(promoted_glyph(PieceKind::Gold), None);
        assert_eq!(promoted_glyph(PieceKind::King), None);
    }
}
