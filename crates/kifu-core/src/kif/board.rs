//! 開始局面の盤面図

use super::tables::{piece_kanji, promoted_glyph, rank_kanji};
use crate::types::{Board, Color, Piece, Square};

const FILE_HEADER: &str = "  ９ ８ ７ ６ ５ ４ ３ ２ １";
const FRAME: &str = "+---------------------------+";

fn cell(piece: Option<Piece>) -> String {
    let Some(p) = piece else {
        return " ・".to_string();
    };
    let name = if p.promoted {
        promoted_glyph(p.kind).unwrap_or_else(|| piece_kanji(p.kind))
    } else {
        piece_kanji(p.kind)
    };
    let mark = match p.color {
        Color::Black => ' ',
        Color::White => 'v',
    };
    format!("{mark}{name}")
}

/// 盤面図（9筋→1筋、1段→9段）。末尾に改行は付けない。
pub fn board_diagram(board: &Board) -> String {
    let mut lines = Vec::with_capacity(12);
    lines.push(FILE_HEADER.to_string());
    lines.push(FRAME.to_string());
    for rank in 1..=Square::SIZE {
        let row: String = (1..=Square::SIZE)
            .rev()
            .map(|file| cell(board.get(Square::new(file, rank))))
            .collect();
        lines.push(format!("|{row}|{}", rank_kanji(rank)));
    }
    lines.push(FRAME.to_string());
    lines.join("\n")
}
