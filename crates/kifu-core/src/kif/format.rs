//! 指し手行の整形

use std::sync::LazyLock;

use regex::Regex;

use super::tables::{file_digit, piece_kanji, rank_kanji};
use crate::types::{Move, Square};

static RE_SPACE_BEFORE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\(").expect("static regex"));
static RE_SPACE_AFTER_LPAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s+").expect("static regex"));

/// "７六" 形式
pub fn square_to_kif(sq: Square) -> String {
    format!("{}{}", file_digit(sq.file), rank_kanji(sq.rank))
}

/// "(77)" 形式
pub fn square_to_paren(sq: Square) -> String {
    format!("({}{})", sq.file, sq.rank)
}

/// 指手と消費時間の間を半角スペース1つにし、"(" 直後の空白を詰める
pub fn finalize_line_spacing(line: &str) -> String {
    let line = RE_SPACE_BEFORE_PAREN.replace_all(line, " (");
    RE_SPACE_AFTER_LPAREN.replace_all(&line, "(").into_owned()
}

/// 指し手本体（"同" または移動先、駒名、盤上の手なら成と移動元、打ちなら打）
fn move_body(mv: &Move, prev_to: Option<Square>) -> String {
    let mut body = if prev_to == Some(mv.to) {
        "同".to_string()
    } else {
        square_to_kif(mv.to)
    };
    body.push_str(piece_kanji(mv.kind));
    match mv.from {
        Some(from) if !mv.is_drop => {
            if mv.promote {
                body.push('成');
            }
            body.push_str(&square_to_paren(from));
        }
        // 打った駒は成らないので成フラグは表記しない
        _ => body.push('打'),
    }
    body
}

/// 1手分の行（空白の正規化前）
///
/// `prev_to` は直前の手の移動先。一致すれば移動先を "同" にする。
pub fn move_line(
    idx: usize,
    mv: &Move,
    prev_to: Option<Square>,
    sec: u32,
    total_sec: u32,
) -> String {
    let body = move_body(mv, prev_to);
    let time = format!("( 0:{sec:02}/00:00:{total_sec:02})");
    format!("{idx:4} {body:<12} {time}")
}
