//! KIF 形式の棋譜出力
//!
//! 開始局面のスナップショットと指し手列から、詰将棋用の KIF テキストを組み立てる。
//! 出力はバイト単位で固定の書式に従う。

mod board;
mod format;
mod hands;
mod tables;

use chrono::{Local, NaiveDateTime};

pub use board::board_diagram;
pub use format::{finalize_line_spacing, move_line, square_to_kif, square_to_paren};
pub use hands::{KindCounts, hand_counts, hand_summary, second_player_remaining};
pub use tables::{count_kanji, piece_kanji, promoted_glyph};

use crate::position::Snapshot;
use crate::types::{Color, Move};

/// 既定の先頭コメント行
pub const DEFAULT_HEADER_COMMENT: &str = "# ----  ANKIF向け / 自作詰将棋メーカー by TUI  ----";

/// 終了日時の書式
pub const ENDED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// 出力オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KifOptions {
    /// 先頭のコメント行
    pub header_comment: String,
    /// 1手あたりの消費時間（秒）
    pub seconds_per_move: u32,
    /// 終了日時。None なら現在時刻。
    pub ended_at: Option<NaiveDateTime>,
}

impl Default for KifOptions {
    fn default() -> Self {
        Self {
            header_comment: DEFAULT_HEADER_COMMENT.to_string(),
            seconds_per_move: 1,
            ended_at: None,
        }
    }
}

/// KIF テキストを生成する（末尾は改行）
///
/// 指し手は検証しない。後手の持駒は開始局面から消去法で推定する。
pub fn generate_kif(start: &Snapshot, moves: &[Move], opts: &KifOptions) -> String {
    let first_hand = hand_counts(&start.hands, Color::Black);
    let second_hand = second_player_remaining(&start.board, &first_hand);
    let ended_at = opts.ended_at.unwrap_or_else(|| Local::now().naive_local());

    let mut lines = vec![
        opts.header_comment.clone(),
        "手合割：詰将棋".to_string(),
        "先手：先手".to_string(),
        "後手：後手".to_string(),
        format!("後手の持駒：{}", hand_summary(&second_hand)),
        board_diagram(&start.board),
        format!("先手の持駒：{}", hand_summary(&first_hand)),
        format!("終了日時：{}", ended_at.format(ENDED_AT_FORMAT)),
        "手数----指手---------消費時間--".to_string(),
    ];

    let sec = opts.seconds_per_move;
    let mut total = 0u32;
    let mut prev_to = None;
    for (i, mv) in moves.iter().enumerate() {
        total = total.saturating_add(sec);
        lines.push(finalize_line_spacing(&move_line(i + 1, mv, prev_to, sec, total)));
        prev_to = Some(mv.to);
    }
    if !moves.is_empty() {
        lines.push(format!("まで{}手で詰み", moves.len()));
    }

    log::debug!("generated KIF with {} moves", moves.len());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
