//! 数字入力による指し手の簡易表記
//!
//! - `"7776"`  → 77 から 76 への移動
//! - `"77761"` → 同じ移動で成り（5桁目 0 は不成）
//! - `"076"`   → 76 への打ち（駒種は呼び出し側が `drop_candidates` で決める）

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ShorthandError;
use crate::types::Square;

// `\d` は Unicode の数字にも一致するので ASCII に限定する
static RE_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,5}$").expect("static regex"));

/// 数字入力の解析結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    /// 打つ升だけが決まった状態（駒種は未定）
    DropPick { to: Square },
    /// 盤上の駒の移動
    Move {
        from: Square,
        to: Square,
        promote: bool,
    },
}

impl Shorthand {
    pub fn to(&self) -> Square {
        match *self {
            Shorthand::DropPick { to } | Shorthand::Move { to, .. } => to,
        }
    }
}

/// 3〜5桁の数字列を解析する
pub fn parse_shorthand(s: &str) -> Result<Shorthand, ShorthandError> {
    if !RE_NUMERIC.is_match(s) {
        return Err(ShorthandError::InvalidFormat(s.to_string()));
    }
    // 正規表現で ASCII 数字のみと確認済み
    let d: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
    let square = |file: u8, rank: u8| {
        let sq = Square::new(file, rank);
        if sq.is_valid() {
            Ok(sq)
        } else {
            Err(ShorthandError::OutOfRange(s.to_string()))
        }
    };

    match d.len() {
        3 => {
            if d[0] != 0 {
                return Err(ShorthandError::DropPrefix(s.to_string()));
            }
            Ok(Shorthand::DropPick {
                to: square(d[1], d[2])?,
            })
        }
        4 | 5 => {
            let from = square(d[0], d[1])?;
            let to = square(d[2], d[3])?;
            let promote = match d.get(4) {
                None | Some(0) => false,
                Some(1) => true,
                Some(&other) => {
                    return Err(ShorthandError::PromoteDigit((b'0' + other) as char));
                }
            };
            Ok(Shorthand::Move { from, to, promote })
        }
        _ => Err(ShorthandError::InvalidFormat(s.to_string())),
    }
}
