//! 問題ファイルの読み込みと手順の再生
//!
//! ```toml
//! moves = ["2433", "3221", "022G"]
//!
//! [start]
//! preset = "empty"
//! side_to_move = "black"
//!
//! [[start.pieces]]
//! square = "24"
//! side = "black"
//! kind = "G"
//!
//! [start.hands.black]
//! G = 1
//! ```

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, bail};
use kifu_core::{
    Color, Move, MoveError, Piece, PieceKind, Position, Shorthand, Snapshot, Square,
    parse_shorthand,
};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Empty,
    Hirate,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieceSpec {
    pub square: String,
    pub side: Color,
    pub kind: PieceKind,
    #[serde(default)]
    pub promoted: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandsSpec {
    #[serde(default)]
    pub black: BTreeMap<PieceKind, u8>,
    #[serde(default)]
    pub white: BTreeMap<PieceKind, u8>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartSpec {
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub side_to_move: Color,
    #[serde(default)]
    pub pieces: Vec<PieceSpec>,
    #[serde(default)]
    pub hands: HandsSpec,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    #[serde(default)]
    pub start: StartSpec,
    #[serde(default)]
    pub moves: Vec<String>,
}

/// 再生結果
#[derive(Debug)]
pub struct Replay {
    /// 開始局面
    pub start: Snapshot,
    /// 全手順を指した後の局面
    pub position: Position,
}

impl Problem {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// 開始局面を組み立てる
    pub fn start_position(&self) -> Result<Position> {
        let start = &self.start;
        let mut pos = match start.preset {
            Preset::Empty => Position::empty(),
            Preset::Hirate => Position::hirate(),
        };
        pos.side_to_move = start.side_to_move;

        for spec in &start.pieces {
            let sq: Square = spec
                .square
                .parse()
                .map_err(|e| anyhow!("invalid [[start.pieces]] entry: {e}"))?;
            if spec.promoted && !spec.kind.can_promote() {
                bail!("{} at {sq} cannot be promoted", spec.kind);
            }
            if pos.piece_at(sq).is_some() {
                log::warn!("start piece at {sq} overwrites an existing piece");
            }
            let piece = Piece {
                color: spec.side,
                kind: spec.kind,
                promoted: spec.promoted,
            };
            pos.set_piece_at(sq, Some(piece));
        }

        let hands = [
            (Color::Black, &start.hands.black),
            (Color::White, &start.hands.white),
        ];
        for (color, hand) in hands {
            for (&kind, &n) in hand {
                if n > kind.standard_count() {
                    bail!(
                        "too many {kind} in {} hand: {n} (max {})",
                        color.label(),
                        kind.standard_count()
                    );
                }
                pos.set_hand_count(color, kind, n);
            }
        }
        Ok(pos)
    }

    /// 開始局面から全手順を厳密適用で再生する
    ///
    /// 最初の違法手で中断し、1 始まりの手数を添えたエラーを返す。
    pub fn replay(&self) -> Result<Replay> {
        let mut position = self.start_position()?;
        let start = position.begin_play();

        for (i, code) in self.moves.iter().enumerate() {
            apply_code(&mut position, code)
                .with_context(|| format!("move {} ({code:?}) rejected", i + 1))?;
        }
        log::info!("replayed {} moves", position.moves.len());
        Ok(Replay { start, position })
    }
}

/// "022G" のような末尾の駒種指定を切り離す
fn split_kind_suffix(code: &str) -> Result<(&str, Option<PieceKind>)> {
    match code.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => {
            let kind = PieceKind::from_char(c)
                .with_context(|| format!("unknown piece letter {c:?}"))?;
            Ok((&code[..i], Some(kind)))
        }
        _ => Ok((code, None)),
    }
}

/// 打ちの駒種を決める（指定があれば候補内か確認、なければ候補がちょうど1つ）
fn resolve_drop_kind(
    pos: &Position,
    to: Square,
    declared: Option<PieceKind>,
) -> Result<PieceKind> {
    let candidates = pos.drop_candidates(to);
    let list = || {
        candidates
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    match (declared, candidates.as_slice()) {
        (Some(kind), _) if candidates.contains(&kind) => Ok(kind),
        (Some(kind), _) => bail!("cannot drop {kind} on {to} (candidates: [{}])", list()),
        (None, [kind]) => Ok(*kind),
        (None, []) => bail!("nothing can be dropped on {to}"),
        (None, _) => bail!("ambiguous drop on {to}: add a piece letter, one of [{}]", list()),
    }
}

/// 1手分の数字入力を局面に適用する
pub fn apply_code(pos: &mut Position, code: &str) -> Result<Move> {
    let (digits, declared) = split_kind_suffix(code.trim())?;
    match parse_shorthand(digits)? {
        Shorthand::DropPick { to } => {
            let kind = resolve_drop_kind(pos, to, declared)?;
            pos.apply_move_strict(kind, None, to, false)?;
        }
        Shorthand::Move { from, to, promote } => {
            let kind = match declared {
                Some(kind) => kind,
                None => pos.piece_at(from).ok_or(MoveError::NoPieceAtOrigin(from))?.kind,
            };
            pos.apply_move_strict(kind, Some(from), to, promote)?;
        }
    }
    pos.moves
        .last()
        .copied()
        .context("move log is empty after a successful apply")
}
