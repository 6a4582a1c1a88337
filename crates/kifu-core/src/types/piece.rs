//! 駒種（PieceKind）と駒（Piece）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;

/// 駒種（成りは `Piece::promoted` で表す）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    #[serde(rename = "K")]
    King = 0,
    #[serde(rename = "R")]
    Rook = 1,
    #[serde(rename = "B")]
    Bishop = 2,
    #[serde(rename = "G")]
    Gold = 3,
    #[serde(rename = "S")]
    Silver = 4,
    #[serde(rename = "N")]
    Knight = 5,
    #[serde(rename = "L")]
    Lance = 6,
    #[serde(rename = "P")]
    Pawn = 7,
}

/// 持駒の表示順（飛角金銀桂香歩）。玉は含まない。
pub const HAND_ORDER: [PieceKind; 7] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
    PieceKind::Pawn,
];

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 8;

    /// 全ての駒種（インデックス順）
    pub const ALL: [PieceKind; 8] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 成れる駒種か（金・玉は成れない）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceKind::Gold | PieceKind::King)
    }

    /// 平手一組での枚数
    pub const fn standard_count(self) -> u8 {
        match self {
            PieceKind::Pawn => 18,
            PieceKind::Lance | PieceKind::Knight | PieceKind::Silver | PieceKind::Gold => 4,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::King => 2,
        }
    }

    /// 不成のままでは行き所がなくなる段数（先手視点で奥から数える）
    ///
    /// 歩・香は1段目、桂は1〜2段目。それ以外は 0。
    pub const fn dead_end_ranks(self) -> u8 {
        match self {
            PieceKind::Pawn | PieceKind::Lance => 1,
            PieceKind::Knight => 2,
            _ => 0,
        }
    }

    /// 英字1文字表記（P/L/N/S/G/B/R/K）
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Gold => 'G',
            PieceKind::Silver => 'S',
            PieceKind::Knight => 'N',
            PieceKind::Lance => 'L',
            PieceKind::Pawn => 'P',
        }
    }

    /// 英字1文字から変換（大文字小文字は区別しない）
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'G' => Some(PieceKind::Gold),
            'S' => Some(PieceKind::Silver),
            'N' => Some(PieceKind::Knight),
            'L' => Some(PieceKind::Lance),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_char(c),
            _ => None,
        }
        .ok_or_else(|| format!("unknown piece kind: {s}"))
    }
}

/// 盤上の駒。値型なので盤・スナップショット間で共有されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    #[serde(default)]
    pub promoted: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            promoted: false,
        }
    }

    #[inline]
    pub const fn promoted(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            promoted: true,
        }
    }

    /// 成った駒を返す
    #[inline]
    pub const fn promote(self) -> Self {
        Piece {
            promoted: true,
            ..self
        }
    }
}
