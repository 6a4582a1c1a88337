//! 升目（Square）
//!
//! 筋・段とも 1〜9 の KIF 座標。`Square::new` は範囲を検査しないので、
//! 外部入力から作った升は使う前に `is_valid` で確かめること。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;

/// 升目（筋 1〜9、段 1〜9）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// 筋・段の数
    pub const SIZE: u8 = 9;

    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Square { file, rank }
    }

    /// 盤内（1〜9, 1〜9）かどうか
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.file >= 1 && self.file <= Self::SIZE && self.rank >= 1 && self.rank <= Self::SIZE
    }

    /// 相対段（手番側から見て一番奥が1）
    #[inline]
    pub const fn relative_rank(self, color: Color) -> u8 {
        match color {
            Color::Black => self.rank,
            Color::White => Self::SIZE + 1 - self.rank,
        }
    }

    /// 成れる段かどうか（先手視点で1-3段、後手視点で7-9段）
    #[inline]
    pub const fn in_promotion_zone(self, color: Color) -> bool {
        self.relative_rank(color) <= 3
    }

    /// 盤面配列のインデックス（盤内の升のみ）
    #[inline]
    pub(crate) const fn index(self) -> (usize, usize) {
        (self.file as usize - 1, self.rank as usize - 1)
    }

    /// 盤内の全升（9筋から1筋、1段から9段の順）
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=Self::SIZE)
            .flat_map(|rank| (1..=Self::SIZE).rev().map(move |file| Square::new(file, rank)))
    }
}

/// "76" のような筋・段の2桁表記
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = String;

    /// "76" 形式をパースする（盤外は Err）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u32> = s
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<_>>()
            .ok_or_else(|| format!("invalid square: {s}"))?;
        match digits.as_slice() {
            [file, rank] => {
                let sq = Square::new(*file as u8, *rank as u8);
                if sq.is_valid() {
                    Ok(sq)
                } else {
                    Err(format!("square out of board: {s}"))
                }
            }
            _ => Err(format!("invalid square: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Square::new(1, 1).is_valid());
        assert!(Square::new(9, 9).is_valid());
        assert!(!Square::new(0, 5).is_valid());
        assert!(!Square::new(5, 10).is_valid());
    }

    #[test]
    fn test_relative_rank() {
        assert_eq!(Square::new(5, 1).relative_rank(Color::Black), 1);
        assert_eq!(Square::new(5, 9).relative_rank(Color::White), 1);
        assert_eq!(Square::new(5, 5).relative_rank(Color::White), 5);
    }

    #[test]
    fn test_promotion_zone() {
        // 先手: 1-3段で成れる
        assert!(Square::new(2, 3).in_promotion_zone(Color::Black));
        assert!(!Square::new(2, 4).in_promotion_zone(Color::Black));

        // 後手: 7-9段で成れる
        assert!(!Square::new(8, 6).in_promotion_zone(Color::White));
        assert!(Square::new(8, 7).in_promotion_zone(Color::White));
    }

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "76".parse().unwrap();
        assert_eq!(sq, Square::new(7, 6));
        assert_eq!(sq.to_string(), "76");
        assert!("70".parse::<Square>().is_err());
        assert!("7".parse::<Square>().is_err());
        assert!("7a".parse::<Square>().is_err());
    }

    #[test]
    fn test_all_order() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Square::new(9, 1));
        assert_eq!(all[8], Square::new(1, 1));
        assert_eq!(all[80], Square::new(1, 9));
    }
}
