//! 持駒（Hands）

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::{Color, PieceKind};

/// 両者の持駒。`[手番][駒種]` の枚数で、無い駒種は 0。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hands([[u8; PieceKind::NUM]; Color::NUM]);

impl Hands {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u8 {
        self.0[color.index()][kind.index()]
    }

    #[inline]
    pub fn set(&mut self, color: Color, kind: PieceKind, n: u8) {
        self.0[color.index()][kind.index()] = n;
    }

    pub fn add(&mut self, color: Color, kind: PieceKind) {
        let slot = &mut self.0[color.index()][kind.index()];
        *slot = slot.saturating_add(1);
    }

    /// 1枚減らす。持っていなければ false。
    pub fn take(&mut self, color: Color, kind: PieceKind) -> bool {
        let slot = &mut self.0[color.index()][kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// 1枚以上ある駒種と枚数（飛角金銀桂香歩、最後に玉）
    pub fn iter(&self, color: Color) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        super::HAND_ORDER
            .iter()
            .copied()
            .chain(std::iter::once(PieceKind::King))
            .map(move |k| (k, self.count(color, k)))
            .filter(|&(_, n)| n > 0)
    }

    pub fn is_empty(&self, color: Color) -> bool {
        self.iter(color).next().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Serialize for Hands {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view: BTreeMap<&str, BTreeMap<PieceKind, u8>> = [Color::Black, Color::White]
            .into_iter()
            .map(|c| {
                let key = match c {
                    Color::Black => "black",
                    Color::White => "white",
                };
                (key, self.iter(c).collect())
            })
            .collect();
        view.serialize(serializer)
    }
}
