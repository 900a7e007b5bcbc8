//! 初期配置

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Player};

/// 表記 "A1" からマスを作る（盤外ならコンパイル時に失敗する）
const fn at(s: &[u8; 2]) -> Cell {
    match Cell::new(s[0] - b'A', s[1] - b'0') {
        Some(cell) => cell,
        None => panic!("layout cell is off the board"),
    }
}

#[rustfmt::skip]
const STANDARD_BLACK: [Cell; 14] = [
    at(b"A1"), at(b"A2"), at(b"A3"), at(b"A4"), at(b"A5"),
    at(b"B1"), at(b"B2"), at(b"B3"), at(b"B4"), at(b"B5"), at(b"B6"),
    at(b"C3"), at(b"C4"), at(b"C5"),
];

#[rustfmt::skip]
const STANDARD_WHITE: [Cell; 14] = [
    at(b"I5"), at(b"I6"), at(b"I7"), at(b"I8"), at(b"I9"),
    at(b"H4"), at(b"H5"), at(b"H6"), at(b"H7"), at(b"H8"), at(b"H9"),
    at(b"G5"), at(b"G6"), at(b"G7"),
];

#[rustfmt::skip]
const BELGIAN_DAISY_BLACK: [Cell; 14] = [
    at(b"A1"), at(b"A2"), at(b"B1"), at(b"B2"), at(b"B3"), at(b"C2"), at(b"C3"),
    at(b"G7"), at(b"G8"), at(b"H7"), at(b"H8"), at(b"H9"), at(b"I8"), at(b"I9"),
];

#[rustfmt::skip]
const BELGIAN_DAISY_WHITE: [Cell; 14] = [
    at(b"A4"), at(b"A5"), at(b"B4"), at(b"B5"), at(b"B6"), at(b"C5"), at(b"C6"),
    at(b"G4"), at(b"G5"), at(b"H4"), at(b"H5"), at(b"H6"), at(b"I5"), at(b"I6"),
];

#[rustfmt::skip]
const GERMAN_DAISY_BLACK: [Cell; 14] = [
    at(b"B1"), at(b"B2"), at(b"C1"), at(b"C2"), at(b"C3"), at(b"D2"), at(b"D3"),
    at(b"F7"), at(b"F8"), at(b"G7"), at(b"G8"), at(b"G9"), at(b"H8"), at(b"H9"),
];

#[rustfmt::skip]
const GERMAN_DAISY_WHITE: [Cell; 14] = [
    at(b"B5"), at(b"B6"), at(b"C5"), at(b"C6"), at(b"C7"), at(b"D6"), at(b"D7"),
    at(b"F3"), at(b"F4"), at(b"G3"), at(b"G4"), at(b"G5"), at(b"H4"), at(b"H5"),
];

/// 初期配置の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Standard,
    BelgianDaisy,
    GermanDaisy,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Standard, Layout::BelgianDaisy, Layout::GermanDaisy];

    /// 手番 `player` の玉を置くマス
    pub const fn cells(self, player: Player) -> &'static [Cell; 14] {
        match (self, player) {
            (Layout::Standard, Player::Black) => &STANDARD_BLACK,
            (Layout::Standard, Player::White) => &STANDARD_WHITE,
            (Layout::BelgianDaisy, Player::Black) => &BELGIAN_DAISY_BLACK,
            (Layout::BelgianDaisy, Player::White) => &BELGIAN_DAISY_WHITE,
            (Layout::GermanDaisy, Player::Black) => &GERMAN_DAISY_BLACK,
            (Layout::GermanDaisy, Player::White) => &GERMAN_DAISY_WHITE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::BelgianDaisy => "belgian-daisy",
            Layout::GermanDaisy => "german-daisy",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 初期配置名の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout: {0:?} (expected standard, belgian-daisy or german-daisy)")]
pub struct ParseLayoutError(pub String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}
