use serde::{de, ser};

use super::*;
use crate::control::string::{tile_number_from_char, tile_type_from_char};
use crate::util::misc::Res;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)
pub const Z8: Tile = Tile(TZ, UK); // unknown tile

impl Tile {
    pub fn from_symbol(s: &str) -> Res<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            Err(format!("invalid tile symbol: {s}"))?;
        }
        let t = tile_type_from_char(chars[0])?;
        let n = tile_number_from_char(chars[1])?;
        if t == TZ && !(WE..=DR).contains(&n) {
            Err(format!("invalid tile symbol: {s}"))?;
        }
        Ok(Self(t, n))
    }

    // 数字部分 (赤5は5に変換)
    #[inline]
    pub fn n(&self) -> Tnum {
        if self.1 == 0 { 5 } else { self.1 }
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        if self.1 == 0 { Self(self.0, 5) } else { self }
    }

    // 赤5
    #[inline]
    pub fn is_red5(&self) -> bool {
        self.0 != TZ && self.1 == 0
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.0 == TZ
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0 != TZ && (self.1 == 1 || self.1 == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == TZ || self.1 == 1 || self.1 == 9
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && self.1 <= WN
    }

    // 三元牌
    #[inline]
    pub fn is_doragon(&self) -> bool {
        self.0 == TZ && DW <= self.1 && self.1 <= DR
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // 赤5は通常の5の直後に配置
        (self.0, self.n(), self.1 == 0).cmp(&(other.0, other.n(), other.1 == 0))
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_identifier(TileVisitor)
    }
}

// [TileTable]
// 牌種×牌数値の保有数テーブル. 赤5はindex0と5の両方にカウントする.
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_order() {
        let mut tiles = vec![
            Tile(TZ, WE),
            Tile(TM, 0),
            Tile(TM, 5),
            Tile(TM, 6),
            Tile(TM, 4),
            Tile(TP, 1),
        ];
        tiles.sort();
        assert_eq!(
            tiles,
            vec![
                Tile(TM, 4),
                Tile(TM, 5),
                Tile(TM, 0),
                Tile(TM, 6),
                Tile(TP, 1),
                Tile(TZ, WE),
            ]
        );
    }

    #[test]
    fn test_tile_symbol() {
        assert_eq!(Tile::from_symbol("m5").unwrap(), Tile(TM, 5));
        assert_eq!(Tile::from_symbol("s0").unwrap(), Tile(TS, 0));
        assert_eq!(Tile::from_symbol("z7").unwrap(), Tile(TZ, DR));
        assert!(Tile::from_symbol("z8").is_err());
        assert!(Tile::from_symbol("z0").is_err());
        assert!(Tile::from_symbol("x5").is_err());
        assert_eq!(Tile(TP, 0).to_string(), "p0");
    }

    #[test]
    fn test_tile_predicates() {
        assert!(Tile(TM, 0).is_red5());
        assert_eq!(Tile(TM, 0).n(), 5);
        assert!(!Tile(TM, 0).is_end());
        assert!(Tile(TS, 9).is_terminal());
        assert!(Tile(TZ, WN).is_wind());
        assert!(Tile(TZ, DG).is_doragon());
        assert!(Tile(TZ, WE).is_end());
        assert!(!Tile(TZ, DR).is_suit());
    }
}
