use super::*;
use crate::util::misc::Res;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MeldType {
    Single,  // 国士無双の単独牌
    Pair,    // 対子
    Shuntsu, // 順子
    Koutsu,  // 刻子
    Kantsu,  // 槓子
}

// 和了形を構成する面子. 副露した面子と手牌から分解した面子の両方に使用する.
// 暗槓はis_open = falseのまま門前を崩さない.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meld {
    pub type_: MeldType,
    pub tiles: Vec<Tile>,
    pub is_open: bool,
}

impl Meld {
    pub fn new(mut tiles: Vec<Tile>, is_open: bool) -> Res<Self> {
        tiles.sort();
        let ns: Vec<Tnum> = tiles.iter().map(|t| t.n()).collect();
        let same_type = tiles.iter().all(|t| t.0 == tiles[0].0);
        let same_tile = same_type && ns.iter().all(|&n| n == ns[0]);
        let type_ = match tiles.len() {
            1 => MeldType::Single,
            2 if same_tile => MeldType::Pair,
            3 if same_tile => MeldType::Koutsu,
            3 if same_type && tiles[0].is_suit() && ns[1] == ns[0] + 1 && ns[2] == ns[0] + 2 => {
                MeldType::Shuntsu
            }
            4 if same_tile => MeldType::Kantsu,
            _ => {
                let s: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
                Err(format!("invalid meld composition: {}", s.join("")))?
            }
        };
        Ok(Self {
            type_,
            tiles,
            is_open,
        })
    }

    // 面子がt(赤5は通常の5と同一視)を含むかどうか
    #[inline]
    pub fn contains(&self, t: Tile) -> bool {
        let (first, last) = (self.tiles[0], self.tiles[self.tiles.len() - 1]);
        t.0 == first.0 && first.n() <= t.n() && t.n() <= last.n()
    }

    // 么九牌を含む (チャンタ系の判定用, Singleは対象外)
    #[inline]
    pub fn has_end(&self) -> bool {
        self.type_ != MeldType::Single
            && (self.tiles[0].is_end() || self.tiles[self.tiles.len() - 1].is_end())
    }

    // 么九牌のみで構成される
    #[inline]
    pub fn is_all_end(&self) -> bool {
        self.type_ != MeldType::Single
            && self.tiles[0].is_end()
            && self.tiles[self.tiles.len() - 1].is_end()
    }

    // 字牌のみで構成される
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.tiles[0].is_hornor()
    }

}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.tiles {
            write!(f, "{}", t.1)?;
        }
        write!(f, "{}", ['m', 'p', 's', 'z'][self.tiles[0].0])?;
        if self.is_open {
            write!(f, "o")?;
        }
        Ok(())
    }
}

impl PartialOrd for Meld {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// 先頭牌 -> 種別 -> 構成牌(赤5は通常の5の直後) -> 副露の順
impl Ord for Meld {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.tiles[0], self.type_, &self.tiles, self.is_open).cmp(&(
            other.tiles[0],
            other.type_,
            &other.tiles,
            other.is_open,
        ))
    }
}
