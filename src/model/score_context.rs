use super::*;

// 成立した役 (ドラを含む)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Yaku {
    pub name: String, // 役名
    pub fan: usize,   // 飜数 (役満の場合は倍率)
}

// 符の内訳
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fu {
    pub name: String, // 加符の名称
    pub fu: usize,    // 符数
}

// 支払いの形. 各支払いは100点単位に切り上げ済み.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Payment {
    Ron(Point),          // 放銃者の支払い
    DealerTsumo(Point),  // 親ツモ: 子全員の支払い
    Tsumo(Point, Point), // 子ツモ: (子の支払い, 親の支払い)
}

impl Payment {
    // 本場,供託を除いた和了得点
    pub fn base_gain(&self) -> Score {
        match self {
            Self::Ron(p) => *p,
            Self::DealerTsumo(p) => p * 3,
            Self::Tsumo(c, d) => c * 2 + d,
        }
    }

    // 本場(支払い者1人あたり100点)と供託リーチ棒を加えた和了得点
    pub fn total_gain(&self, round: &RoundConfig) -> Score {
        self.base_gain() + 300 * round.honba as Score + 1000 * round.riichi_sticks as Score
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreContext {
    pub yakus: Vec<Yaku>,   // 役一覧(ドラを含む)
    pub fus: Vec<Fu>,       // 符の内訳 (役満では空)
    pub fu: usize,          // 符数
    pub fan: usize,         // 飜数(ドラを含む), 役満の場合は0
    pub yakuman: usize,     // 役満倍率 (0: 通常役, 1: 役満, 2: 二倍役満, ...)
    pub base_points: Point, // 基本点
    pub score: Score,       // 和了得点 (本場・供託を除く)
    pub total: Score,       // 本場・供託を含めた和了得点
    pub payment: Payment,   // 支払いの内訳
    pub title: String,      // 満貫, 跳満, ...
}
