use super::*;

// 点数計算に影響するルール設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub double_wind_fu: usize,     // 連風牌の雀頭の符 (2 or 4)
    pub accumulated_yakuman: bool, // 数え役満 (無効の場合13翻以上は三倍満)
    pub multiple_yakuman: bool,    // 役満の複合 (無効の場合は常に一倍)
    pub double_yakuman: usize,     // ダブル役満の倍率 (1 or 2)
    pub round_up_mangan: bool,     // 切り上げ満貫 (30符4翻, 60符3翻)
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            double_wind_fu: 4,
            accumulated_yakuman: true,
            multiple_yakuman: true,
            double_yakuman: 2,
            round_up_mangan: false,
        }
    }
}

// 局の情報のうち点数計算に必要なもの
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    pub prevalent_wind: Tnum, // 場風
    pub seat_wind: Tnum,      // 自風
    pub honba: usize,         // 本場
    pub riichi_sticks: usize, // 供託のリーチ棒
}

impl RoundConfig {
    #[inline]
    pub fn is_dealer(&self) -> bool {
        self.seat_wind == WE
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            prevalent_wind: WE,
            seat_wind: WE,
            honba: 0,
            riichi_sticks: 0,
        }
    }
}
